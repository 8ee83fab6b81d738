//! Parallel processing utilities

use parking_lot::Mutex;
use rayon::prelude::*;

use crate::error::Result;

/// Progress update information for parallel operations
#[derive(Debug, Clone)]
pub struct ProgressUpdate {
    pub current: usize,
    pub total: usize,
    pub message: String,
}

impl ProgressUpdate {
    /// Create a new progress update
    pub fn new(current: usize, total: usize, message: impl Into<String>) -> Self {
        Self {
            current,
            total,
            message: message.into(),
        }
    }

    /// Calculate progress percentage
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.current as f64 / self.total as f64) * 100.0
        }
    }
}

/// Counts finished items and reports each one
struct Tally<'p, P> {
    done: Mutex<usize>,
    total: usize,
    progress_callback: &'p P,
}

impl<'p, P: Fn(ProgressUpdate)> Tally<'p, P> {
    fn tick(&self, label: &str) {
        let current = {
            let mut done = self.done.lock();
            *done += 1;
            *done
        };
        (self.progress_callback)(ProgressUpdate::new(current, self.total, label));
    }
}

/// Map `f` over `items` in parallel, reporting after each item.
///
/// `label` names an item in progress messages. Output keeps input order.
pub fn parallel_process_with_progress<T, F, R, L, P>(items: Vec<T>, label: L, f: F, progress_callback: P) -> Vec<R>
where
    T: Send,
    R: Send,
    F: Fn(T) -> R + Send + Sync,
    L: Fn(&T) -> String + Send + Sync,
    P: Fn(ProgressUpdate) + Send + Sync,
{
    let tally = Tally {
        done: Mutex::new(0),
        total: items.len(),
        progress_callback: &progress_callback,
    };

    items
        .into_par_iter()
        .map(|item| {
            let name = label(&item);
            let result = f(item);
            tally.tick(&name);
            result
        })
        .collect()
}

/// Like [`parallel_process_with_progress`], but the first error stops the
/// remaining work and is returned
pub fn parallel_process_with_progress_and_errors<T, F, R, L, P>(
    items: Vec<T>,
    label: L,
    f: F,
    progress_callback: P,
) -> Result<Vec<R>>
where
    T: Send,
    R: Send,
    F: Fn(T) -> Result<R> + Send + Sync,
    L: Fn(&T) -> String + Send + Sync,
    P: Fn(ProgressUpdate) + Send + Sync,
{
    let tally = Tally {
        done: Mutex::new(0),
        total: items.len(),
        progress_callback: &progress_callback,
    };

    items
        .into_par_iter()
        .map(|item| {
            let name = label(&item);
            let result = f(item);
            tally.tick(&name);
            result
        })
        .collect()
}
