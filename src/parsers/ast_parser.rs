//! AST parser wrapper using OXC

use crate::error::{ReadmeError, Result};
use crate::models::language::Language;
use oxc_allocator::Allocator;
use oxc_ast::ast::Program;
use oxc_diagnostics::OxcDiagnostic;
use oxc_parser::{ParseOptions, Parser};
use oxc_span::SourceType;
use parking_lot::Mutex;
use std::path::Path;
use std::sync::Arc;

/// Thread-safe allocator pool for reuse across parses
///
/// Arenas are `Send` but not `Sync`, so the pool sits behind a mutex.
pub struct AllocatorPool {
    allocators: Arc<Mutex<Vec<Allocator>>>,
}

impl AllocatorPool {
    /// Create a new allocator pool
    pub fn new(size: usize) -> Self {
        let mut allocators = Vec::with_capacity(size);
        for _ in 0..size {
            allocators.push(Allocator::default());
        }
        Self {
            allocators: Arc::new(Mutex::new(allocators)),
        }
    }

    /// Take an allocator from the pool
    pub fn take(&self) -> Option<Allocator> {
        self.allocators.lock().pop()
    }

    /// Reset an allocator and return it to the pool
    pub fn return_allocator(&self, mut allocator: Allocator) {
        allocator.reset();
        self.allocators.lock().push(allocator);
    }
}

/// AST parser using OXC
pub struct SourceParser {
    parse_options: ParseOptions,
    allocator_pool: AllocatorPool,
}

impl SourceParser {
    /// Create a new AST parser
    pub fn new() -> Self {
        Self {
            parse_options: ParseOptions::default(),
            allocator_pool: AllocatorPool::new(num_cpus::get()),
        }
    }

    /// Source type for a dialect; the tag decides, never the file name
    pub fn source_type(language: Language) -> SourceType {
        SourceType::from_path(format!("source.{}", language.extension())).unwrap_or_default()
    }

    /// Parse `source_text` and hand the program to `analyze` while the arena
    /// is alive. Only owned data leaves this function.
    ///
    /// `path` is used for error messages only.
    pub fn parse_with<T, F>(&self, path: &Path, source_text: &str, language: Language, analyze: F) -> Result<T>
    where
        F: for<'a> FnOnce(&Program<'a>) -> Result<T>,
    {
        let allocator = self.allocator_pool.take().unwrap_or_default();

        let outcome = {
            let ret = Parser::new(&allocator, source_text, Self::source_type(language))
                .with_options(self.parse_options.clone())
                .parse();

            if ret.panicked || !ret.errors.is_empty() {
                Err(parse_error(path, &ret.errors))
            } else {
                analyze(&ret.program)
            }
        };

        self.allocator_pool.return_allocator(allocator);

        outcome
    }
}

impl Default for SourceParser {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_error(path: &Path, errors: &[OxcDiagnostic]) -> ReadmeError {
    let mut messages: Vec<String> = errors.iter().map(|e| format!("{}", e)).collect();
    if messages.is_empty() {
        messages.push(format!("failed to parse {}", path.display()));
    }
    tracing::debug!(path = %path.display(), errors = messages.len(), "parser reported diagnostics");
    ReadmeError::Parse {
        path: path.to_path_buf(),
        messages,
    }
}
