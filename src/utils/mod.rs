//! Utility functions and helpers

pub mod language;

pub use language::{candidate_paths, read_language, require_language, with_extension};
