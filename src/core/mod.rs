//! Core functionality for folder discovery and options loading

pub mod collector;
pub mod folder_options;
pub mod parallel;
pub mod walker;

pub use collector::ReadmeCollector;
pub use folder_options::FolderOptionsLoader;
pub use walker::ComponentWalker;
