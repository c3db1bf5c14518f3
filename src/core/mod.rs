pub mod error;
pub mod rename;

// Re-export common types for convenience
pub use error::{Error, Result};
pub use rename::{RenameOutcome, RenameSummary, Renamer, TABBAR_MAPPING};
