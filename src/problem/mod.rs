// Presentation of validation results and failures on the terminal

mod format;
mod summary;

// Re-export all public symbols
pub use format::*;
pub use summary::*;
