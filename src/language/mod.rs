// Types representing the object model of a MythicMobs pack

mod error;
mod types;
mod value;

// Re-export all public symbols
pub use error::*;
pub use types::*;
pub use value::*;
