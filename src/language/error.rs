use std::{fmt, path::PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingError {
    pub problem: String,
    pub details: String,
    pub filename: PathBuf,
}

impl fmt::Display for LoadingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self
            .details
            .is_empty()
        {
            write!(f, "{}", self.problem)
        } else {
            write!(f, "{}: {}", self.problem, self.details)
        }
    }
}

/// The ways converting a file into records can fail outright. Everything
/// short of these is tolerated and reported as an Issue instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsingError {
    /// Nothing but blank and comment lines.
    Empty,
    /// Content was present but no root key naming an entity was found.
    NoRootEntity,
    UnknownKind(String),
}

impl ParsingError {
    pub fn message(&self) -> String {
        match self {
            ParsingError::Empty => "no content".to_string(),
            ParsingError::NoRootEntity => "could not identify a root entity name".to_string(),
            ParsingError::UnknownKind(kind) => format!("unknown entity kind '{}'", kind),
        }
    }
}

impl fmt::Display for ParsingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
