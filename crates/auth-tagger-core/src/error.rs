use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaggerError {
    #[error("Input file not found: {path}")]
    InputNotFound { path: PathBuf },

    #[error("Input is not a regular file: {path}")]
    InputNotAFile { path: PathBuf },

    #[error("Failed to read input file {path}: {source}")]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create output directory {path}: {source}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid pattern '{pattern}' in category {category}: {source}")]
    InvalidPattern {
        category: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Duplicate category: {name}")]
    DuplicateCategory { name: String },

    #[error("Category name is reserved for the fallback: {name}")]
    ReservedCategory { name: String },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TaggerError>;

impl TaggerError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InputNotFound { .. } | Self::InputNotAFile { .. } | Self::InputRead { .. } => 2,
            Self::OutputDir { .. } | Self::OutputWrite { .. } => 3,
            Self::InvalidPattern { .. }
            | Self::DuplicateCategory { .. }
            | Self::ReservedCategory { .. } => 4,
            _ => 1,
        }
    }
}
