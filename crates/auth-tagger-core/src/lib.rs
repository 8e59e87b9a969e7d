pub mod category;
pub mod config;
pub mod error;
pub mod summary;
pub mod tagger;

pub use config::{TaggerOptions, DEFAULT_OUTPUT_DIR, MASTER_FILE};
pub use error::{Result, TaggerError};
pub use summary::{Summary, SUMMARY_HEADER};
pub use tagger::{process, Tagger};

// Category system
pub use category::{
    BuiltinCategory, CategoryClassifier, CategoryDef, CategoryTable, Classification, TaggedLine,
    BUILTIN_CATEGORIES, FALLBACK_CATEGORY,
};
