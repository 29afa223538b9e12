//! Error handling for the dashboard compiler
//!
//! All compilation failures funnel into [`CompileError`]; the public compile
//! boundary converts them into the standard error-display component tree, so
//! these errors never reach callers directly.

use thiserror::Error;

/// Main error type for dashboard compilation
#[derive(Error, Debug)]
pub enum CompileError {
    /// The parsed document was absent or empty
    #[error("A non-empty input file is required")]
    EmptyInput,

    /// The textual document failed to parse as YAML
    #[error("Parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// A rule that compiles its children needs a sequence value
    #[error("'{key}' expects a sequence of child nodes")]
    ExpectedSequence { key: String },

    /// The captured column count does not fit an integer
    #[error("Invalid column count '{value}': {source}")]
    InvalidColumnCount {
        value: String,
        source: std::num::ParseIntError,
    },

    /// `attr:` entries were found without a `data` entry to supply the payload
    #[error("attr: entries require a sibling 'data' entry")]
    MissingDataEntry,
}

/// Result type alias for compilation internals
pub type CompileResult<T> = Result<T, CompileError>;
