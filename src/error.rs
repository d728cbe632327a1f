// Error types for literumilo.
//
// Grounded on lingodb's core::error::LingoError: a single thiserror enum at
// the crate boundary, with #[from] conversions for the I/O errors that
// naturally arise from dictionary and input-file loading.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LiterumiloError {
    /// I/O error while reading a dictionary file or an input text file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The configured or default dictionary file does not exist.
    #[error("dictionary file not found: {path}")]
    DictionaryNotFound { path: PathBuf },

    /// `analyze_file` was pointed at a path that doesn't exist.
    #[error("input file not found: {path}")]
    InputFileNotFound { path: PathBuf },

    /// A dictionary row had fewer than 9 tab-separated fields. Non-fatal at
    /// load time (the row is skipped and loading continues); surfaced here
    /// for callers that want strict reporting instead of the lenient
    /// skip-and-log default.
    #[error("malformed dictionary row: {line}")]
    MalformedDictionary { line: String },
}

pub type Result<T> = std::result::Result<T, LiterumiloError>;
