//! Error types for quill-session

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Format error: {0}")]
    Format(#[from] quill_format::FormatError),

    #[error("Core error: {0}")]
    Core(#[from] quill_core::CoreError),
}

pub type Result<T> = std::result::Result<T, SessionError>;
