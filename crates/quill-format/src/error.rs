//! Error types for quill-format

use quill_core::CommandKind;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("{command} requires a non-empty URL")]
    EmptyUrl { command: CommandKind },
}

pub type Result<T> = std::result::Result<T, FormatError>;
