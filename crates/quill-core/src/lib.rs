//! Quill Core - Core types for the plain-text formatting editor
//!
//! This crate defines the data shared by every other Quill crate:
//! - `TextBuffer`: The document text plus the active selection
//! - `Selection`: A char-offset range into the document
//! - `FormatCommand`: The closed set of toolbar formatting commands
//! - `EditorConfig`: Session configuration loaded from JSON

pub mod buffer;
pub mod command;
pub mod config;
pub mod error;
pub mod id;
pub mod selection;

pub use buffer::*;
pub use command::*;
pub use config::*;
pub use error::*;
pub use id::*;
pub use selection::*;
