//! Quill Session - The host-facing editing session
//!
//! This crate provides:
//! - `EditorSession`: one document, its selection and its history
//! - Change notifications for every committed edit
//! - The preview toggle and keyboard shortcut dispatch

pub mod error;
pub mod session;
pub mod shortcuts;

pub use error::*;
pub use session::*;
pub use shortcuts::*;
