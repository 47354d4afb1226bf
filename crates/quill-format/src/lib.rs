//! Quill Format - Formatting engine for the plain-text editor
//!
//! This crate provides:
//! - The two edit primitives: wrapping the selection and inserting at the cursor
//! - `apply_command`: maps each `FormatCommand` onto a primitive and its markers
//!
//! Everything here is a pure function of (command, content, selection).

pub mod engine;
pub mod error;
pub mod primitives;

pub use engine::*;
pub use error::*;
pub use primitives::*;
