//! Quill Render - Markup to HTML for the live preview
//!
//! Rendering is a fixed pipeline of global find-and-replace passes. Later
//! passes assume the markup produced by earlier ones, so the order in
//! [`PASSES`] is part of the output format.
//!
//! The renderer is total: unmatched or half-written markup passes through
//! as literal text.

pub mod passes;
pub mod pipeline;

pub use pipeline::*;
