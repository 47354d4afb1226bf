//! Quill History - Linear undo/redo history
//!
//! This crate provides `History`, an append-only log of full document
//! snapshots plus a cursor. Recording after an undo prunes the redo branch.

pub mod history;

pub use history::*;
