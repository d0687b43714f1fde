//! Core types for the voice form-filling system
//!
//! This crate provides the types shared across all other crates:
//! - Form field identifiers
//! - Language tags reported by ASR backends
//! - Transcript values and the capture boundary trait
//! - Error types

pub mod error;
pub mod field;
pub mod language;
pub mod transcript;

pub use error::{Error, Result};
pub use field::Field;
pub use language::Language;
pub use transcript::{TranscriptResult, TranscriptSource};
