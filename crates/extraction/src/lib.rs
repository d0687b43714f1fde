//! Transcript Field Extraction Engine
//!
//! Turns raw, noisy ASR transcripts into normalized form-field values:
//! - **Text Normalizer**: spoken symbol words ("at", "dot", "dash") to
//!   literal punctuation, whitespace collapsed away
//! - **Email Reconstructor**: staged repair of ASR-corrupted addresses
//!   (duplicated `@`, missing local-part, misspelled domains)
//! - **Field Pattern Matcher**: ordered per-field regex lists, first
//!   capture wins
//! - **Extraction Dispatcher**: routes by field and language tag
//!
//! The engine is pure and synchronous: static read-only pattern tables,
//! no shared state, no I/O beyond log emission. It never returns an
//! error — a failed extraction degrades to the documented fallback
//! (empty text or the transcript verbatim, depending on the field).
//!
//! # Example
//!
//! ```
//! use voice_form_core::Field;
//! use voice_form_extraction::extract_single_field;
//!
//! let value = extract_single_field(
//!     "my email is john dot smith at gmail dot com",
//!     Field::Email,
//!     "en",
//! );
//! assert_eq!(value, "john.smith@gmail.com");
//! ```

mod dispatch;
mod email;
mod normalize;
mod patterns;

pub use dispatch::{extract_from_transcript, extract_single_field};
pub use email::{extract_email, is_valid_email};
pub use normalize::normalize;
pub use patterns::match_field;
