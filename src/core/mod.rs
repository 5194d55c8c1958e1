//! Core text processing
//!
//! Normalization and tokenization shared by every metric.

pub mod text_normalizer;

pub use text_normalizer::{normalize, NormalizedText};
