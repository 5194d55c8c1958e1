//! Transcript Similarity Library
//!
//! Scores how closely an OCR transcript matches an STT transcript.

pub mod config;
pub mod core;
pub mod error;
pub mod metrics;
pub mod similarity;

pub use config::Config;
pub use error::{SimError, SimResult};
pub use similarity::{SimilarityCalculator, SimilarityResult};
