//! Cosine Similarity Module
//!
//! Provides a unified interface for cosine backends:
//! - TF-IDF: weighted vectors over the two-document corpus (feature `tfidf`)
//! - Term frequency: raw count vectors, always available

#[cfg(feature = "tfidf")]
pub mod tfidf;
pub mod term_frequency;

use crate::error::SimResult;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[cfg(feature = "tfidf")]
pub use tfidf::TfIdfCosine;
pub use term_frequency::TermFrequencyCosine;

/// Trait for cosine similarity backends
pub trait CosineBackend: Send + Sync + std::fmt::Debug {
    /// Cosine similarity in [0, 1] of two normalized texts
    fn similarity(&self, a: &str, b: &str) -> SimResult<f64>;

    /// Get the backend name
    fn name(&self) -> &str;
}

/// Which cosine backend to use, resolved once at startup
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum BackendChoice {
    /// TF-IDF when compiled in, term frequency otherwise
    #[default]
    Auto,
    Tfidf,
    TermFrequency,
}

/// Factory to create the configured cosine backend
pub fn create_backend(choice: BackendChoice) -> Box<dyn CosineBackend> {
    let backend: Box<dyn CosineBackend> = match choice {
        BackendChoice::Auto => tfidf_backend().unwrap_or_else(|| Box::new(TermFrequencyCosine)),
        BackendChoice::Tfidf => tfidf_backend().unwrap_or_else(|| {
            warn!("TF-IDF backend not compiled in, falling back to term frequency");
            Box::new(TermFrequencyCosine)
        }),
        BackendChoice::TermFrequency => Box::new(TermFrequencyCosine),
    };
    debug!("Cosine backend '{}' selected ({:?})", backend.name(), choice);
    backend
}

#[cfg(feature = "tfidf")]
fn tfidf_backend() -> Option<Box<dyn CosineBackend>> {
    Some(Box::new(TfIdfCosine))
}

#[cfg(not(feature = "tfidf"))]
fn tfidf_backend() -> Option<Box<dyn CosineBackend>> {
    None
}
