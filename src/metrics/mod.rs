//! Similarity metrics
//!
//! - Jaccard: token set overlap
//! - Cosine: vector similarity with a TF-IDF backend and a term-frequency fallback
//! - Levenshtein: character edit distance

pub mod cosine;
pub mod jaccard;
pub mod levenshtein;

pub use cosine::{create_backend, BackendChoice, CosineBackend};
pub use jaccard::jaccard_similarity;
pub use levenshtein::levenshtein_distance;
