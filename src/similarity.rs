//! Similarity Aggregation
//!
//! Runs every metric over a normalized pair and combines cosine and
//! Jaccard into one weighted score.

use crate::config::Config;
use crate::core::NormalizedText;
use crate::metrics::cosine::TermFrequencyCosine;
use crate::metrics::{create_backend, jaccard_similarity, levenshtein_distance, CosineBackend};
use serde::Serialize;
use tracing::debug;

/// Weight of cosine similarity in the combined score
pub const COSINE_WEIGHT: f64 = 0.6;
/// Weight of Jaccard similarity in the combined score
pub const JACCARD_WEIGHT: f64 = 0.4;
/// Decimal places kept in reported scores
pub const OUTPUT_PRECISION: i32 = 4;

/// Unrounded metric values for one comparison
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    pub jaccard: f64,
    pub cosine: f64,
    pub levenshtein: usize,
}

impl Metrics {
    pub fn combined_score(&self) -> f64 {
        COSINE_WEIGHT * self.cosine + JACCARD_WEIGHT * self.jaccard
    }
}

/// Final result of one OCR/STT comparison
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimilarityResult {
    pub similarity_score: f64,
    pub jaccard: f64,
    pub cosine: f64,
    pub levenshtein: usize,
}

impl From<Metrics> for SimilarityResult {
    fn from(metrics: Metrics) -> Self {
        Self {
            similarity_score: round_score(metrics.combined_score()),
            jaccard: round_score(metrics.jaccard),
            cosine: round_score(metrics.cosine),
            levenshtein: metrics.levenshtein,
        }
    }
}

/// Round to [`OUTPUT_PRECISION`] decimals, half away from zero
///
/// Never returns `-0.0`.
pub fn round_score(value: f64) -> f64 {
    let scale = 10f64.powi(OUTPUT_PRECISION);
    (value * scale).round() / scale + 0.0
}

/// Compares transcripts with a cosine backend chosen at construction
#[derive(Debug)]
pub struct SimilarityCalculator {
    backend: Box<dyn CosineBackend>,
    fallback: TermFrequencyCosine,
}

impl SimilarityCalculator {
    pub fn new(config: &Config) -> Self {
        Self::with_backend(create_backend(config.cosine_backend))
    }

    pub fn with_backend(backend: Box<dyn CosineBackend>) -> Self {
        Self {
            backend,
            fallback: TermFrequencyCosine,
        }
    }

    pub fn backend_name(&self) -> &str {
        self.backend.name()
    }

    /// Normalize both raw texts and compare them
    pub fn compare(&self, ocr_text: &str, stt_text: &str) -> SimilarityResult {
        let ocr = NormalizedText::new(ocr_text);
        let stt = NormalizedText::new(stt_text);
        self.measure(&ocr, &stt).into()
    }

    /// Compute unrounded metrics for an already normalized pair
    pub fn measure(&self, a: &NormalizedText, b: &NormalizedText) -> Metrics {
        let jaccard = jaccard_similarity(&a.tokens(), &b.tokens());
        let cosine = self.cosine(a.as_str(), b.as_str());
        let levenshtein = levenshtein_distance(a.as_str(), b.as_str());

        debug!(
            "Metrics: jaccard={:.6} cosine={:.6} levenshtein={}",
            jaccard, cosine, levenshtein
        );

        Metrics {
            jaccard,
            cosine,
            levenshtein,
        }
    }

    fn cosine(&self, a: &str, b: &str) -> f64 {
        match self.backend.similarity(a, b) {
            Ok(cosine) => cosine,
            Err(e) => {
                debug!(
                    "Cosine backend '{}' failed, using term frequency: {}",
                    self.backend.name(),
                    e
                );
                self.fallback.cosine(a, b)
            }
        }
    }
}

impl Default for SimilarityCalculator {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
