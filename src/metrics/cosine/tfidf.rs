//! TF-IDF cosine backend
//!
//! The two compared texts form the entire corpus, so IDF only separates
//! terms shared by both texts from terms unique to one of them.
//!
//! Weighting follows the common vectorizer defaults:
//! - terms are runs of two or more word characters
//! - TF is the raw count
//! - `idf(t) = ln((1 + n) / (1 + df(t))) + 1` with `n = 2`
//! - vectors are L2-normalized before the dot product

use super::CosineBackend;
use crate::error::{SimError, SimResult};
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeMap;

lazy_static! {
    static ref TERM_PATTERN: Regex = Regex::new(r"\b\w\w+\b").expect("valid term pattern");
}

const CORPUS_SIZE: f64 = 2.0;

#[derive(Debug, Clone, Copy, Default)]
pub struct TfIdfCosine;

impl TfIdfCosine {
    /// Per-term counts for both documents, keyed in sorted order
    fn vocabulary<'a>(a: &'a str, b: &'a str) -> BTreeMap<&'a str, [usize; 2]> {
        let mut vocabulary: BTreeMap<&str, [usize; 2]> = BTreeMap::new();
        for (doc, text) in [a, b].into_iter().enumerate() {
            for term in TERM_PATTERN.find_iter(text) {
                vocabulary.entry(term.as_str()).or_insert([0, 0])[doc] += 1;
            }
        }
        vocabulary
    }

    fn smooth_idf(document_frequency: usize) -> f64 {
        ((1.0 + CORPUS_SIZE) / (1.0 + document_frequency as f64)).ln() + 1.0
    }
}

impl CosineBackend for TfIdfCosine {
    fn similarity(&self, a: &str, b: &str) -> SimResult<f64> {
        let vocabulary = Self::vocabulary(a, b);
        if vocabulary.is_empty() {
            return Err(SimError::Backend(
                "empty vocabulary: neither text has a term of two or more characters".to_string(),
            ));
        }

        let mut dot = 0.0f64;
        let mut norm_a = 0.0f64;
        let mut norm_b = 0.0f64;

        for [count_a, count_b] in vocabulary.into_values() {
            let df = usize::from(count_a > 0) + usize::from(count_b > 0);
            let idf = Self::smooth_idf(df);
            let weight_a = count_a as f64 * idf;
            let weight_b = count_b as f64 * idf;

            dot += weight_a * weight_b;
            norm_a += weight_a * weight_a;
            norm_b += weight_b * weight_b;
        }

        let magnitude = norm_a.sqrt() * norm_b.sqrt();
        if magnitude == 0.0 {
            return Ok(0.0);
        }

        Ok((dot / magnitude).clamp(0.0, 1.0))
    }

    fn name(&self) -> &str {
        "tfidf"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical() {
        let sim = TfIdfCosine.similarity("hello world", "hello world").unwrap();
        assert!((sim - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_side_is_zero() {
        assert_eq!(TfIdfCosine.similarity("hello world", "").unwrap(), 0.0);
        assert_eq!(TfIdfCosine.similarity("", "hello world").unwrap(), 0.0);
    }

    #[test]
    fn test_empty_vocabulary_fails() {
        assert!(matches!(
            TfIdfCosine.similarity("", ""),
            Err(SimError::Backend(_))
        ));
        // Single-character tokens are not terms
        assert!(TfIdfCosine.similarity("a b c", "x").is_err());
    }

    #[test]
    fn test_disjoint() {
        assert_eq!(TfIdfCosine.similarity("cat", "bat").unwrap(), 0.0);
    }

    #[test]
    fn test_unique_terms_weigh_more() {
        // hello is shared (idf 1), world and there are unique (idf 1 + ln 1.5)
        let idf_unique = 1.0 + 1.5f64.ln();
        let expected = 1.0 / (1.0 + idf_unique * idf_unique);
        let sim = TfIdfCosine.similarity("hello world", "hello there").unwrap();
        assert!((sim - expected).abs() < 1e-12);
    }

    #[test]
    fn test_symmetric() {
        let ab = TfIdfCosine.similarity("the cat sat on the mat", "the mat sat").unwrap();
        let ba = TfIdfCosine.similarity("the mat sat", "the cat sat on the mat").unwrap();
        assert_eq!(ab, ba);
    }

    #[test]
    fn test_smooth_idf() {
        assert!((TfIdfCosine::smooth_idf(2) - 1.0).abs() < 1e-12);
        assert!(TfIdfCosine::smooth_idf(1) > TfIdfCosine::smooth_idf(2));
    }
}
