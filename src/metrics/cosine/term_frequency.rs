//! Term-frequency cosine backend
//!
//! Raw whitespace-token counts, no weighting. Always available.

use super::CosineBackend;
use crate::error::SimResult;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, Default)]
pub struct TermFrequencyCosine;

impl TermFrequencyCosine {
    /// `dot(A, B) / (|A| * |B|)`, or 0.0 when either side has no tokens
    pub fn cosine(&self, a: &str, b: &str) -> f64 {
        let counts_a = term_counts(a);
        let counts_b = term_counts(b);

        let norm_a = magnitude(&counts_a);
        let norm_b = magnitude(&counts_b);
        if norm_a == 0.0 || norm_b == 0.0 {
            return 0.0;
        }

        // Empty f64 sums are -0.0; fold from +0.0 so disjoint texts give 0.0
        let dot = counts_a
            .iter()
            .filter_map(|(term, &ca)| counts_b.get(term).map(|&cb| (ca * cb) as f64))
            .fold(0.0, |acc, x| acc + x);

        (dot / (norm_a * norm_b)).clamp(0.0, 1.0)
    }
}

impl CosineBackend for TermFrequencyCosine {
    fn similarity(&self, a: &str, b: &str) -> SimResult<f64> {
        Ok(self.cosine(a, b))
    }

    fn name(&self) -> &str {
        "term_frequency"
    }
}

fn term_counts(text: &str) -> BTreeMap<&str, usize> {
    let mut counts = BTreeMap::new();
    for token in text.split_whitespace() {
        *counts.entry(token).or_insert(0) += 1;
    }
    counts
}

fn magnitude(counts: &BTreeMap<&str, usize>) -> f64 {
    counts
        .values()
        .map(|&c| (c * c) as f64)
        .sum::<f64>()
        .sqrt()
}
