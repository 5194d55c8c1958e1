//! Jaccard similarity over token sets

use std::collections::HashSet;

/// `|A ∩ B| / |A ∪ B|` over the distinct tokens of each side
///
/// Two empty token lists are declared identical (1.0).
pub fn jaccard_similarity(a_tokens: &[&str], b_tokens: &[&str]) -> f64 {
    let set_a: HashSet<&str> = a_tokens.iter().copied().collect();
    let set_b: HashSet<&str> = b_tokens.iter().copied().collect();

    if set_a.is_empty() && set_b.is_empty() {
        return 1.0;
    }

    let intersection = set_a.intersection(&set_b).count();
    let union = set_a.union(&set_b).count();

    if union == 0 {
        0.0
    } else {
        intersection as f64 / union as f64
    }
}
