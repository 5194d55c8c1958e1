//! Levenshtein (edit) distance
//!
//! Single-row dynamic programming over characters.
//!
//! # Complexity
//! - Time: O(m×n)
//! - Space: O(min(m, n)), the shorter string plus one row sized by it

/// Minimum number of single-character insertions, deletions or
/// substitutions turning `a` into `b`. Every edit costs 1.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_len = a.chars().count();
    let b_len = b.chars().count();

    if a_len == 0 {
        return b_len;
    }
    if b_len == 0 {
        return a_len;
    }

    // Stream the longer string; only the shorter one is buffered
    let (outer, inner) = if a_len >= b_len { (a, b) } else { (b, a) };
    let inner: Vec<char> = inner.chars().collect();

    let mut row: Vec<usize> = (0..=inner.len()).collect();

    for (i, oc) in outer.chars().enumerate() {
        // row[j] still holds the previous row's value until overwritten
        let mut diagonal = row[0];
        row[0] = i + 1;

        for (j, &ic) in inner.iter().enumerate() {
            let above = row[j + 1];
            let substitution = diagonal + usize::from(oc != ic);
            let deletion = above + 1;
            let insertion = row[j] + 1;

            row[j + 1] = substitution.min(deletion).min(insertion);
            diagonal = above;
        }
    }

    row[inner.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical() {
        assert_eq!(levenshtein_distance("hello world", "hello world"), 0);
        assert_eq!(levenshtein_distance("", ""), 0);
    }

    #[test]
    fn test_empty_side() {
        assert_eq!(levenshtein_distance("hello world", ""), 11);
        assert_eq!(levenshtein_distance("", "abc"), 3);
    }

    #[test]
    fn test_classic_cases() {
        assert_eq!(levenshtein_distance("cat", "bat"), 1);
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(levenshtein_distance("flaw", "lawn"), 2);
        assert_eq!(levenshtein_distance("abc", "cba"), 2);
    }

    #[test]
    fn test_symmetric_with_unequal_lengths() {
        assert_eq!(
            levenshtein_distance("short", "a much longer sentence"),
            levenshtein_distance("a much longer sentence", "short")
        );
    }

    #[test]
    fn test_longer_side_either_position() {
        assert_eq!(levenshtein_distance("ab", "xaybz"), 3);
        assert_eq!(levenshtein_distance("xaybz", "ab"), 3);
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        assert_eq!(levenshtein_distance("é", ""), 1);
        assert_eq!(levenshtein_distance("naïve", "naive"), 1);
    }

    #[test]
    fn test_matches_strsim() {
        let pairs = [
            ("the quick brown fox", "the quik brown fax"),
            ("invoice 2024 total", "invoice twenty twenty four total"),
            ("speech to text", "text to speech"),
        ];
        for (a, b) in pairs {
            assert_eq!(levenshtein_distance(a, b), strsim::levenshtein(a, b));
        }
    }
}
