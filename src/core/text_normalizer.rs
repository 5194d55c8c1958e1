//! Text Normalization
//!
//! Cleans OCR and STT transcripts before comparison: case folding,
//! punctuation removal and whitespace collapsing.

use std::ffi::OsStr;

/// Normalize raw text to lowercase ASCII alphanumerics separated by single spaces
///
/// Every character that is not `a-z`, `0-9` or whitespace becomes a space,
/// so `"don't"` splits into `"don t"`.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let cleaned: String = lowered
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// A transcript after normalization
///
/// Holds only `a-z`, `0-9` and single interior spaces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NormalizedText(String);

impl NormalizedText {
    pub fn new(raw: &str) -> Self {
        Self(normalize(raw))
    }

    /// Normalize a platform string. Input that is not valid UTF-8 is not
    /// text and normalizes to the empty string.
    pub fn from_os(raw: &OsStr) -> Self {
        match raw.to_str() {
            Some(text) => Self::new(text),
            None => {
                tracing::debug!("Non-UTF-8 input treated as empty text");
                Self::default()
            }
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whitespace tokens in order of appearance
    pub fn tokens(&self) -> Vec<&str> {
        self.0.split_whitespace().collect()
    }
}
