// Stopword filtering — drops high-frequency closed-class words.
//
// The standard set is a fixed list of common English function words. It is
// a process-wide constant and never derived from input. The extended set adds
// the `stop-words` crate's English list on top of it.

use std::collections::HashSet;

use stop_words::{get, LANGUAGE};

/// The fixed stopword list used by default.
pub const STOPWORDS: &[&str] = &[
    "the", "and", "a", "an", "of", "to", "in", "is", "it", "that", "this", "for", "on", "with",
    "as", "by", "at", "from", "or", "be", "are", "was", "were", "but", "not", "have", "has",
    "had", "they", "their", "them", "you", "your", "i", "he", "she", "we", "us", "our", "his",
    "her", "its", "which", "who", "whom", "what", "when", "where", "why", "how", "so", "if",
    "than", "then", "there", "here", "can", "could", "would", "should", "do", "does", "did",
    "been", "will", "shall", "also",
];

/// An immutable set of words to exclude from analysis.
///
/// Membership is exact: tokens are expected to already be lowercase (the
/// normalizer guarantees this), and no fuzzy or prefix matching is done.
#[derive(Debug, Clone)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl Default for StopwordSet {
    fn default() -> Self {
        Self::standard()
    }
}

impl StopwordSet {
    /// The fixed list in [`STOPWORDS`].
    pub fn standard() -> Self {
        Self::from_words(STOPWORDS)
    }

    /// The fixed list plus the `stop-words` crate's English list.
    pub fn extended() -> Self {
        let mut set = Self::standard();
        set.words
            .extend(get(LANGUAGE::English).iter().map(|w| w.to_lowercase()));
        set
    }

    /// Build a set from an arbitrary word list. Words are lowercased.
    pub fn from_words(words: &[&str]) -> Self {
        Self {
            words: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Return the tokens not in this set, keeping their original order.
    pub fn filter(&self, tokens: &[String]) -> Vec<String> {
        tokens
            .iter()
            .filter(|t| !self.contains(t.as_str()))
            .cloned()
            .collect()
    }
}

/// Remove standard stopwords from a token sequence.
pub fn remove_stopwords(tokens: &[String]) -> Vec<String> {
    StopwordSet::standard().filter(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_remove_stopwords_preserves_order() {
        let tokens = toks(&["the", "cats", "sit", "and", "the", "dogs", "run"]);
        assert_eq!(remove_stopwords(&tokens), toks(&["cats", "sit", "dogs", "run"]));
    }

    #[test]
    fn test_exact_match_only() {
        let set = StopwordSet::from_words(&["the"]);
        let tokens = toks(&["the", "there", "theme", "them"]);
        assert_eq!(set.filter(&tokens), toks(&["there", "theme", "them"]));
    }

    #[test]
    fn test_standard_set_size() {
        // The fixed list has no duplicates
        assert_eq!(StopwordSet::standard().len(), STOPWORDS.len());
    }

    #[test]
    fn test_extended_is_superset() {
        let standard = StopwordSet::standard();
        let extended = StopwordSet::extended();
        assert!(extended.len() >= standard.len());
        for word in STOPWORDS {
            assert!(extended.contains(word), "missing {word}");
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(remove_stopwords(&[]).is_empty());
    }
}
