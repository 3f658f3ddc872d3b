// Corpus and comparison — the pipeline stages wired together.
//
// A Corpus is everything the presentation layer needs about one document;
// a Comparison pairs two of them with their similarity scores.

use serde::Serialize;
use tracing::debug;

use super::frequency::{word_frequencies, FrequencyMap};
use super::normalize::tokenize;
use super::ranking::top_n;
use super::similarity::{cosine_similarity, shared_terms, weighted_jaccard, SharedTerm};
use super::stats::{summary_stats, SummaryStats};
use super::stopwords::StopwordSet;
use crate::source::RawDocument;

/// How many shared terms a comparison keeps.
pub const SHARED_TERMS_LIMIT: usize = 15;

/// One analyzed document.
#[derive(Debug, Clone, Serialize)]
pub struct Corpus {
    pub title: String,
    /// Whether the source actually had this document. Only
    /// `from_document` ever sets this to false.
    pub found: bool,
    /// Filtered tokens in document order
    #[serde(skip)]
    pub tokens: Vec<String>,
    pub frequencies: FrequencyMap,
    pub stats: SummaryStats,
}

impl Corpus {
    /// Run raw text through normalize -> stopwords -> counting -> stats.
    ///
    /// The text is taken as an existing document, even when it is empty.
    pub fn from_text(title: &str, text: &str, stopwords: &StopwordSet) -> Self {
        let raw_tokens = tokenize(text);
        let tokens = stopwords.filter(&raw_tokens);
        let frequencies = word_frequencies(&tokens);
        let stats = summary_stats(&tokens);

        debug!(
            title = title,
            raw_tokens = raw_tokens.len(),
            kept_tokens = tokens.len(),
            vocabulary = frequencies.len(),
            "Built corpus"
        );

        Self {
            title: title.to_string(),
            found: true,
            tokens,
            frequencies,
            stats,
        }
    }

    /// Analyze a fetched document. A missing document gives an empty corpus.
    pub fn from_document(doc: &RawDocument, stopwords: &StopwordSet) -> Self {
        let mut corpus = Self::from_text(&doc.title, &doc.text, stopwords);
        corpus.found = doc.found;
        corpus
    }

    /// The `n` most frequent tokens in this corpus.
    pub fn top_words(&self, n: usize) -> Vec<(String, usize)> {
        top_n(&self.frequencies, n)
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }
}

/// Two corpora and how similar they are.
#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    pub left: Corpus,
    pub right: Corpus,
    /// Cosine similarity of the two frequency vectors, 0.0 to 1.0
    pub cosine: f64,
    /// Weighted Jaccard similarity, 0.0 to 1.0
    pub jaccard: f64,
    pub shared: Vec<SharedTerm>,
}

impl Comparison {
    pub fn new(left: Corpus, right: Corpus) -> Self {
        let cosine = cosine_similarity(&left.frequencies, &right.frequencies);
        let jaccard = weighted_jaccard(&left.frequencies, &right.frequencies);
        let shared = shared_terms(&left.frequencies, &right.frequencies, SHARED_TERMS_LIMIT);

        Self {
            left,
            right,
            cosine,
            jaccard,
            shared,
        }
    }
}
