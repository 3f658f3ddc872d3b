// Summary statistics over a token sequence.

use std::collections::HashSet;

use serde::Serialize;

/// Total tokens, distinct tokens and mean token length (in characters).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummaryStats {
    pub total: usize,
    pub unique: usize,
    /// 0.0 when there are no tokens
    pub average_length: f64,
}

/// Compute summary statistics for a token sequence.
pub fn summary_stats(tokens: &[String]) -> SummaryStats {
    let total = tokens.len();
    let unique = tokens.iter().map(String::as_str).collect::<HashSet<_>>().len();

    let average_length = if total == 0 {
        0.0
    } else {
        let chars: usize = tokens.iter().map(|t| t.chars().count()).sum();
        chars as f64 / total as f64
    };

    SummaryStats {
        total,
        unique,
        average_length,
    }
}
