// Frequency counting — one corpus's vocabulary vector.

use std::collections::HashMap;

/// Token -> number of occurrences. Never holds a zero count.
pub type FrequencyMap = HashMap<String, usize>;

/// Count how many times each token occurs.
///
/// The sum of the returned counts always equals `tokens.len()`.
pub fn word_frequencies(tokens: &[String]) -> FrequencyMap {
    let mut freq = FrequencyMap::new();
    for token in tokens {
        *freq.entry(token.clone()).or_insert(0) += 1;
    }
    freq
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_frequencies() {
        let tokens: Vec<String> = ["a", "b", "a", "c", "b", "a"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let freq = word_frequencies(&tokens);
        assert_eq!(freq.len(), 3);
        assert_eq!(freq["a"], 3);
        assert_eq!(freq["b"], 2);
        assert_eq!(freq["c"], 1);
    }

    #[test]
    fn test_word_frequencies_empty() {
        assert!(word_frequencies(&[]).is_empty());
    }

    #[test]
    fn test_order_insensitive() {
        let forward: Vec<String> = ["x", "y", "x", "z"].iter().map(|s| s.to_string()).collect();
        let mut reversed = forward.clone();
        reversed.reverse();
        assert_eq!(word_frequencies(&forward), word_frequencies(&reversed));
    }
}
