// Top-N selection over a frequency map.
//
// Shared by the console table, the bar chart and the markdown report so all
// three show the same words in the same order.

use super::frequency::FrequencyMap;

/// The `n` most frequent tokens, highest count first.
///
/// Equal counts are ordered by token, ascending, so output is reproducible
/// regardless of hash-map iteration order. Returns every entry when the map
/// has fewer than `n`, and an empty vector for an empty map.
pub fn top_n(freq: &FrequencyMap, n: usize) -> Vec<(String, usize)> {
    let mut ranked: Vec<(&String, usize)> = freq.iter().map(|(w, &c)| (w, c)).collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    ranked
        .into_iter()
        .take(n)
        .map(|(w, c)| (w.clone(), c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, usize)]) -> FrequencyMap {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_top_n_tie_break() {
        let freq = map(&[("a", 5), ("c", 3), ("b", 3), ("d", 1)]);
        assert_eq!(
            top_n(&freq, 2),
            vec![("a".to_string(), 5), ("b".to_string(), 3)]
        );
    }

    #[test]
    fn test_top_n_fewer_entries_than_n() {
        let freq = map(&[("x", 2), ("y", 7)]);
        assert_eq!(
            top_n(&freq, 15),
            vec![("y".to_string(), 7), ("x".to_string(), 2)]
        );
    }

    #[test]
    fn test_top_n_empty() {
        assert!(top_n(&FrequencyMap::new(), 5).is_empty());
        assert!(top_n(&map(&[("x", 1)]), 0).is_empty());
    }
}
