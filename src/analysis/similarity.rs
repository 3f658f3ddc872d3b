// Vector-space similarity between two frequency maps.
//
// Each map is a sparse vector over the union of both vocabularies; a term
// missing from one side is a zero component there. Two measures:
//
//   cosine:            sum(a * b) / (|a| * |b|)
//   weighted Jaccard:  sum(min(a, b)) / sum(max(a, b))
//
// Both give 0.0 for disjoint vocabularies and 1.0 for identical ones. Counts
// are accumulated as integers so the result does not depend on hash-map
// iteration order, which keeps cosine exactly symmetric.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use super::frequency::FrequencyMap;

/// Cosine similarity between two sparse non-negative count vectors.
///
/// Returns 0.0 if either vector has zero magnitude (empty or all zeros).
/// Swapping the arguments gives the identical value, and a non-empty vector
/// compared with itself gives exactly 1.0.
pub fn cosine_similarity<K: Eq + Hash>(a: &HashMap<K, usize>, b: &HashMap<K, usize>) -> f64 {
    let norm_a = squared_norm(a);
    let norm_b = squared_norm(b);

    if norm_a == 0 || norm_b == 0 {
        return 0.0;
    }

    // Terms present on only one side contribute nothing to the dot product,
    // so walking the smaller map is enough.
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let dot: u128 = small
        .iter()
        .filter_map(|(term, &x)| large.get(term).map(|&y| x as u128 * y as u128))
        .sum();

    // sqrt of the product rather than product of sqrts: a perfect square
    // stays exact, so sim(A, A) is 1.0 with no rounding error.
    let denominator = (norm_a as f64 * norm_b as f64).sqrt();
    (dot as f64 / denominator).clamp(0.0, 1.0)
}

fn squared_norm<K>(v: &HashMap<K, usize>) -> u128 {
    v.values().map(|&x| x as u128 * x as u128).sum()
}

/// Weighted Jaccard similarity between two count vectors.
///
/// Returns 0.0 when both are empty.
pub fn weighted_jaccard<K: Eq + Hash>(a: &HashMap<K, usize>, b: &HashMap<K, usize>) -> f64 {
    let all_keys: HashSet<&K> = a.keys().chain(b.keys()).collect();

    if all_keys.is_empty() {
        return 0.0;
    }

    let mut min_sum: u128 = 0;
    let mut max_sum: u128 = 0;

    for key in all_keys {
        let x = a.get(key).copied().unwrap_or(0) as u128;
        let y = b.get(key).copied().unwrap_or(0) as u128;
        min_sum += x.min(y);
        max_sum += x.max(y);
    }

    if max_sum == 0 {
        0.0
    } else {
        min_sum as f64 / max_sum as f64
    }
}

/// A term that occurs in both corpora.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SharedTerm {
    pub term: String,
    pub left: usize,
    pub right: usize,
}

impl SharedTerm {
    pub fn combined(&self) -> usize {
        self.left + self.right
    }
}

/// The `n` terms common to both maps with the highest combined count.
///
/// Ties are broken by term, ascending.
pub fn shared_terms(left: &FrequencyMap, right: &FrequencyMap, n: usize) -> Vec<SharedTerm> {
    let mut shared: Vec<SharedTerm> = left
        .iter()
        .filter_map(|(term, &l)| {
            right.get(term).map(|&r| SharedTerm {
                term: term.clone(),
                left: l,
                right: r,
            })
        })
        .collect();

    shared.sort_by(|x, y| {
        y.combined()
            .cmp(&x.combined())
            .then_with(|| x.term.cmp(&y.term))
    });
    shared.truncate(n);
    shared
}
