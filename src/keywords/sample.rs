//! Keyword sampling.
use std::collections::BTreeSet;

use rand::seq::SliceRandom;
use rand::Rng;

/// Uniformly samples at most `count` keywords, without replacement.
pub fn sample_keywords<R: Rng + ?Sized>(
    keywords: &BTreeSet<String>,
    count: usize,
    rng: &mut R,
) -> Vec<String> {
    let pool: Vec<&String> = keywords.iter().collect();
    pool.choose_multiple(rng, count)
        .map(|keyword| keyword.to_string())
        .collect()
}
