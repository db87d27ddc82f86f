//! Uniform random selection backed by the thread-local RNG

use std::collections::HashSet;

use rand::seq::SliceRandom;

use super::ReviewerSelector;

/// Samples reviewers uniformly at random without replacement
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomReviewerSelector;

impl RandomReviewerSelector {
    pub const fn new() -> Self {
        Self
    }
}

impl ReviewerSelector for RandomReviewerSelector {
    fn select(&self, pool: &[String], k: usize) -> Vec<String> {
        if k == 0 || pool.is_empty() {
            return Vec::new();
        }

        let mut seen = HashSet::with_capacity(pool.len());
        let distinct: Vec<&String> = pool.iter().filter(|id| seen.insert(id.as_str())).collect();

        distinct
            .choose_multiple(&mut rand::thread_rng(), k)
            .map(|id| (*id).clone())
            .collect()
    }
}
