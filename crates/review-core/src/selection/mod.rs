//! Reviewer selection policy

mod random;

pub use random::RandomReviewerSelector;

/// Picks reviewers from a pool of eligible user IDs.
///
/// Implementations must return at most `k` distinct IDs, every one of them
/// drawn from `pool`, and exactly `min(k, distinct(pool))` of them.
pub trait ReviewerSelector: Send + Sync {
    /// Select up to `k` reviewers from `pool`
    fn select(&self, pool: &[String], k: usize) -> Vec<String>;

    /// Select a single reviewer, if the pool is non-empty
    fn select_one(&self, pool: &[String]) -> Option<String> {
        self.select(pool, 1).into_iter().next()
    }
}
