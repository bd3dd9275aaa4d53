use crate::models::common::MatchScore;

/// Trait for comparing two free-text names
pub trait NameMatcher {
    /// Score the similarity of two names in `[0, 100]`.
    /// Implementations must be symmetric and score any name against itself as 100.
    fn similarity(&self, a: &str, b: &str) -> MatchScore;
}
