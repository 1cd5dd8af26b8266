use reliquary_core::RetentionResult;
use reliquary_domain::{Candidate, RuleAction};

/// Behavior shared by every retention rule evaluator.
///
/// Evaluators are immutable after construction, so one instance is safe to
/// share across concurrent evaluation runs.
pub trait Evaluator: Send + Sync {
    /// Filters candidates down to the subset this rule decides on.
    ///
    /// The input slice is never mutated; implementations work on a copy.
    fn process(&self, candidates: &[Candidate]) -> RetentionResult<Vec<Candidate>>;

    /// Returns the classification applied to returned candidates.
    fn action(&self) -> RuleAction;
}
