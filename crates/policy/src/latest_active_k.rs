//! Retention rule keeping the K most recently active artifacts.

use std::cmp::Reverse;
use std::sync::Arc;

use reliquary_core::RetentionResult;
use reliquary_domain::{Candidate, RuleAction, RuleParameters};
use tracing::debug;

use crate::evaluator::Evaluator;
use crate::params::json_int;

/// Template identifier of the latest-active-k rule.
pub const TEMPLATE_ID: &str = "latestActiveK";

/// Parameter key carrying the retained count.
pub const PARAMETER_K: &str = TEMPLATE_ID;

/// Default retained count substituted for absent or invalid configuration.
pub const DEFAULT_K: usize = 10;

/// Evaluator retaining the K most recently active candidates.
///
/// Candidates tied on active time keep a defined but arbitrary relative
/// order; the sort is not stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatestActiveK {
    k: usize,
}

impl LatestActiveK {
    /// Creates an evaluator from loosely-typed rule parameters.
    ///
    /// Construction never fails: an absent, uncoercible, or negative
    /// `latestActiveK` value degrades to [`DEFAULT_K`] so that one
    /// malformed rule cannot abort a retention run.
    #[must_use]
    pub fn new(parameters: &RuleParameters) -> Self {
        if let Some(value) = parameters.get(PARAMETER_K) {
            if let Some(k) = json_int(value).and_then(|parsed| usize::try_from(parsed).ok()) {
                return Self { k };
            }
        }

        debug!(
            template = TEMPLATE_ID,
            default_k = DEFAULT_K,
            "substituted default retained count for rule"
        );

        Self { k: DEFAULT_K }
    }

    /// Returns the configured retained count.
    #[must_use]
    pub fn k(&self) -> usize {
        self.k
    }

    /// Builds a shared evaluator for rule-index registration.
    #[must_use]
    pub fn factory(parameters: &RuleParameters) -> Arc<dyn Evaluator> {
        Arc::new(Self::new(parameters))
    }
}

impl Evaluator for LatestActiveK {
    fn process(&self, candidates: &[Candidate]) -> RetentionResult<Vec<Candidate>> {
        let mut retained = candidates.to_vec();
        retained.sort_unstable_by_key(|candidate| Reverse(active_time(candidate)));
        retained.truncate(self.k);

        Ok(retained)
    }

    fn action(&self) -> RuleAction {
        RuleAction::Retain
    }
}

/// Active time selects the more recent of last pull and push, whichever
/// best reflects real usage.
fn active_time(candidate: &Candidate) -> i64 {
    candidate.pulled_time().max(candidate.pushed_time())
}
