//! Domain entities and invariants.

#![forbid(unsafe_code)]

mod candidate;
mod rule;

pub use candidate::{ArtifactKind, Candidate, CandidateInput};
pub use rule::{RetentionRuleDefinition, RuleAction, RuleParameters};
