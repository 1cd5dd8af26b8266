use std::collections::BTreeMap;
use std::sync::Arc;

use reliquary_core::{RetentionError, RetentionResult};
use reliquary_domain::{RetentionRuleDefinition, RuleParameters};

use crate::evaluator::Evaluator;
use crate::latest_active_k::{self, LatestActiveK};

/// Constructor signature registered for each rule template.
///
/// Factories absorb bad configuration instead of failing, so they return an
/// evaluator unconditionally.
pub type EvaluatorFactory = fn(&RuleParameters) -> Arc<dyn Evaluator>;

/// Registry mapping rule template identifiers to evaluator factories.
///
/// Built once at engine startup and shared immutably afterwards.
#[derive(Debug, Clone, Default)]
pub struct RuleIndex {
    factories: BTreeMap<String, EvaluatorFactory>,
}

impl RuleIndex {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self {
            factories: BTreeMap::new(),
        }
    }

    /// Creates an index with every builtin rule registered.
    #[must_use]
    pub fn with_builtin_rules() -> Self {
        let mut index = Self::new();
        index
            .factories
            .insert(latest_active_k::TEMPLATE_ID.to_owned(), LatestActiveK::factory);
        index
    }

    /// Registers a factory for one rule template.
    pub fn register(
        &mut self,
        template_id: impl Into<String>,
        factory: EvaluatorFactory,
    ) -> RetentionResult<()> {
        let template_id = template_id.into();
        if template_id.trim().is_empty() {
            return Err(RetentionError::Validation(
                "rule template identifier must not be empty".to_owned(),
            ));
        }

        if self.factories.contains_key(&template_id) {
            return Err(RetentionError::Conflict(format!(
                "rule template '{template_id}' is already registered"
            )));
        }

        self.factories.insert(template_id, factory);
        Ok(())
    }

    /// Builds the evaluator for one rule definition.
    ///
    /// Disabled rules still resolve; skipping them is the engine's concern.
    pub fn evaluator_for(
        &self,
        rule: &RetentionRuleDefinition,
    ) -> RetentionResult<Arc<dyn Evaluator>> {
        let factory = self
            .factories
            .get(rule.template().as_str())
            .ok_or_else(|| {
                RetentionError::NotFound(format!(
                    "no evaluator registered for rule template '{}'",
                    rule.template().as_str()
                ))
            })?;

        Ok(factory(rule.parameters()))
    }

    /// Returns registered template identifiers in lexical order.
    #[must_use]
    pub fn templates(&self) -> Vec<&str> {
        self.factories.keys().map(String::as_str).collect()
    }
}
