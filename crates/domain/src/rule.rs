use std::collections::BTreeMap;
use std::str::FromStr;

use reliquary_core::{NonEmptyString, RetentionError, RetentionResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Classification a rule reports for the candidates it returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleAction {
    /// Returned candidates are kept.
    Retain,
    /// Returned candidates are deleted.
    Remove,
}

impl RuleAction {
    /// Returns stable storage value.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Retain => "retain",
            Self::Remove => "remove",
        }
    }
}

impl FromStr for RuleAction {
    type Err = RetentionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "retain" => Ok(Self::Retain),
            "remove" => Ok(Self::Remove),
            _ => Err(RetentionError::Validation(format!(
                "unknown rule action '{value}'"
            ))),
        }
    }
}

/// Loosely-typed rule configuration keyed by parameter name.
///
/// Policies travel as JSON, so values stay opaque until the owning rule
/// coerces them. An absent map and an empty map are equivalent.
pub type RuleParameters = BTreeMap<String, Value>;

/// One rule entry of a deserialized retention policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetentionRuleDefinition {
    template: NonEmptyString,
    parameters: RuleParameters,
    enabled: bool,
}

impl RetentionRuleDefinition {
    /// Creates a validated rule definition.
    pub fn new(
        template: impl Into<String>,
        parameters: RuleParameters,
        enabled: bool,
    ) -> RetentionResult<Self> {
        Ok(Self {
            template: NonEmptyString::new(template)?,
            parameters,
            enabled,
        })
    }

    /// Returns rule template identifier.
    #[must_use]
    pub fn template(&self) -> &NonEmptyString {
        &self.template
    }

    /// Returns rule parameters.
    #[must_use]
    pub fn parameters(&self) -> &RuleParameters {
        &self.parameters
    }

    /// Returns enabled flag.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}
