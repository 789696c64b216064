//! Validation engine.
//!
//! Validation rules check caller-owned state and return an error when it is
//! rejected. The pass is fail-fast: the first failing eligible rule ends it and
//! its error is handed back to the caller unchanged.

use crate::condition::{BoxedCondition, Condition, eligible};
use crate::context::ExecutionContext;
use crate::error::RuleResult;

/// A guarded check producing an error on rejection.
pub struct ValidationRule<'a> {
    /// Optional label used in log output
    pub name: Option<String>,
    /// Conditions that must all hold for the check to run
    pub conditions: Vec<BoxedCondition<'a>>,
    /// The check itself
    pub validation: Box<dyn Fn() -> RuleResult + 'a>,
}

impl<'a> ValidationRule<'a> {
    /// Create an unconditional rule running `validation`.
    pub fn new(validation: impl Fn() -> RuleResult + 'a) -> Self {
        Self {
            name: None,
            conditions: Vec::new(),
            validation: Box::new(validation),
        }
    }

    /// Add a condition, evaluated after those already added.
    pub fn when(mut self, condition: impl Condition + 'a) -> Self {
        self.conditions.push(Box::new(condition));
        self
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

impl std::fmt::Debug for ValidationRule<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidationRule")
            .field("name", &self.name)
            .field("conditions", &self.conditions.len())
            .finish()
    }
}

/// Run eligible validation rules in order, returning the first error.
///
/// Rules after a failing one are not evaluated at all, conditions included.
/// The error is returned exactly as the rule produced it; classify it with
/// [`is_validation`](crate::error::is_validation).
pub fn execute_validation(ctx: &ExecutionContext, rules: &[ValidationRule<'_>]) -> RuleResult {
    let trace_rules = ctx.config().trace_rules;
    let mut checked = 0usize;

    for (index, rule) in rules.iter().enumerate() {
        if !eligible(&rule.conditions) {
            if trace_rules {
                tracing::trace!(index, name = ?rule.name, "Skipping validation rule");
            }
            continue;
        }

        if trace_rules {
            tracing::trace!(index, name = ?rule.name, "Checking validation rule");
        }
        checked += 1;

        if let Err(err) = (rule.validation)() {
            tracing::debug!(
                index,
                name = ?rule.name,
                error = %err,
                "Validation rule rejected input"
            );
            return Err(err);
        }
    }

    tracing::debug!(rules = rules.len(), checked, "Validation pass complete");
    Ok(())
}
