//! Defaulting engine.
//!
//! Defaulting rules fill in caller-owned state. Each rule runs its action when
//! all of its conditions hold, and rules run strictly in order, so a later
//! rule's conditions see the values written by earlier rules.

use crate::condition::{BoxedCondition, Condition, eligible};
use crate::context::ExecutionContext;

/// A guarded mutation of caller-owned state.
pub struct DefaultingRule<'a> {
    /// Optional label used in log output
    pub name: Option<String>,
    /// Conditions that must all hold for the action to run
    pub conditions: Vec<BoxedCondition<'a>>,
    /// Infallible action applying the default
    pub defaulting: Box<dyn Fn() + 'a>,
}

impl<'a> DefaultingRule<'a> {
    /// Create an unconditional rule running `defaulting`.
    pub fn new(defaulting: impl Fn() + 'a) -> Self {
        Self {
            name: None,
            conditions: Vec::new(),
            defaulting: Box::new(defaulting),
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

impl std::fmt::Debug for DefaultingRule<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DefaultingRule")
            .field("name", &self.name)
            .field("conditions", &self.conditions.len())
            .finish()
    }
}

/// Run every eligible defaulting rule once, in order.
pub fn execute_defaulting(ctx: &ExecutionContext, rules: &[DefaultingRule<'_>]) {
    let trace_rules = ctx.config().trace_rules;
    let mut applied = 0usize;

    for (index, rule) in rules.iter().enumerate() {
        if !eligible(&rule.conditions) {
            if trace_rules {
                tracing::trace!(index, name = ?rule.name, "Skipping defaulting rule");
            }
            continue;
        }

        if trace_rules {
            tracing::trace!(index, name = ?rule.name, "Applying defaulting rule");
        }
        (rule.defaulting)();
        applied += 1;
    }

    tracing::debug!(rules = rules.len(), applied, "Defaulting pass complete");
}
