//! Guard conditions.
//!
//! A condition is a zero-argument predicate. Any `Fn() -> bool` closure is a
//! condition, so rules can be guarded by plain closures that capture the
//! caller's state by reference.

/// A zero-argument boolean predicate guarding a rule.
///
/// Conditions are re-evaluated on every call; implementations must not cache
/// their result between evaluations.
pub trait Condition {
    /// Evaluate the predicate against the current state.
    fn evaluate(&self) -> bool;
}

impl<F> Condition for F
where
    F: Fn() -> bool,
{
    fn evaluate(&self) -> bool {
        self()
    }
}

/// A boxed condition as stored on a rule.
pub type BoxedCondition<'a> = Box<dyn Condition + 'a>;

/// Returns true when every condition holds, evaluated left to right.
///
/// Stops at the first false condition. An empty slice is vacuously eligible.
pub fn eligible(conditions: &[BoxedCondition<'_>]) -> bool {
    conditions.iter().all(|condition| condition.evaluate())
}
