//! Error types for rule execution.
//!
//! The engines never originate errors themselves. Validation rule bodies
//! produce [`RuleError::Validation`], usually wrapped with extra context via
//! [`anyhow::Context`], and callers classify the result with [`is_validation`].

use thiserror::Error;

/// Error kinds produced by rule bodies.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    /// A validation rule rejected its input
    #[error("validation failed: {0}")]
    Validation(String),
}

impl RuleError {
    /// Create a validation error with the given message.
    pub fn validation(message: impl Into<String>) -> Self {
        RuleError::Validation(message.into())
    }

    /// Check if this is the validation kind.
    pub fn is_validation(&self) -> bool {
        matches!(self, RuleError::Validation(_))
    }
}

/// Result type returned by validation rule bodies and the validation engine.
pub type RuleResult<T = ()> = anyhow::Result<T>;

/// Build a validation failure ready to be returned from a rule body.
pub fn validation_error(message: impl Into<String>) -> anyhow::Error {
    anyhow::Error::new(RuleError::validation(message))
}

/// Check whether any layer of `err` is a validation failure.
///
/// Context added with [`anyhow::Context`] at any depth is looked through.
pub fn is_validation(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        cause
            .downcast_ref::<RuleError>()
            .is_some_and(RuleError::is_validation)
    })
}

/// Check whether `err` or any of its `source()` causes is a validation failure.
pub fn is_validation_source(err: &(dyn std::error::Error + 'static)) -> bool {
    let mut current = Some(err);
    while let Some(cause) = current {
        if cause
            .downcast_ref::<RuleError>()
            .is_some_and(RuleError::is_validation)
        {
            return true;
        }
        current = cause.source();
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[derive(Error, Debug)]
    #[error("admission rejected")]
    struct AdmissionError {
        #[source]
        source: RuleError,
    }

    #[test]
    fn test_bare_validation_error() {
        let err = validation_error("name must not be empty");
        assert!(is_validation(&err));
        assert_eq!(err.to_string(), "validation failed: name must not be empty");
    }

    #[test]
    fn test_wrapped_validation_error() {
        let result: RuleResult = Err(validation_error("replicas must be positive"))
            .context("validating deployment")
            .context("validating cluster");

        let err = result.unwrap_err();
        assert!(is_validation(&err));
        assert_eq!(err.to_string(), "validating cluster");
    }

    #[test]
    fn test_validation_behind_source() {
        let err = AdmissionError {
            source: RuleError::validation("bad version"),
        };
        assert!(is_validation_source(&err));

        let err = anyhow::Error::new(err).context("admitting request");
        assert!(is_validation(&err));
    }

    #[test]
    fn test_deeply_wrapped_validation_error() {
        let mut err = validation_error("bad label");
        for depth in 0..32 {
            err = err.context(format!("layer {depth}"));
        }

        assert!(is_validation(&err));
        assert_eq!(err.chain().count(), 33);
        assert!(err.chain().last().is_some_and(is_validation_source));
    }

    #[test]
    fn test_other_errors_are_not_validation() {
        let err = anyhow::anyhow!("connection refused");
        assert!(!is_validation(&err));

        let err = anyhow::Error::new(std::io::Error::other("disk full")).context("loading");
        assert!(!is_validation(&err));
    }
}
