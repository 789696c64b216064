//! Guarded rule execution for defaulting and validation.
//!
//! This crate runs ordered lists of rules, each guarded by zero or more
//! conditions. Two engines are provided:
//!
//! - [`execute_defaulting`] runs every eligible rule's mutation, in order, so
//!   later rules see the defaults written by earlier ones.
//! - [`execute_validation`] runs every eligible rule's check and stops at the
//!   first error, which callers classify with [`is_validation`].
//!
//! # Example
//!
//! ```ignore
//! use rule_engine::prelude::*;
//! use std::cell::Cell;
//!
//! let replicas = Cell::new(None);
//!
//! execute_defaulting(
//!     &ExecutionContext::new(),
//!     &[DefaultingRule::new(|| replicas.set(Some(1))).when(|| replicas.get().is_none())],
//! );
//!
//! let result = execute_validation(
//!     &ExecutionContext::new(),
//!     &[ValidationRule::new(|| match replicas.get() {
//!         Some(0) | None => Err(validation_error("replicas must be positive")),
//!         Some(_) => Ok(()),
//!     })],
//! );
//! assert!(result.is_ok());
//! ```
//!
//! # Configuration
//!
//! Per-rule trace events are off by default. Enable them through
//! [`EngineConfig`], either directly or with `RULE_ENGINE_TRACE_RULES=true`
//! and [`EngineConfig::from_env`].

pub mod condition;
pub mod config;
pub mod context;
pub mod defaulting;
pub mod error;
pub mod validation;

pub use config::EngineConfig;
pub use context::ExecutionContext;
pub use defaulting::{DefaultingRule, execute_defaulting};
pub use error::{RuleError, RuleResult, is_validation, validation_error};
pub use validation::{ValidationRule, execute_validation};

/// Prelude module - import everything you need with `use rule_engine::prelude::*`
pub mod prelude {
    pub use crate::condition::{BoxedCondition, Condition};
    pub use crate::config::EngineConfig;
    pub use crate::context::ExecutionContext;
    pub use crate::defaulting::{DefaultingRule, execute_defaulting};
    pub use crate::error::{
        RuleError, RuleResult, is_validation, is_validation_source, validation_error,
    };
    pub use crate::validation::{ValidationRule, execute_validation};
}
