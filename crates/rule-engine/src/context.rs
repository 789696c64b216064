//! Execution context passed to both engines.

use crate::config::EngineConfig;
use tokio_util::sync::CancellationToken;

/// Context threaded through every engine call.
///
/// The cancellation token is carried so that callers can hand the engines the
/// same handle the rest of their call chain uses. The engines do not poll it:
/// every eligible rule runs to completion regardless of the token's state.
#[derive(Debug, Clone, Default)]
pub struct ExecutionContext {
    cancellation: CancellationToken,
    config: EngineConfig,
}

impl ExecutionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an existing cancellation token.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = token;
        self
    }

    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn cancellation(&self) -> &CancellationToken {
        &self.cancellation
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancellation.is_cancelled()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}
