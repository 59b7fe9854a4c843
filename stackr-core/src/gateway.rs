//! Gateway trait for the container runtime
//!
//! The one seam between the UI core and the daemon. The cli crate implements
//! it over a single long-lived Docker connection; tests implement it with a
//! scripted fake. Calls may block on network I/O, so they only ever run
//! inside dispatched commands, never on the loop thread.

use std::fmt;

use async_trait::async_trait;

use crate::model::{ContainerInspection, ContainerSummary, ResourceStats};

#[derive(Clone, Debug)]
pub struct GatewayError {
    pub message: String,
}

impl GatewayError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for GatewayError {}

pub type GatewayResult<T> = Result<T, GatewayError>;

/// Operations the dashboard needs from the container runtime.
///
/// The connection behind this is shared by all in-flight commands; the
/// daemon is trusted to serialize or safely interleave concurrent calls.
#[async_trait]
pub trait Gateway: Send + Sync {
    async fn list_containers(&self) -> GatewayResult<Vec<ContainerSummary>>;
    async fn inspect(&self, id: &str) -> GatewayResult<ContainerInspection>;
    /// Errors from this call are swallowed by the detail view.
    async fn stats(&self, id: &str) -> GatewayResult<ResourceStats>;
    async fn stop(&self, id: &str) -> GatewayResult<()>;
    async fn start(&self, id: &str) -> GatewayResult<()>;
    async fn restart(&self, id: &str) -> GatewayResult<()>;
    async fn remove(&self, id: &str) -> GatewayResult<()>;
}
