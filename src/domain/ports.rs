use crate::core::context::WaitContext;
use crate::utils::error::Result;
use async_trait::async_trait;

/// A point-in-time readiness check against one resource.
///
/// File, TCP and HTTP probes all look the same to the host: hand in a
/// context carrying the remaining budget, get back `Ok(())` if the resource
/// is ready right now. Each call is a single independent observation; the
/// host owns any polling loop around it.
#[async_trait]
pub trait Resource: Send + Sync + std::fmt::Debug {
    async fn test(&self, ctx: &WaitContext) -> Result<()>;
}
