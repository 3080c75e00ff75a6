pub mod twilio;

use async_trait::async_trait;

/// Owner-facing lead notification. Handlers spawn these off the webhook
/// path and drop the result, so implementations must tolerate being
/// fire-and-forget.
#[async_trait]
pub trait AlertProvider: Send + Sync {
    async fn send_alert(&self, caller: &str, query: &str, intent: &str) -> anyhow::Result<()>;
}
