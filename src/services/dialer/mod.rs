pub mod twilio;

use async_trait::async_trait;

/// Outbound call placement. `place_call` returns the provider's call sid so
/// the audit log can correlate the leg.
#[async_trait]
pub trait CallDialer: Send + Sync {
    async fn place_call(&self, to: &str, twiml_url: &str) -> anyhow::Result<String>;
}
