pub mod api;
pub mod dashboard;
pub mod health;
pub mod voice;

/// Spoken when an outbound call carries no campaign text.
pub(crate) const DEFAULT_CAMPAIGN: &str = "our latest collection";
