pub mod alerts;
pub mod campaign;
pub mod classifier;
pub mod composer;
pub mod dialer;
pub mod dialogue;
pub mod sheets;
