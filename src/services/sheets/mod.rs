pub mod http;

use async_trait::async_trait;

use crate::models::{Catalog, Customer, OrderRow};

/// Spreadsheet-backed data feeds. Every call hits the remote sheet again:
/// catalog edits are live on the very next caller turn, and there is no
/// cache to invalidate. Tests swap in a fixed in-memory source.
///
/// Catalog and order fetches degrade to empty on any failure; the dialogue
/// layer treats "no data" as a normal condition, never an error. The
/// customer list is different: campaign dispatch refuses to run on a failed
/// fetch, so that one propagates.
#[async_trait]
pub trait SheetSource: Send + Sync {
    async fn fetch_catalog(&self) -> Catalog;
    async fn fetch_orders(&self) -> Vec<OrderRow>;
    async fn fetch_customers(&self) -> anyhow::Result<Vec<Customer>>;
}
