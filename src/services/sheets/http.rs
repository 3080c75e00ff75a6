use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use csv::StringRecord;

use super::SheetSource;
use crate::config::AppConfig;
use crate::models::{Catalog, Customer, OrderRow, Product};

/// Published-CSV sheet reader. Each fetch is a single bounded GET; there is
/// no retry and no circuit breaker.
pub struct HttpSheetSource {
    catalog_url: String,
    orders_url: String,
    customers_url: String,
    timeout: Duration,
    client: reqwest::Client,
}

impl HttpSheetSource {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            catalog_url: config.catalog_csv_url.clone(),
            orders_url: config.orders_csv_url.clone(),
            customers_url: config.customers_csv_url.clone(),
            timeout: Duration::from_secs(config.sheet_timeout_secs),
            client: reqwest::Client::new(),
        }
    }

    async fn fetch_text(&self, url: &str) -> anyhow::Result<String> {
        anyhow::ensure!(!url.is_empty(), "sheet URL not configured");

        let resp = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .context("sheet fetch failed")?
            .error_for_status()
            .context("sheet returned error status")?;

        resp.text().await.context("failed to read sheet body")
    }
}

#[async_trait]
impl SheetSource for HttpSheetSource {
    async fn fetch_catalog(&self) -> Catalog {
        match self.fetch_text(&self.catalog_url).await {
            Ok(body) => parse_catalog(&body),
            Err(e) => {
                tracing::warn!(error = %e, "catalog fetch failed, serving empty catalog");
                Catalog::default()
            }
        }
    }

    async fn fetch_orders(&self) -> Vec<OrderRow> {
        match self.fetch_text(&self.orders_url).await {
            Ok(body) => parse_orders(&body),
            Err(e) => {
                tracing::warn!(error = %e, "order sheet fetch failed, serving empty list");
                Vec::new()
            }
        }
    }

    async fn fetch_customers(&self) -> anyhow::Result<Vec<Customer>> {
        let body = self.fetch_text(&self.customers_url).await?;
        Ok(parse_customers(&body))
    }
}

/// Column lookup by header text, case-insensitive. The sheets are edited by
/// hand and header casing has drifted before ("Phone Number" vs
/// "PHONE NUMBER"), so exact matching would silently drop whole columns.
fn column(headers: &StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|h| h.trim().eq_ignore_ascii_case(name))
}

fn cell(record: &StringRecord, idx: Option<usize>) -> String {
    idx.and_then(|i| record.get(i))
        .unwrap_or_default()
        .trim()
        .to_string()
}

/// Parse the product sheet. Rows without a product name are skipped; row
/// order is preserved because product detection is first-hit-wins.
pub fn parse_catalog(body: &str) -> Catalog {
    let mut reader = csv::Reader::from_reader(body.as_bytes());
    let headers = match reader.headers() {
        Ok(h) => h.clone(),
        Err(_) => return Catalog::default(),
    };

    let name_col = column(&headers, "Product Name");
    let price_col = column(&headers, "Price Range");
    let sizes_col = column(&headers, "Sizes Available");
    let colors_col = column(&headers, "Colors Available");
    let avail_col = column(&headers, "Availability");
    let material_col = column(&headers, "Material");
    let moq_col = column(&headers, "MOQ (Min Order)");
    let delivery_col = column(&headers, "Delivery Days");

    let mut products = Vec::new();
    for record in reader.records().flatten() {
        let name = cell(&record, name_col).to_lowercase();
        if name.is_empty() {
            continue;
        }
        products.push(Product {
            name,
            price: cell(&record, price_col),
            sizes: cell(&record, sizes_col),
            colors: cell(&record, colors_col),
            availability: cell(&record, avail_col),
            material: cell(&record, material_col),
            moq: cell(&record, moq_col),
            delivery: cell(&record, delivery_col),
        });
    }

    Catalog::new(products)
}

pub fn parse_orders(body: &str) -> Vec<OrderRow> {
    let mut reader = csv::Reader::from_reader(body.as_bytes());
    let headers = match reader.headers() {
        Ok(h) => h.clone(),
        Err(_) => return Vec::new(),
    };

    let id_col = column(&headers, "Order ID");
    let name_col = column(&headers, "Customer Name");
    let product_col = column(&headers, "Product");
    let status_col = column(&headers, "Dispatch Status");
    let delivery_col = column(&headers, "Expected Delivery");

    reader
        .records()
        .flatten()
        .map(|record| OrderRow {
            order_id: cell(&record, id_col),
            customer_name: cell(&record, name_col),
            product: cell(&record, product_col),
            dispatch_status: cell(&record, status_col),
            expected_delivery: cell(&record, delivery_col),
        })
        .collect()
}

/// Parse the campaign customer sheet; rows missing a name or phone are
/// not dialable and are dropped.
pub fn parse_customers(body: &str) -> Vec<Customer> {
    let mut reader = csv::Reader::from_reader(body.as_bytes());
    let headers = match reader.headers() {
        Ok(h) => h.clone(),
        Err(_) => return Vec::new(),
    };

    let name_col = column(&headers, "Customer Name");
    let phone_col = column(&headers, "Phone Number");

    reader
        .records()
        .flatten()
        .filter_map(|record| {
            let name = cell(&record, name_col);
            let phone = cell(&record, phone_col);
            (!name.is_empty() && !phone.is_empty()).then_some(Customer { name, phone })
        })
        .collect()
}
