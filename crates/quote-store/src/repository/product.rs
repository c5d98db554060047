//! # Product Repository
//!
//! Reads the product catalog. A product's unit rate is its
//! "Current Market Price (India)"; products without one price at zero.

use quote_core::Product;
use tracing::debug;

use crate::client::{ListQuery, Record, TableClient};
use crate::error::StoreResult;

pub const FIELD_NAME: &str = "Product Name";
pub const FIELD_PRICE: &str = "Current Market Price (India)";

#[derive(Debug, Clone)]
pub struct ProductRepository {
    client: TableClient,
    table: String,
}

impl ProductRepository {
    pub fn new(client: TableClient, table: String) -> Self {
        ProductRepository { client, table }
    }

    /// Every product in the catalog, in store order.
    pub async fn list(&self) -> StoreResult<Vec<Product>> {
        let records = self.client.list(&self.table, &ListQuery::new()).await?;
        let products: Vec<Product> = records.iter().map(product_from_record).collect();

        debug!(count = products.len(), "Loaded product catalog");
        Ok(products)
    }
}

/// Maps a product record; missing name → empty, missing price → 0.
pub fn product_from_record(record: &Record) -> Product {
    Product {
        id: record.id.clone(),
        name: record.text(FIELD_NAME).unwrap_or_default(),
        rate: record.number(FIELD_PRICE).unwrap_or(0.0),
    }
}
