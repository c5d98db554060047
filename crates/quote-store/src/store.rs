//! # Store Handle
//!
//! Entry point to the remote data store: one [`TableClient`] shared by every
//! repository.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  StoreConfig::from_env() ← Credentials + table names                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Store::new(config) ← Builds the HTTP client once                       │
//! │       │                                                                 │
//! │       ├──► store.products()    ProductRepository   (Products table)     │
//! │       ├──► store.clients()     ClientRepository    (Clients table)      │
//! │       ├──► store.team()        TeamRepository      (Team table)         │
//! │       └──► store.quotations()  QuotationRepository (Quotations table)   │
//! │                                                                         │
//! │  Repositories are cheap clones sharing one connection pool.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::info;

use crate::client::TableClient;
use crate::config::{StoreConfig, TableNames};
use crate::error::StoreResult;
use crate::repository::client::ClientRepository;
use crate::repository::product::ProductRepository;
use crate::repository::quotation::QuotationRepository;
use crate::repository::team::TeamRepository;

/// Main store handle providing repository access.
#[derive(Debug, Clone)]
pub struct Store {
    client: TableClient,
    tables: TableNames,
}

impl Store {
    /// Creates the store handle.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let store = Store::new(StoreConfig::from_env()?)?;
    /// let next = store.quotations().next_id().await?;
    /// ```
    pub fn new(config: StoreConfig) -> StoreResult<Self> {
        let client = TableClient::new(&config)?;

        info!(
            base_id = %config.base_id,
            api_url = %config.api_url,
            "Remote store configured"
        );

        Ok(Store {
            client,
            tables: config.tables,
        })
    }

    pub fn products(&self) -> ProductRepository {
        ProductRepository::new(self.client.clone(), self.tables.products.clone())
    }

    pub fn clients(&self) -> ClientRepository {
        ClientRepository::new(self.client.clone(), self.tables.clients.clone())
    }

    pub fn team(&self) -> TeamRepository {
        TeamRepository::new(self.client.clone(), self.tables.team.clone())
    }

    pub fn quotations(&self) -> QuotationRepository {
        QuotationRepository::new(self.client.clone(), self.tables.quotations.clone())
    }
}
