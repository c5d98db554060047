//! # quote-store: Remote Data Store Layer for Quotation Desk
//!
//! This crate provides access to the remote tabular data store that holds
//! clients, products, the team and quotations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Quotation Desk Data Flow                            │
//! │                                                                         │
//! │  quote-cli command (save, next-id, products…)                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   quote-store (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │    Store      │    │  Repositories │    │ StoreConfig  │  │   │
//! │  │   │  (store.rs)   │    │  (product.rs) │    │  (env vars)  │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │  TableClient  │◄───│ ClientRepo    │    │ Secret key   │  │   │
//! │  │   │  one HTTP     │    │ TeamRepo      │    │ table names  │  │   │
//! │  │   │  code path    │    │ QuotationRepo │    │ endpoint     │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │            Remote tabular store (REST, bearer auth)             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`config`] - Credentials, table names and endpoint
//! - [`client`] - The HTTP table client and record type
//! - [`store`] - Store handle handing out repositories
//! - [`error`] - Store error types
//! - [`repository`] - Per-table repositories
//!
//! ## Usage
//!
//! ```rust,ignore
//! use quote_store::{Store, StoreConfig};
//!
//! let store = Store::new(StoreConfig::from_env()?)?;
//! let products = store.products().list().await?;
//! let next = store.quotations().next_id().await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod client;
pub mod config;
pub mod error;
pub mod repository;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use client::{ListQuery, Record, SortDirection, TableClient};
pub use config::{StoreConfig, TableNames};
pub use error::{StoreError, StoreResult};
pub use store::Store;

// Repository re-exports for convenience
pub use repository::client::ClientRepository;
pub use repository::product::ProductRepository;
pub use repository::quotation::QuotationRepository;
pub use repository::team::TeamRepository;
