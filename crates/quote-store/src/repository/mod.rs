//! # Repository Module
//!
//! Table-level access for Quotation Desk, one repository per table.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  CLI command                                                            │
//! │       │  store.quotations().next_id()                                   │
//! │       ▼                                                                 │
//! │  QuotationRepository                                                    │
//! │  ├── latest_id / next_id                                                │
//! │  ├── create(&QuotationRecord)                                           │
//! │  └── attach_document(record_id, attachment)                             │
//! │       │                                                                 │
//! │       │  field names ↔ domain types                                     │
//! │       ▼                                                                 │
//! │  TableClient ──► remote store                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Field names of the remote tables live here and nowhere else; the rest of
//! the workspace sees only `quote_core` types.
//!
//! ## Available Repositories
//!
//! - [`ProductRepository`](product::ProductRepository) - Product catalog
//! - [`ClientRepository`](client::ClientRepository) - Clients, new clients, shipping addresses
//! - [`TeamRepository`](team::TeamRepository) - Team members ("Created By")
//! - [`QuotationRepository`](quotation::QuotationRepository) - Numbering, records, attachments

pub mod client;
pub mod product;
pub mod quotation;
pub mod team;
