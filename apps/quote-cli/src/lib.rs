//! # Quotation Desk CLI
//!
//! Hosting application for the quotation engine: previews totals offline and
//! saves quotations to the remote store with a PDF attached.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Quotation Desk CLI                              │
//! │                                                                         │
//! │  ┌────────────────┐  ┌────────────────┐  ┌────────────────────────────┐│
//! │  │  cli           │  │  workflow      │  │  render                    ││
//! │  │                │  │                │  │                            ││
//! │  │ • totals       │  │ • prepare      │  │ • PdfRenderer (printpdf)   ││
//! │  │ • words        │─►│ • finalize     │─►│                            ││
//! │  │ • save, …      │  │                │  │                            ││
//! │  └────────────────┘  └───────┬────────┘  └────────────────────────────┘│
//! │                              │                                          │
//! │               ┌──────────────┴───────────────┐                          │
//! │               ▼                              ▼                          │
//! │  ┌────────────────────────┐     ┌────────────────────────┐             │
//! │  │ quote_store::Store     │     │ artifacts              │             │
//! │  │ (remote records)       │     │ (local PDF files)      │             │
//! │  └────────────────────────┘     └────────────────────────┘             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `AIRTABLE_*` - store credentials and table names (see `quote_store::config`)
//! - `QUOTE_ARTIFACT_DIR` - where PDFs are written (default: ./artifacts)
//! - `QUOTE_ARTIFACT_BASE_URL` - public URL of that directory (optional)
//! - `QUOTE_VALIDITY_DAYS` - days until expiry (default: 2)
//! - `QUOTE_CREATED_BY` - default team member for `save`
//! - `RUST_LOG` - log filter (default: info)

pub mod artifacts;
pub mod cli;
pub mod config;
pub mod error;
pub mod render;
pub mod workflow;

pub use cli::Cli;
pub use error::AppError;
