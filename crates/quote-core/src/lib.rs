//! # quote-core: Pure Business Logic for Quotation Desk
//!
//! This crate holds the quotation math and the rules around it as pure
//! functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Quotation Desk Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    quote-cli (hosting app)                      │   │
//! │  │    totals ──► save (record ► artifact ► attachment)             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ quote-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  totals   │  │   words   │  │ quotation │  │ document  │  │   │
//! │  │   │  cascade  │  │  crore /  │  │  draft,   │  │  totals   │  │   │
//! │  │   │  CGST/SGST│  │  lakh     │  │  record   │  │  block    │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 quote-store (remote tabular store)              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - `Rupees` amount type and numeric coercion
//! - [`types`] - Tax rates, line items, reference data
//! - [`totals`] - The totals engine (subtotal → discount → tax → grand total)
//! - [`words`] - Indian-numbering amount-in-words formatter
//! - [`quotation`] - Quotation numbering, dates, drafts and record mapping
//! - [`address`] - Shipping address parsing and formatting
//! - [`document`] - Printable document model
//! - [`validation`] - Business rule validation
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use quote_core::types::LineItem;
//! use quote_core::totals::compute_totals;
//!
//! let lines = vec![
//!     LineItem::with_values("recA", 2.0, 100.50),
//!     LineItem::with_values("recB", 3.0, 50.50),
//! ];
//!
//! let totals = compute_totals(&lines, 10.0);
//! assert!((totals.subtotal.value() - 352.50).abs() < 1e-9);
//! assert_eq!(totals.total_in_words, "Three Hundred and Seventy Four Rupees Only");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod address;
pub mod document;
pub mod error;
pub mod money;
pub mod quotation;
pub mod totals;
pub mod types;
pub mod validation;
pub mod words;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Rupees;
pub use quotation::{QuotationDraft, QuotationId, QuotationRecord};
pub use totals::{compute_totals, row_breakdown, RowBreakdown, TotalsResult};
pub use types::*;
pub use words::{rupees_in_words, words_of};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Central GST: 9% of the taxable amount.
pub const CGST_RATE: TaxRate = TaxRate::from_bps(900);

/// State GST: 9% of the taxable amount.
pub const SGST_RATE: TaxRate = TaxRate::from_bps(900);

/// Appended to every amount-in-words string.
pub const CURRENCY_SUFFIX: &str = "Rupees Only";

/// Symbol used when amounts are shown on the printable document.
pub const CURRENCY_SYMBOL: &str = "₹";

/// Largest amount the words formatter can spell (nine digits).
pub const MAX_WORDS_AMOUNT: u64 = 999_999_999;

/// Days between the quotation date and its expiry date.
pub const DEFAULT_VALIDITY_DAYS: u32 = 2;
