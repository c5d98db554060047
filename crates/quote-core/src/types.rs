//! # Domain Types
//!
//! Core domain types used throughout Quotation Desk.
//!
//! ## Type Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    LineItem     │   │    Product      │   │     Client      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  product_id     │──►│  id (record)    │   │  id (record)    │       │
//! │  │  quantity       │   │  name           │   │  name, city     │       │
//! │  │  unit_rate      │◄──│  rate           │   │  gst_number     │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    TaxRate      │   │ QuotationStatus │   │   TeamMember    │       │
//! │  │  bps (u32)      │   │  Draft          │   │  id, name       │       │
//! │  │  900 = 9%       │   └─────────────────┘   └─────────────────┘       │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Record Identity
//! Every reference-data entity is identified by the remote store's opaque
//! record id (`recXXXXXXXXXXXXXX`). Business codes such as `CL-<millis>` are
//! plain fields on the record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::money::{coerce_number, finite_or_zero, Rupees};

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 900 bps = 9% (each half of the 18% GST split)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Returns the rate as a multiplier (900 bps → 0.09).
    #[inline]
    pub fn fraction(&self) -> f64 {
        self.0 as f64 / 10_000.0
    }

    /// Returns the rate as a percentage, for labels ("CGST 9%").
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

// =============================================================================
// Product Catalog
// =============================================================================

/// A product that can be quoted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Remote record id.
    pub id: String,

    /// Display name shown in the item picker and on the document.
    pub name: String,

    /// Current market price (India), per unit.
    #[serde(default, deserialize_with = "lenient_number")]
    pub rate: f64,
}

impl Product {
    /// Returns the unit rate as rupees.
    #[inline]
    pub fn price(&self) -> Rupees {
        Rupees::new(self.rate)
    }
}

/// Looks up unit rates by product reference.
///
/// Selecting a product on a line overwrites that line's unit rate with
/// whatever the catalog returns. Unknown products price at zero.
pub trait ProductCatalog {
    /// Unit rate for `product_id`, or `None` when the catalog doesn't know it.
    fn rate_of(&self, product_id: &str) -> Option<f64>;

    /// Display name for `product_id`.
    fn name_of(&self, product_id: &str) -> Option<&str>;
}

impl ProductCatalog for [Product] {
    fn rate_of(&self, product_id: &str) -> Option<f64> {
        self.iter()
            .find(|p| p.id == product_id)
            .map(|p| finite_or_zero(p.rate))
    }

    fn name_of(&self, product_id: &str) -> Option<&str> {
        self.iter()
            .find(|p| p.id == product_id)
            .map(|p| p.name.as_str())
    }
}

impl ProductCatalog for Vec<Product> {
    fn rate_of(&self, product_id: &str) -> Option<f64> {
        self.as_slice().rate_of(product_id)
    }

    fn name_of(&self, product_id: &str) -> Option<&str> {
        self.as_slice().name_of(product_id)
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// One row of a quotation.
///
/// ## Lifecycle
/// ```text
/// add row ──► LineItem::new()            product "", qty 1, rate 0
///    │
///    ├──► select_product(id, catalog)    rate ← catalog rate (or 0)
///    ├──► set_quantity_input("3")        qty  ← coerced number
///    │
///    └──► removed from the draft         (never persisted on its own)
/// ```
///
/// Quantity and rate are plain numbers. Anything unparsable, in a draft
/// file or from an input box, becomes `0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Product record id, empty until a product is selected.
    #[serde(default)]
    pub product_id: String,

    /// Units quoted.
    #[serde(default = "default_quantity", deserialize_with = "lenient_number")]
    pub quantity: f64,

    /// Price per unit.
    #[serde(default, deserialize_with = "lenient_number")]
    pub unit_rate: f64,
}

fn default_quantity() -> f64 {
    1.0
}

impl LineItem {
    /// Creates the empty row a user gets when adding a line.
    pub fn new() -> Self {
        LineItem {
            product_id: String::new(),
            quantity: default_quantity(),
            unit_rate: 0.0,
        }
    }

    /// Creates a fully specified row.
    pub fn with_values(product_id: impl Into<String>, quantity: f64, unit_rate: f64) -> Self {
        LineItem {
            product_id: product_id.into(),
            quantity,
            unit_rate,
        }
    }

    /// Whether a product has been picked for this row.
    pub fn has_product(&self) -> bool {
        !self.product_id.trim().is_empty()
    }

    /// Quantity with non-finite values treated as zero.
    #[inline]
    pub fn quantity(&self) -> f64 {
        finite_or_zero(self.quantity)
    }

    /// Unit rate with non-finite values treated as zero.
    #[inline]
    pub fn unit_rate(&self) -> Rupees {
        Rupees::new(self.unit_rate)
    }

    /// quantity × unit rate.
    ///
    /// ```rust
    /// use quote_core::types::LineItem;
    ///
    /// let line = LineItem::with_values("recA", 2.0, 100.50);
    /// assert_eq!(line.amount().value(), 201.0);
    ///
    /// let broken = LineItem::with_values("recA", f64::NAN, 100.50);
    /// assert_eq!(broken.amount().value(), 0.0);
    /// ```
    #[inline]
    pub fn amount(&self) -> Rupees {
        self.unit_rate() * self.quantity()
    }

    /// Sets the quantity from raw input text.
    pub fn set_quantity_input(&mut self, input: &str) {
        self.quantity = coerce_number(input);
    }

    /// Sets the unit rate from raw input text.
    pub fn set_rate_input(&mut self, input: &str) {
        self.unit_rate = coerce_number(input);
    }

    /// Picks a product for this row, overwriting the unit rate from the catalog.
    pub fn select_product<C>(&mut self, product_id: &str, catalog: &C)
    where
        C: ProductCatalog + ?Sized,
    {
        self.product_id = product_id.to_string();
        self.unit_rate = catalog.rate_of(product_id).unwrap_or(0.0);
    }
}

impl Default for LineItem {
    fn default() -> Self {
        LineItem::new()
    }
}

/// Accepts a JSON number, a numeric string, or anything else (→ 0).
pub(crate) fn lenient_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Number(n) => finite_or_zero(n),
        Raw::Text(s) => coerce_number(&s),
        Raw::Other(_) => 0.0,
    })
}

// =============================================================================
// Clients
// =============================================================================

/// A client a quotation can be billed to.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub contact_details: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub client_type: String,
    #[serde(default)]
    pub gst_number: String,
    /// Comma-separated "address, city, state, postal code".
    #[serde(default)]
    pub shipping_address: String,
}

/// Input for creating a client record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewClient {
    pub name: String,
    #[serde(default)]
    pub contact_details: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub client_type: String,
    #[serde(default)]
    pub gst_number: String,
}

/// Field payload for a new client record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewClientFields {
    #[serde(rename = "Client ID")]
    pub client_code: String,
    #[serde(rename = "Client Name")]
    pub name: String,
    #[serde(rename = "Contact Details")]
    pub contact_details: String,
    #[serde(rename = "City")]
    pub city: String,
    #[serde(rename = "Client Type")]
    pub client_type: String,
    #[serde(rename = "GST Number")]
    pub gst_number: String,
}

impl NewClient {
    /// Business code for a client created at `now`: `CL-<unix millis>`.
    pub fn client_code(now: DateTime<Utc>) -> String {
        format!("CL-{}", now.timestamp_millis())
    }

    /// Builds the record fields, stamping the client code from `now`.
    pub fn into_fields(self, now: DateTime<Utc>) -> NewClientFields {
        NewClientFields {
            client_code: Self::client_code(now),
            name: self.name.trim().to_string(),
            contact_details: self.contact_details,
            city: self.city,
            client_type: self.client_type,
            gst_number: self.gst_number,
        }
    }
}

// =============================================================================
// Team
// =============================================================================

/// A team member who can be recorded as the quotation's creator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
}

// =============================================================================
// Quotation Status
// =============================================================================

/// Status of a stored quotation record.
///
/// Quotations are always created as drafts; later transitions happen in the
/// remote store, outside this system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum QuotationStatus {
    #[default]
    Draft,
}

// =============================================================================
// Custom Fields
// =============================================================================

/// Free-form name/value pair a user adds to a quotation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CustomField {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: String,
}

// =============================================================================
// Unit Tests
// =============================================================================
