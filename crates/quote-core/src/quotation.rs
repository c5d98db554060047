//! # Quotations
//!
//! Numbering, dates, the editable draft and the record it becomes.
//!
//! ## Draft → Record
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     QuotationDraft (editable)                           │
//! │                                                                         │
//! │  id: Q-00042      dates: today / today+2      created_by: recTeam1      │
//! │  lines: [LineItem…]   discount %   terms   custom fields   ship to     │
//! │                                                                         │
//! │        │ totals()                              │ notes()                │
//! │        ▼                                       ▼                        │
//! │  TotalsResult ─────────┐       terms + "--- Custom Fields ---" block    │
//! │                        ▼                       │                        │
//! │            to_record(&totals) ◄────────────────┘                        │
//! │                        │                                                │
//! │                        ▼                                                │
//! │  QuotationRecord  {"Quotation ID", "Total Cost", "GST", "Product", …}   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Totals are never cached on the draft. Every call to
//! [`QuotationDraft::totals`] recomputes from the current lines.

use std::fmt;
use std::str::FromStr;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::address::ShippingAddress;
use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::{coerce_number, Rupees};
use crate::totals::{compute_totals, line_breakdown, RowBreakdown, TotalsResult};
use crate::types::{Client, CustomField, LineItem, ProductCatalog, QuotationStatus};
use crate::validation::validate_created_by;
use crate::DEFAULT_VALIDITY_DAYS;

// =============================================================================
// Quotation Number
// =============================================================================

/// Quotation number, shown as `Q-NNNNN`.
///
/// Five digits of zero padding. Numbers past 99999 print wider (`Q-100000`),
/// which breaks numbering against a store that sorts ids as text: `"Q-99999"`
/// still sorts above `"Q-100000"`, so every later save is offered
/// `Q-100000` again. The desk tops out at `Q-99999` in practice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct QuotationId(u64);

impl QuotationId {
    pub const PREFIX: &'static str = "Q-";

    /// The number used when nothing has been issued yet: `Q-00001`.
    pub const fn first() -> Self {
        QuotationId(1)
    }

    pub const fn from_number(number: u64) -> Self {
        QuotationId(number)
    }

    pub const fn number(&self) -> u64 {
        self.0
    }

    /// Next number after the most recently stored one.
    ///
    /// Reads the leading digits after the first `-`. Anything that can't be
    /// read (no previous id, no dash, no digits) restarts at `Q-00001`.
    ///
    /// ```rust
    /// use quote_core::quotation::QuotationId;
    ///
    /// assert_eq!(QuotationId::next_after(None).to_string(), "Q-00001");
    /// assert_eq!(QuotationId::next_after(Some("Q-00041")).to_string(), "Q-00042");
    /// assert_eq!(QuotationId::next_after(Some("garbage")).to_string(), "Q-00001");
    /// ```
    pub fn next_after(last: Option<&str>) -> Self {
        last.and_then(|id| id.split_once('-'))
            .and_then(|(_, rest)| leading_number(rest))
            .map(|n| QuotationId(n.saturating_add(1)))
            .unwrap_or_else(QuotationId::first)
    }

    /// Filename of the rendered document for this quotation.
    pub fn pdf_filename(&self) -> String {
        pdf_filename(&self.to_string())
    }
}

fn leading_number(text: &str) -> Option<u64> {
    let digits: String = text
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

impl fmt::Display for QuotationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:05}", Self::PREFIX, self.0)
    }
}

impl FromStr for QuotationId {
    type Err = CoreError;

    /// Strict parse: `Q-` followed by digits only.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        trimmed
            .strip_prefix(Self::PREFIX)
            .filter(|digits| !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()))
            .and_then(|digits| digits.parse().ok())
            .map(QuotationId)
            .ok_or_else(|| CoreError::InvalidQuotationId(trimmed.to_string()))
    }
}

impl TryFrom<String> for QuotationId {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<QuotationId> for String {
    fn from(id: QuotationId) -> Self {
        id.to_string()
    }
}

/// Characters that can't appear in a stored filename.
const UNSAFE_FILENAME_CHARS: [char; 10] = ['/', '\\', '?', '%', '*', ':', '|', '"', '<', '>'];

/// Turns a quotation number into a safe document filename.
///
/// ```rust
/// use quote_core::quotation::pdf_filename;
///
/// assert_eq!(pdf_filename("Q-00042"), "Q-00042.pdf");
/// assert_eq!(pdf_filename("Q/7:a"), "Q-7-a.pdf");
/// ```
pub fn pdf_filename(quotation_no: &str) -> String {
    let safe: String = quotation_no
        .chars()
        .map(|c| if UNSAFE_FILENAME_CHARS.contains(&c) { '-' } else { c })
        .collect();
    format!("{}.pdf", safe)
}

// =============================================================================
// Dates
// =============================================================================

/// Quotation date and the date the offer expires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotationDates {
    pub quotation_date: NaiveDate,
    pub expiry_date: NaiveDate,
}

impl QuotationDates {
    /// Dates for a quotation issued on `today`, valid for `validity_days`.
    ///
    /// ```rust
    /// use chrono::NaiveDate;
    /// use quote_core::quotation::QuotationDates;
    ///
    /// let today = NaiveDate::from_ymd_opt(2024, 2, 28).unwrap();
    /// let dates = QuotationDates::starting(today, 2);
    /// assert_eq!(dates.expiry_date.to_string(), "2024-03-01");
    /// ```
    pub fn starting(today: NaiveDate, validity_days: u32) -> Self {
        let expiry_date = today
            .checked_add_signed(Duration::days(i64::from(validity_days)))
            .unwrap_or(NaiveDate::MAX);

        QuotationDates {
            quotation_date: today,
            expiry_date,
        }
    }

    /// Dates with the default two-day validity.
    pub fn standard(today: NaiveDate) -> Self {
        Self::starting(today, DEFAULT_VALIDITY_DAYS)
    }
}

// =============================================================================
// Draft
// =============================================================================

const CUSTOM_FIELDS_HEADER: &str = "--- Custom Fields ---";

/// A quotation being prepared.
///
/// Also the shape of a draft file: every field is optional on input, and
/// numbers that can't be read count as zero.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotationDraft {
    /// Assigned from the store before saving when absent.
    #[serde(default)]
    pub id: Option<QuotationId>,

    /// Defaults to today when absent.
    #[serde(default)]
    pub dates: Option<QuotationDates>,

    /// Client record id.
    #[serde(default)]
    pub client_id: Option<String>,

    /// Team member record id of whoever prepared the quotation.
    #[serde(default)]
    pub created_by: Option<String>,

    #[serde(default)]
    pub lines: Vec<LineItem>,

    #[serde(default, deserialize_with = "crate::types::lenient_number")]
    pub discount_percent: f64,

    /// Terms & conditions text.
    #[serde(default)]
    pub terms: String,

    #[serde(default)]
    pub custom_fields: Vec<CustomField>,

    #[serde(default)]
    pub ship_to: ShippingAddress,
}

impl QuotationDraft {
    /// Empty draft with a number and dates already assigned.
    pub fn new(id: QuotationId, dates: QuotationDates) -> Self {
        QuotationDraft {
            id: Some(id),
            dates: Some(dates),
            ..QuotationDraft::default()
        }
    }

    // -------------------------------------------------------------------------
    // Lines
    // -------------------------------------------------------------------------

    /// Appends an empty row (quantity 1, rate 0) and returns its index.
    pub fn add_line(&mut self) -> usize {
        self.lines.push(LineItem::new());
        self.lines.len() - 1
    }

    /// Removes and returns the row at `index`.
    pub fn remove_line(&mut self, index: usize) -> CoreResult<LineItem> {
        self.check_index(index)?;
        Ok(self.lines.remove(index))
    }

    /// Sets a row's quantity from raw input. Unreadable input becomes 0.
    pub fn set_quantity(&mut self, index: usize, input: &str) -> CoreResult<()> {
        self.line_mut(index)?.set_quantity_input(input);
        Ok(())
    }

    /// Sets a row's unit rate from raw input. Unreadable input becomes 0.
    pub fn set_rate(&mut self, index: usize, input: &str) -> CoreResult<()> {
        self.line_mut(index)?.set_rate_input(input);
        Ok(())
    }

    /// Picks a product for a row; the rate comes from the catalog (unknown → 0).
    pub fn select_product<C>(&mut self, index: usize, product_id: &str, catalog: &C) -> CoreResult<()>
    where
        C: ProductCatalog + ?Sized,
    {
        self.line_mut(index)?.select_product(product_id, catalog);
        Ok(())
    }

    /// Sets the discount percent from raw input. Unreadable input becomes 0.
    pub fn set_discount_percent(&mut self, input: &str) {
        self.discount_percent = coerce_number(input);
    }

    fn check_index(&self, index: usize) -> CoreResult<()> {
        if index < self.lines.len() {
            Ok(())
        } else {
            Err(CoreError::LineNotFound {
                index,
                len: self.lines.len(),
            })
        }
    }

    fn line_mut(&mut self, index: usize) -> CoreResult<&mut LineItem> {
        let len = self.lines.len();
        self.lines
            .get_mut(index)
            .ok_or(CoreError::LineNotFound { index, len })
    }

    // -------------------------------------------------------------------------
    // Client
    // -------------------------------------------------------------------------

    /// Bills the quotation to `client` and pre-fills "Ship To" from its
    /// stored shipping address.
    pub fn select_client(&mut self, client: &Client) {
        self.client_id = Some(client.id.clone());
        self.ship_to = ShippingAddress::parse(&client.shipping_address);
    }

    /// Client record id, if one is selected.
    pub fn client(&self) -> Option<&str> {
        self.client_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }

    // -------------------------------------------------------------------------
    // Derived values
    // -------------------------------------------------------------------------

    /// Totals for the current lines and discount.
    pub fn totals(&self) -> TotalsResult {
        compute_totals(&self.lines, self.discount_percent)
    }

    /// Per-row figures for the item table.
    pub fn line_breakdown(&self) -> Vec<RowBreakdown> {
        line_breakdown(&self.lines)
    }

    /// Product record ids on the draft, each once, in first-seen order.
    pub fn product_references(&self) -> Vec<String> {
        let mut refs: Vec<String> = Vec::new();
        for line in self.lines.iter().filter(|l| l.has_product()) {
            let id = line.product_id.trim();
            if !refs.iter().any(|r| r == id) {
                refs.push(id.to_string());
            }
        }
        refs
    }

    /// Notes text stored with the record: terms, then the custom fields block.
    ///
    /// ```rust
    /// use quote_core::quotation::QuotationDraft;
    /// use quote_core::types::CustomField;
    ///
    /// let mut draft = QuotationDraft::default();
    /// draft.terms = "Payment within 30 days.".to_string();
    /// draft.custom_fields.push(CustomField { name: "PO".into(), value: "7781".into() });
    /// assert_eq!(
    ///     draft.notes(),
    ///     "Payment within 30 days.\n\n--- Custom Fields ---\nPO: 7781"
    /// );
    /// ```
    pub fn notes(&self) -> String {
        let mut notes = self.terms.trim().to_string();

        if !self.custom_fields.is_empty() {
            let lines: Vec<String> = self
                .custom_fields
                .iter()
                .map(|field| {
                    let name = if field.name.trim().is_empty() {
                        "Field"
                    } else {
                        field.name.as_str()
                    };
                    format!("{}: {}", name, field.value)
                })
                .collect();

            notes.push_str("\n\n");
            notes.push_str(CUSTOM_FIELDS_HEADER);
            notes.push('\n');
            notes.push_str(&lines.join("\n"));
        }

        notes.trim().to_string()
    }

    // -------------------------------------------------------------------------
    // Record
    // -------------------------------------------------------------------------

    /// Builds the record to store for this draft.
    ///
    /// ## Errors
    /// - `ValidationError::Required { field: "Created By" }` without a creator
    /// - `ValidationError::Required { field: "Quotation ID" }` without a number
    /// - `ValidationError::Required { field: "Quotation Date" }` without dates
    pub fn to_record(&self, totals: &TotalsResult) -> CoreResult<QuotationRecord> {
        let created_by = validate_created_by(self.created_by.as_deref())?;
        let id = self
            .id
            .ok_or_else(|| ValidationError::required("Quotation ID"))?;
        let dates = self
            .dates
            .ok_or_else(|| ValidationError::required("Quotation Date"))?;

        Ok(QuotationRecord {
            quotation_id: id.to_string(),
            quotation_date: dates.quotation_date,
            expiry_date: dates.expiry_date,
            total_cost: totals.grand_total,
            gst: totals.gst(),
            created_by: vec![created_by.to_string()],
            status: QuotationStatus::Draft,
            client: self.client().map(|c| vec![c.to_string()]).unwrap_or_default(),
            products: self.product_references(),
            notes: self.notes(),
        })
    }
}

// =============================================================================
// Stored Record
// =============================================================================

/// Field payload of a stored quotation, keyed by the store's column names.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuotationRecord {
    #[serde(rename = "Quotation ID")]
    pub quotation_id: String,

    #[serde(rename = "Quotation Date")]
    pub quotation_date: NaiveDate,

    #[serde(rename = "Expiry Date")]
    pub expiry_date: NaiveDate,

    /// Grand total, unrounded.
    #[serde(rename = "Total Cost")]
    pub total_cost: Rupees,

    /// CGST + SGST, unrounded.
    #[serde(rename = "GST")]
    pub gst: Rupees,

    #[serde(rename = "Created By")]
    pub created_by: Vec<String>,

    #[serde(rename = "Status")]
    pub status: QuotationStatus,

    #[serde(rename = "Client", skip_serializing_if = "Vec::is_empty")]
    pub client: Vec<String>,

    #[serde(rename = "Product", skip_serializing_if = "Vec::is_empty")]
    pub products: Vec<String>,

    #[serde(rename = "Notes", skip_serializing_if = "String::is_empty")]
    pub notes: String,
}

/// A stored document linked from the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub url: String,
    pub filename: String,
}

/// Patch that links the rendered document to its quotation record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttachmentFields {
    #[serde(rename = "Quotation")]
    pub quotation: Vec<Attachment>,
}

impl AttachmentFields {
    pub fn single(url: impl Into<String>, filename: impl Into<String>) -> Self {
        AttachmentFields {
            quotation: vec![Attachment {
                url: url.into(),
                filename: filename.into(),
            }],
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Product;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_draft() -> QuotationDraft {
        let mut draft = QuotationDraft::new(
            QuotationId::from_number(42),
            QuotationDates::standard(date(2024, 3, 10)),
        );
        draft.created_by = Some("recTeam1".to_string());
        draft.lines = vec![
            LineItem::with_values("recA", 2.0, 100.50),
            LineItem::with_values("recB", 3.0, 50.50),
            LineItem::with_values("recA", 1.0, 100.50),
            LineItem::new(),
        ];
        draft.discount_percent = 10.0;
        draft
    }

    #[test]
    fn test_quotation_id_display_and_parse() {
        assert_eq!(QuotationId::first().to_string(), "Q-00001");
        assert_eq!(QuotationId::from_number(123456).to_string(), "Q-123456");
        assert_eq!("Q-00042".parse::<QuotationId>(), Ok(QuotationId::from_number(42)));
        assert!("Q-".parse::<QuotationId>().is_err());
        assert!("X-00001".parse::<QuotationId>().is_err());
        assert!("Q-12a".parse::<QuotationId>().is_err());
    }

    #[test]
    fn test_next_after() {
        assert_eq!(QuotationId::next_after(Some("Q-00009")).number(), 10);
        assert_eq!(QuotationId::next_after(Some("Q-99999")).to_string(), "Q-100000");
        // Leading digits only, like the stored ids sometimes carry suffixes.
        assert_eq!(QuotationId::next_after(Some("Q-00012-rev")).number(), 13);
        assert_eq!(QuotationId::next_after(Some("Q-12abc")).number(), 13);
        assert_eq!(QuotationId::next_after(Some("Q-abc")), QuotationId::first());
        assert_eq!(QuotationId::next_after(Some("Q00012")), QuotationId::first());
        assert_eq!(QuotationId::next_after(Some("")), QuotationId::first());
    }

    #[test]
    fn test_six_digit_ids_sort_below_five_digit_text() {
        let wide = QuotationId::next_after(Some("Q-99999"));
        assert_eq!(wide.to_string(), "Q-100000");
        assert!(QuotationId::from_number(99_999) < wide);
        // A text sort disagrees, so the stored "latest" stays Q-99999.
        assert!("Q-99999".to_string() > wide.to_string());
        assert_eq!(QuotationId::next_after(Some("Q-99999")), wide);
    }

    #[test]
    fn test_quotation_id_serde() {
        let id = QuotationId::from_number(7);
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"Q-00007\"");
        let back: QuotationId = serde_json::from_str("\"Q-00007\"").unwrap();
        assert_eq!(back, id);
        assert!(serde_json::from_str::<QuotationId>("\"nope\"").is_err());
    }

    #[test]
    fn test_pdf_filename_sanitizes() {
        assert_eq!(QuotationId::from_number(42).pdf_filename(), "Q-00042.pdf");
        assert_eq!(pdf_filename(r#"a/b\c?d%e*f:g|h"i<j>k"#), "a-b-c-d-e-f-g-h-i-j-k.pdf");
    }

    #[test]
    fn test_dates() {
        let dates = QuotationDates::standard(date(2024, 12, 31));
        assert_eq!(dates.quotation_date, date(2024, 12, 31));
        assert_eq!(dates.expiry_date, date(2025, 1, 2));

        let json = serde_json::to_value(dates).unwrap();
        assert_eq!(json["quotationDate"], "2024-12-31");
        assert_eq!(json["expiryDate"], "2025-01-02");
    }

    #[test]
    fn test_line_editing() {
        let products = vec![Product {
            id: "recA".to_string(),
            name: "Widget".to_string(),
            rate: 250.0,
        }];
        let mut draft = QuotationDraft::default();

        let idx = draft.add_line();
        assert_eq!(idx, 0);
        draft.select_product(idx, "recA", &products).unwrap();
        draft.set_quantity(idx, "4").unwrap();
        assert_eq!(draft.totals().subtotal.value(), 1000.0);

        draft.set_quantity(idx, "lots").unwrap();
        assert_eq!(draft.totals().subtotal.value(), 0.0);

        assert_eq!(
            draft.set_quantity(5, "1"),
            Err(CoreError::LineNotFound { index: 5, len: 1 })
        );
        assert!(draft.remove_line(1).is_err());
        assert_eq!(draft.remove_line(0).unwrap().product_id, "recA");
        assert!(draft.lines.is_empty());
    }

    #[test]
    fn test_discount_input() {
        let mut draft = sample_draft();
        draft.set_discount_percent("12.5");
        assert_eq!(draft.discount_percent, 12.5);
        draft.set_discount_percent("ten");
        assert_eq!(draft.discount_percent, 0.0);
    }

    #[test]
    fn test_totals_follow_edits() {
        let mut draft = sample_draft();
        let before = draft.totals();
        draft.set_quantity(0, "3").unwrap();
        let after = draft.totals();
        assert!(after.subtotal > before.subtotal);
        assert_eq!(draft.line_breakdown().len(), draft.lines.len());
    }

    #[test]
    fn test_product_references_unique_in_order() {
        let mut draft = sample_draft();
        draft.lines.push(LineItem::with_values(" recC ", 1.0, 1.0));
        assert_eq!(draft.product_references(), vec!["recA", "recB", "recC"]);
    }

    #[test]
    fn test_notes_composition() {
        let mut draft = QuotationDraft::default();
        assert_eq!(draft.notes(), "");

        draft.terms = "  Delivery in 7 days.  ".to_string();
        assert_eq!(draft.notes(), "Delivery in 7 days.");

        draft.custom_fields = vec![
            CustomField {
                name: "Warranty".to_string(),
                value: "1 year".to_string(),
            },
            CustomField {
                name: " ".to_string(),
                value: "Handle with care".to_string(),
            },
        ];
        assert_eq!(
            draft.notes(),
            "Delivery in 7 days.\n\n--- Custom Fields ---\nWarranty: 1 year\nField: Handle with care"
        );

        draft.terms.clear();
        assert!(draft.notes().starts_with("--- Custom Fields ---"));
    }

    #[test]
    fn test_select_client_prefills_ship_to() {
        let client = Client {
            id: "recClient1".to_string(),
            name: "Acme".to_string(),
            shipping_address: "12 Main St, Pune, MH, 411001".to_string(),
            ..Client::default()
        };
        let mut draft = QuotationDraft::default();
        draft.select_client(&client);

        assert_eq!(draft.client(), Some("recClient1"));
        assert_eq!(draft.ship_to.city, "Pune");
        assert_eq!(draft.ship_to.postal_code, "411001");
    }

    #[test]
    fn test_to_record_fields() {
        let mut draft = sample_draft();
        draft.client_id = Some("recClient1".to_string());
        draft.terms = "Net 30".to_string();
        let totals = draft.totals();
        let record = draft.to_record(&totals).unwrap();

        assert_eq!(record.total_cost, totals.grand_total);
        assert_eq!(record.gst, totals.cgst + totals.sgst);

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["Quotation ID"], "Q-00042");
        assert_eq!(json["Quotation Date"], "2024-03-10");
        assert_eq!(json["Expiry Date"], "2024-03-12");
        assert_eq!(json["Created By"], serde_json::json!(["recTeam1"]));
        assert_eq!(json["Status"], "Draft");
        assert_eq!(json["Client"], serde_json::json!(["recClient1"]));
        assert_eq!(json["Product"], serde_json::json!(["recA", "recB"]));
        assert_eq!(json["Notes"], "Net 30");
        assert_eq!(json["Total Cost"], totals.grand_total.value());
    }

    #[test]
    fn test_to_record_omits_empty_fields() {
        let mut draft = sample_draft();
        draft.lines.clear();
        draft.client_id = Some("  ".to_string());
        let record = draft.to_record(&draft.totals()).unwrap();

        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("Client").is_none());
        assert!(json.get("Product").is_none());
        assert!(json.get("Notes").is_none());
        assert_eq!(json["Total Cost"], 0.0);
    }

    #[test]
    fn test_to_record_requires_created_by() {
        let mut draft = sample_draft();
        draft.created_by = None;
        assert_eq!(
            draft.to_record(&draft.totals()),
            Err(CoreError::Validation(ValidationError::required("Created By")))
        );

        let mut draft = sample_draft();
        draft.id = None;
        assert_eq!(
            draft.to_record(&draft.totals()),
            Err(CoreError::Validation(ValidationError::required("Quotation ID")))
        );
    }

    #[test]
    fn test_draft_file_is_lenient() {
        let draft: QuotationDraft = serde_json::from_str(
            r#"{
                "id": "Q-00003",
                "createdBy": "recTeam1",
                "lines": [{"productId": "recA", "quantity": "2", "unitRate": 10}],
                "discountPercent": "5"
            }"#,
        )
        .unwrap();

        assert_eq!(draft.id, Some(QuotationId::from_number(3)));
        assert_eq!(draft.discount_percent, 5.0);
        assert!(draft.dates.is_none());
        assert_eq!(draft.totals().subtotal.value(), 20.0);
    }

    #[test]
    fn test_attachment_fields_shape() {
        let json =
            serde_json::to_value(AttachmentFields::single("https://x/q.pdf", "Q-00001.pdf")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"Quotation": [{"url": "https://x/q.pdf", "filename": "Q-00001.pdf"}]})
        );
    }
}
