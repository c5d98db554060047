//! # Printable Document Model
//!
//! Everything a renderer needs to lay out a quotation, already formatted.
//! Renderers do no arithmetic: amounts arrive as `₹` strings with two
//! decimals, in the order they are printed.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │ QUOTATION Q-00042            Date 2024-03-10  Valid 03-12   │
//! │ Bill To: Acme Corp                Ship To: 12 Main St, Pune │
//! ├────┬──────────┬─────┬────────┬────────┬───────┬───────┬─────┤
//! │ #  │ Item     │ Qty │ Rate   │ Amount │ CGST  │ SGST  │Total│
//! ├────┴──────────┴─────┴────────┴────────┴───────┴───────┴─────┤
//! │                                      Subtotal    ₹352.50    │
//! │                                      Discount   -₹35.25     │
//! │                                      …                      │
//! │ Three Hundred and Seventy Four Rupees Only                  │
//! └──────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;

use crate::quotation::QuotationDraft;
use crate::totals::{row_breakdown, TotalsResult};
use crate::types::{Client, ProductCatalog};

/// One printed row of the item table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRow {
    /// 1-based position.
    pub position: usize,
    pub item: String,
    pub quantity: String,
    pub rate: String,
    pub amount: String,
    pub cgst: String,
    pub sgst: String,
    pub total: String,
}

/// The totals block, top to bottom.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentTotals {
    pub subtotal: String,
    pub discount_percent: String,
    /// Always printed as a deduction: `-₹35.25`.
    pub discount: String,
    pub taxable: String,
    pub sgst: String,
    pub cgst: String,
    pub total: String,
    pub in_words: String,
}

/// Who the quotation is addressed to.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentParty {
    pub name: String,
    pub contact_details: String,
    pub city: String,
    pub gst_number: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotationDocument {
    pub quotation_no: String,
    pub quotation_date: String,
    pub expiry_date: String,
    pub bill_to: Option<DocumentParty>,
    pub ship_to: String,
    pub rows: Vec<DocumentRow>,
    pub totals: DocumentTotals,
    pub notes: String,
}

impl QuotationDocument {
    /// Lays out `draft` for printing.
    ///
    /// Product names come from `catalog`; a row whose product isn't in the
    /// catalog shows its record id. `totals` is taken as given so the
    /// document prints exactly what was stored.
    ///
    /// ```rust
    /// use quote_core::document::QuotationDocument;
    /// use quote_core::quotation::QuotationDraft;
    /// use quote_core::types::{LineItem, Product};
    ///
    /// let mut draft = QuotationDraft::default();
    /// draft.lines.push(LineItem::with_values("recA", 2.0, 100.50));
    /// draft.discount_percent = 10.0;
    ///
    /// let catalog: Vec<Product> = Vec::new();
    /// let doc = QuotationDocument::build(&draft, None, &catalog, &draft.totals());
    /// assert_eq!(doc.rows[0].amount, "₹201.00");
    /// assert_eq!(doc.totals.discount, "-₹20.10");
    /// ```
    pub fn build<C>(
        draft: &QuotationDraft,
        client: Option<&Client>,
        catalog: &C,
        totals: &TotalsResult,
    ) -> Self
    where
        C: ProductCatalog + ?Sized,
    {
        let rows = draft
            .lines
            .iter()
            .enumerate()
            .map(|(i, line)| {
                let figures = row_breakdown(line);
                let item = catalog
                    .name_of(&line.product_id)
                    .unwrap_or(line.product_id.as_str())
                    .to_string();

                DocumentRow {
                    position: i + 1,
                    item,
                    quantity: format!("{}", line.quantity()),
                    rate: line.unit_rate().to_string(),
                    amount: figures.amount.to_string(),
                    cgst: figures.cgst.to_string(),
                    sgst: figures.sgst.to_string(),
                    total: figures.total.to_string(),
                }
            })
            .collect();

        let document_totals = DocumentTotals {
            subtotal: totals.subtotal.to_string(),
            discount_percent: format!("{}%", totals.discount_percent),
            discount: format!("-{}", totals.discount_amount.abs()),
            taxable: totals.taxable_amount.to_string(),
            sgst: totals.sgst.to_string(),
            cgst: totals.cgst.to_string(),
            total: totals.grand_total.to_string(),
            in_words: totals.total_in_words.clone(),
        };

        QuotationDocument {
            quotation_no: draft.id.map(|id| id.to_string()).unwrap_or_default(),
            quotation_date: draft
                .dates
                .map(|d| d.quotation_date.to_string())
                .unwrap_or_default(),
            expiry_date: draft
                .dates
                .map(|d| d.expiry_date.to_string())
                .unwrap_or_default(),
            bill_to: client.map(|c| DocumentParty {
                name: c.name.clone(),
                contact_details: c.contact_details.clone(),
                city: c.city.clone(),
                gst_number: c.gst_number.clone(),
            }),
            ship_to: draft.ship_to.to_field_value(),
            rows,
            totals: document_totals,
            notes: draft.notes(),
        }
    }

    /// Filename the rendered document is stored under.
    pub fn filename(&self) -> String {
        crate::quotation::pdf_filename(&self.quotation_no)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quotation::{QuotationDates, QuotationId};
    use crate::types::{LineItem, Product};
    use chrono::NaiveDate;

    fn catalog() -> Vec<Product> {
        vec![
            Product {
                id: "recA".to_string(),
                name: "Widget".to_string(),
                rate: 100.5,
            },
            Product {
                id: "recB".to_string(),
                name: "Gadget".to_string(),
                rate: 50.5,
            },
        ]
    }

    fn draft() -> QuotationDraft {
        let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let mut draft =
            QuotationDraft::new(QuotationId::from_number(42), QuotationDates::standard(today));
        draft.lines = vec![
            LineItem::with_values("recA", 2.0, 100.50),
            LineItem::with_values("recB", 3.0, 50.50),
        ];
        draft.discount_percent = 10.0;
        draft.ship_to.address = "12 Main St".to_string();
        draft.ship_to.city = "Pune".to_string();
        draft
    }

    #[test]
    fn test_rows_are_formatted() {
        let draft = draft();
        let doc = QuotationDocument::build(&draft, None, &catalog(), &draft.totals());

        assert_eq!(doc.rows.len(), 2);
        let row = &doc.rows[1];
        assert_eq!(row.position, 2);
        assert_eq!(row.item, "Gadget");
        assert_eq!(row.quantity, "3");
        assert_eq!(row.rate, "₹50.50");
        assert_eq!(row.amount, "₹151.50");
        assert_eq!(row.cgst, "₹13.63");
        assert_eq!(row.total, "₹178.77");
    }

    #[test]
    fn test_totals_block() {
        let draft = draft();
        let doc = QuotationDocument::build(&draft, None, &catalog(), &draft.totals());

        assert_eq!(doc.totals.subtotal, "₹352.50");
        assert_eq!(doc.totals.discount_percent, "10%");
        assert_eq!(doc.totals.discount, "-₹35.25");
        assert_eq!(doc.totals.taxable, "₹317.25");
        assert_eq!(doc.totals.cgst, "₹28.55");
        assert_eq!(doc.totals.sgst, "₹28.55");
        assert_eq!(doc.totals.total, "₹374.36");
        assert_eq!(doc.totals.in_words, "Three Hundred and Seventy Four Rupees Only");
    }

    #[test]
    fn test_header_and_parties() {
        let draft = draft();
        let client = Client {
            id: "recClient1".to_string(),
            name: "Acme Corp".to_string(),
            gst_number: "27AAAAA0000A1Z5".to_string(),
            ..Client::default()
        };
        let doc = QuotationDocument::build(&draft, Some(&client), &catalog(), &draft.totals());

        assert_eq!(doc.quotation_no, "Q-00042");
        assert_eq!(doc.quotation_date, "2024-03-10");
        assert_eq!(doc.expiry_date, "2024-03-12");
        assert_eq!(doc.ship_to, "12 Main St, Pune");
        assert_eq!(doc.bill_to.as_ref().map(|p| p.name.as_str()), Some("Acme Corp"));
        assert_eq!(doc.filename(), "Q-00042.pdf");
    }

    #[test]
    fn test_unknown_product_shows_id() {
        let mut draft = draft();
        draft.lines.push(LineItem::with_values("recZ", 1.0, 5.0));
        let doc = QuotationDocument::build(&draft, None, &catalog(), &draft.totals());
        assert_eq!(doc.rows[2].item, "recZ");
    }
}
