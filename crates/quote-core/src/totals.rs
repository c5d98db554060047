//! # Totals Engine
//!
//! Turns the rows of a quotation and a discount percentage into the numbers
//! printed in the totals block.
//!
//! ## The Cascade
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  lines ──► Σ qty × rate ─────────────────────────► subtotal             │
//! │                                                       │                 │
//! │            subtotal × discount% / 100 ◄───────────────┤                 │
//! │                        │                              │                 │
//! │                        ▼                              ▼                 │
//! │                 discount amount ──────► taxable = subtotal − discount   │
//! │                                               │                         │
//! │                              ┌────────────────┼────────────────┐        │
//! │                              ▼                ▼                ▼        │
//! │                        CGST (9%)          taxable          SGST (9%)    │
//! │                              └────────────────┼────────────────┘        │
//! │                                               ▼                         │
//! │                                          grand total                    │
//! │                                               │                         │
//! │                           floor ──► words ──► "… Rupees Only"           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rows vs. Aggregate
//! Each row shows its own CGST/SGST/total computed from the row amount with
//! no discount applied. The discount only exists at the aggregate level, so
//! with an active discount the row totals do not add up to the grand total.
//! That asymmetry is intentional and covered by tests.
//!
//! ## Guarantees
//! - Never fails; malformed numbers count as zero
//! - Every amount is finite
//! - Recomputed from scratch on every call; same input, bit-identical output

use serde::{Deserialize, Serialize};

use crate::money::{finite_or_zero, Rupees};
use crate::types::LineItem;
use crate::words::rupees_in_words;
use crate::{CGST_RATE, SGST_RATE};

// =============================================================================
// Totals Result
// =============================================================================

/// Snapshot of a quotation's totals.
///
/// Derived, immutable, never partially updated. Any change to the lines or the
/// discount means calling [`compute_totals`] again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalsResult {
    /// Σ quantity × unit rate.
    pub subtotal: Rupees,

    /// The discount percent the totals were computed with.
    pub discount_percent: f64,

    /// subtotal × discount% / 100 (negative for a negative percent).
    pub discount_amount: Rupees,

    /// subtotal − discount amount.
    pub taxable_amount: Rupees,

    /// Central GST on the taxable amount.
    pub cgst: Rupees,

    /// State GST on the taxable amount.
    pub sgst: Rupees,

    /// taxable + CGST + SGST.
    pub grand_total: Rupees,

    /// Floored grand total spelled out, e.g. "Three Hundred and Seventy Four Rupees Only".
    pub total_in_words: String,
}

impl TotalsResult {
    /// Combined GST (CGST + SGST), the value stored in the record's "GST" field.
    #[inline]
    pub fn gst(&self) -> Rupees {
        self.cgst + self.sgst
    }
}

impl Default for TotalsResult {
    fn default() -> Self {
        compute_totals(&[], 0.0)
    }
}

// =============================================================================
// Row Breakdown
// =============================================================================

/// Per-row figures shown in the item table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowBreakdown {
    /// quantity × unit rate.
    pub amount: Rupees,
    /// 9% of the row amount.
    pub cgst: Rupees,
    /// 9% of the row amount.
    pub sgst: Rupees,
    /// amount + CGST + SGST, with no discount applied.
    pub total: Rupees,
}

/// Computes one row's figures. Discount is never applied here.
///
/// ```rust
/// use quote_core::totals::row_breakdown;
/// use quote_core::types::LineItem;
///
/// let row = row_breakdown(&LineItem::with_values("recA", 1.0, 100.0));
/// assert!((row.cgst.value() - 9.0).abs() < 1e-9);
/// assert!((row.total.value() - 118.0).abs() < 1e-9);
/// ```
pub fn row_breakdown(line: &LineItem) -> RowBreakdown {
    let amount = line.amount();
    let cgst = amount.calculate_tax(CGST_RATE);
    let sgst = amount.calculate_tax(SGST_RATE);

    RowBreakdown {
        amount,
        cgst,
        sgst,
        total: amount + cgst + sgst,
    }
}

/// Computes every row's figures, in order.
pub fn line_breakdown(lines: &[LineItem]) -> Vec<RowBreakdown> {
    lines.iter().map(row_breakdown).collect()
}

// =============================================================================
// Engine
// =============================================================================

/// Computes the totals for `lines` with `discount_percent` applied to the subtotal.
///
/// ## Edge Cases
/// - No lines: every amount is zero, words are "Zero Rupees Only"
/// - Negative percent: negative discount, taxable amount goes *up*
/// - Percent above 100: taxable amount goes negative
/// - Non-finite percent: treated as 0
///
/// ## Example
/// ```rust
/// use quote_core::totals::compute_totals;
///
/// let totals = compute_totals(&[], 0.0);
/// assert!(totals.grand_total.is_zero());
/// assert_eq!(totals.total_in_words, "Zero Rupees Only");
/// ```
pub fn compute_totals(lines: &[LineItem], discount_percent: f64) -> TotalsResult {
    let discount_percent = finite_or_zero(discount_percent);

    let subtotal: Rupees = lines.iter().map(LineItem::amount).sum();
    let discount_amount = subtotal.percentage(discount_percent);
    let taxable_amount = subtotal - discount_amount;
    let cgst = taxable_amount.calculate_tax(CGST_RATE);
    let sgst = taxable_amount.calculate_tax(SGST_RATE);
    let grand_total = taxable_amount + cgst + sgst;

    TotalsResult {
        subtotal,
        discount_percent,
        discount_amount,
        taxable_amount,
        cgst,
        sgst,
        grand_total,
        total_in_words: rupees_in_words(grand_total),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
