//! Totals engine and words formatter, exercised through the public API.

use proptest::prelude::*;
use quote_core::{compute_totals, rupees_in_words, words_of, LineItem, Rupees};

const EPS: f64 = 1e-9;

fn approx(actual: Rupees, expected: f64) {
    assert!(
        (actual.value() - expected).abs() < EPS,
        "expected {expected}, got {}",
        actual.value()
    );
}

fn sample_lines() -> Vec<LineItem> {
    vec![
        LineItem::with_values("recA", 2.0, 100.50),
        LineItem::with_values("recB", 3.0, 50.50),
        LineItem::with_values("recC", 0.5, 999.99),
        LineItem::with_values("recD", 7.0, 12.34),
    ]
}

// =============================================================================
// Totals: generated quotations
// =============================================================================

/// Up to 20 `(quantity, unit rate)` pairs. Quantities may be negative.
fn lines_strategy() -> impl Strategy<Value = Vec<(f64, f64)>> {
    prop::collection::vec((-10.0f64..1_000.0, 0.0f64..100_000.0), 0..20)
}

fn to_lines(pairs: &[(f64, f64)]) -> Vec<LineItem> {
    pairs
        .iter()
        .enumerate()
        .map(|(i, &(qty, rate))| LineItem::with_values(format!("rec{i}"), qty, rate))
        .collect()
}

const REL_EPS: f64 = 1e-9;

/// Relative comparison; amounts here reach the billions.
fn close(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() <= REL_EPS * expected.abs().max(1.0)
}

#[test]
fn test_empty_quotation() {
    let totals = compute_totals(&[], 0.0);
    assert_eq!(totals.grand_total.value(), 0.0);
    assert_eq!(totals.total_in_words, "Zero Rupees Only");
}

proptest! {
    #[test]
    fn test_subtotal_is_sum_of_line_amounts(pairs in lines_strategy(), pct in -200.0f64..300.0) {
        let totals = compute_totals(&to_lines(&pairs), pct);
        let expected: f64 = pairs.iter().map(|&(qty, rate)| qty * rate).sum();
        prop_assert!(close(totals.subtotal.value(), expected), "{} vs {}", totals.subtotal.value(), expected);
    }

    #[test]
    fn test_discount_and_taxable_any_percent(pairs in lines_strategy(), pct in -200.0f64..300.0) {
        let totals = compute_totals(&to_lines(&pairs), pct);
        let subtotal = totals.subtotal.value();

        prop_assert!(close(totals.discount_amount.value(), subtotal * pct / 100.0));
        prop_assert!(close(totals.taxable_amount.value(), subtotal - totals.discount_amount.value()));
        if subtotal > 0.0 && pct > 101.0 {
            prop_assert!(totals.taxable_amount.is_negative());
        }
    }

    #[test]
    fn test_tax_halves_are_nine_percent(pairs in lines_strategy(), pct in -200.0f64..300.0) {
        let totals = compute_totals(&to_lines(&pairs), pct);
        prop_assert_eq!(totals.cgst, totals.sgst);
        prop_assert!(close(totals.cgst.value(), totals.taxable_amount.value() * 0.09));
    }

    #[test]
    fn test_grand_total_is_taxable_plus_eighteen_percent(pairs in lines_strategy(), pct in -200.0f64..300.0) {
        let totals = compute_totals(&to_lines(&pairs), pct);
        let taxable = totals.taxable_amount.value();

        prop_assert!(close(totals.grand_total.value(), taxable * 1.18));
        prop_assert_eq!(&totals.total_in_words, &rupees_in_words(totals.grand_total));
    }

    #[test]
    fn test_identical_inputs_identical_output(pairs in lines_strategy(), pct in -200.0f64..300.0) {
        let lines = to_lines(&pairs);
        let a = compute_totals(&lines, pct);
        let b = compute_totals(&lines, pct);
        prop_assert_eq!(a.grand_total.value().to_bits(), b.grand_total.value().to_bits());
        prop_assert_eq!(a, b);
    }
}

#[test]
fn test_discount_over_hundred_goes_negative() {
    let totals = compute_totals(&sample_lines(), 150.0);
    assert!(totals.taxable_amount.is_negative());
    assert!(totals.grand_total.is_negative());
    assert!(totals.total_in_words.starts_with("Minus "));
}

#[test]
fn test_quotation_with_discount() {
    let lines = vec![
        LineItem::with_values("recA", 2.0, 100.50),
        LineItem::with_values("recB", 3.0, 50.50),
    ];
    let totals = compute_totals(&lines, 10.0);

    approx(totals.subtotal, 352.50);
    approx(totals.discount_amount, 35.25);
    approx(totals.taxable_amount, 317.25);
    approx(totals.cgst, 28.5525);
    approx(totals.sgst, 28.5525);
    approx(totals.grand_total, 374.355);
    assert_eq!(totals.total_in_words, "Three Hundred and Seventy Four Rupees Only");
}

#[test]
fn test_quotation_with_quarter_rupee_rate() {
    // Same quotation with the second rate at 50.25.
    let lines = vec![
        LineItem::with_values("recA", 2.0, 100.50),
        LineItem::with_values("recB", 3.0, 50.25),
    ];
    let totals = compute_totals(&lines, 10.0);

    approx(totals.subtotal, 351.75);
    approx(totals.discount_amount, 35.175);
    approx(totals.taxable_amount, 316.575);
    approx(totals.cgst, 28.49175);
    approx(totals.grand_total, 373.5585);
    assert_eq!(totals.total_in_words, "Three Hundred and Seventy Three Rupees Only");
}

// =============================================================================
// Words
// =============================================================================

#[test]
fn test_words_examples() {
    assert_eq!(words_of(0).unwrap(), "Zero");
    assert_eq!(words_of(100_000).unwrap(), "One Lakh");
    assert_eq!(
        words_of(123_456_789).unwrap(),
        "Twelve Crore Thirty Four Lakh Fifty Six Thousand Seven Hundred and Eighty Nine"
    );
    assert_eq!(words_of(500).unwrap(), "Five Hundred");
    assert_eq!(words_of(19).unwrap(), "Nineteen");
    assert_eq!(words_of(20).unwrap(), "Twenty");
    assert_eq!(words_of(21).unwrap(), "Twenty One");
}

#[test]
fn test_words_never_double_spaced() {
    for n in [1, 10, 100, 101, 1_000, 10_010, 100_001, 1_000_000, 99_000_099] {
        let words = words_of(n).unwrap();
        assert!(!words.contains("  "), "{n}: {words:?}");
        assert_eq!(words, words.trim());
    }
}

// =============================================================================
// Words: generated amounts
// =============================================================================

const ONES: [&str; 20] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten",
    "Eleven", "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen", "Eighteen",
    "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

/// Reads Indian-numbering words back into a number.
fn parse_words(words: &str) -> Option<u64> {
    if words == "Zero" {
        return Some(0);
    }

    let mut total = 0u64;
    let mut group = 0u64;
    for token in words.split(' ') {
        let scale = match token {
            "Crore" => Some(10_000_000),
            "Lakh" => Some(100_000),
            "Thousand" => Some(1_000),
            "Hundred" => Some(100),
            _ => None,
        };
        if let Some(scale) = scale {
            total += group * scale;
            group = 0;
        } else if token == "and" {
            continue;
        } else if let Some(i) = ONES.iter().skip(1).position(|w| *w == token) {
            group += i as u64 + 1;
        } else if let Some(i) = TENS.iter().skip(2).position(|w| *w == token) {
            group += (i as u64 + 2) * 10;
        } else {
            return None;
        }
    }
    Some(total + group)
}

#[test]
fn test_parse_words_reads_known_examples() {
    assert_eq!(
        parse_words("Twelve Crore Thirty Four Lakh Fifty Six Thousand Seven Hundred and Eighty Nine"),
        Some(123_456_789)
    );
    assert_eq!(parse_words("One Lakh"), Some(100_000));
    assert_eq!(parse_words("Zero"), Some(0));
    assert_eq!(parse_words("Eleventy"), None);
}

proptest! {
    #[test]
    fn test_words_round_trip(n in 0u64..1_000_000_000) {
        let words = words_of(n).unwrap();

        prop_assert!(!words.contains("  "), "{}: {:?}", n, words);
        prop_assert_eq!(words.trim(), words.as_str());
        prop_assert_eq!(parse_words(&words), Some(n), "{:?}", words);
    }

    #[test]
    fn test_words_and_only_after_earlier_group(n in 0u64..1_000_000_000) {
        let words = words_of(n).unwrap();
        let tokens: Vec<&str> = words.split(' ').collect();
        let ands: Vec<usize> = tokens
            .iter()
            .enumerate()
            .filter(|(_, t)| **t == "and")
            .map(|(i, _)| i)
            .collect();

        let expects_and = n >= 100 && n % 100 != 0;
        prop_assert_eq!(ands.len(), usize::from(expects_and), "{:?}", words);
        if let Some(&at) = ands.first() {
            prop_assert!(at > 0);
            prop_assert!(!tokens[at + 1..]
                .iter()
                .any(|t| matches!(*t, "Crore" | "Lakh" | "Thousand" | "Hundred")));
        }
    }

    #[test]
    fn test_rupees_in_words_spells_the_floor(amount in 0.0f64..999_999_999.0) {
        let text = rupees_in_words(Rupees::new(amount));
        let words = text.strip_suffix(" Rupees Only");
        prop_assert!(words.is_some(), "{:?}", text);
        prop_assert_eq!(parse_words(words.unwrap_or_default()), Some(amount.floor() as u64));
    }
}

#[test]
fn test_words_out_of_range() {
    assert!(words_of(999_999_999).is_ok());
    assert!(words_of(1_000_000_000).is_err());
    assert!(words_of(u64::MAX).is_err());
}

#[test]
fn test_rupees_in_words_floors() {
    assert_eq!(
        rupees_in_words(Rupees::new(1180.99)),
        "One Thousand One Hundred and Eighty Rupees Only"
    );
    assert_eq!(rupees_in_words(Rupees::new(100_000.0)), "One Lakh Rupees Only");
}
