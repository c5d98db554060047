//! # Amount in Words
//!
//! Spells whole rupee amounts in English using the Indian numbering system.
//!
//! ## Digit Grouping
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  123456789 → zero-padded to 9 digits → 12 | 34 | 56 | 7 | 89           │
//! │                                        ──   ──   ──   ─   ──           │
//! │                                      crore lakh thou hund rest         │
//! │                                                                         │
//! │  "Twelve Crore Thirty Four Lakh Fifty Six Thousand                     │
//! │   Seven Hundred and Eighty Nine"                                        │
//! │                                                                         │
//! │  • a zero group contributes nothing                                     │
//! │  • "and" precedes the last two digits only if something came before     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nine digits is the whole range: [`words_of`] refuses anything from one
//! hundred crore (10^9) upward with [`CoreError::AmountOutOfRange`].

use crate::error::{CoreError, CoreResult};
use crate::money::Rupees;
use crate::{CURRENCY_SUFFIX, MAX_WORDS_AMOUNT};

const ONES: [&str; 20] = [
    "",
    "One",
    "Two",
    "Three",
    "Four",
    "Five",
    "Six",
    "Seven",
    "Eight",
    "Nine",
    "Ten",
    "Eleven",
    "Twelve",
    "Thirteen",
    "Fourteen",
    "Fifteen",
    "Sixteen",
    "Seventeen",
    "Eighteen",
    "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

/// Spells a two-digit group, `None` when the group is zero.
fn two_digits(n: u64) -> Option<String> {
    debug_assert!(n < 100);
    match n {
        0 => None,
        1..=19 => Some(ONES[n as usize].to_string()),
        _ => {
            let tens = TENS[(n / 10) as usize];
            match n % 10 {
                0 => Some(tens.to_string()),
                ones => Some(format!("{} {}", tens, ONES[ones as usize])),
            }
        }
    }
}

/// Spells `n` in words using crore / lakh / thousand / hundred grouping.
///
/// ## Example
/// ```rust
/// use quote_core::words::words_of;
///
/// assert_eq!(words_of(0).unwrap(), "Zero");
/// assert_eq!(words_of(100000).unwrap(), "One Lakh");
/// assert_eq!(words_of(374).unwrap(), "Three Hundred and Seventy Four");
/// assert!(words_of(1_000_000_000).is_err());
/// ```
///
/// ## Errors
/// [`CoreError::AmountOutOfRange`] when `n` needs more than nine digits.
pub fn words_of(n: u64) -> CoreResult<String> {
    if n > MAX_WORDS_AMOUNT {
        return Err(CoreError::AmountOutOfRange {
            value: n,
            max: MAX_WORDS_AMOUNT,
        });
    }

    if n == 0 {
        return Ok("Zero".to_string());
    }

    let groups = [
        (n / 10_000_000, "Crore"),
        ((n / 100_000) % 100, "Lakh"),
        ((n / 1_000) % 100, "Thousand"),
    ];
    let hundreds = (n / 100) % 10;
    let rest = n % 100;

    let mut parts: Vec<String> = groups
        .iter()
        .filter_map(|&(value, unit)| two_digits(value).map(|w| format!("{} {}", w, unit)))
        .collect();

    if hundreds != 0 {
        parts.push(format!("{} Hundred", ONES[hundreds as usize]));
    }

    if let Some(w) = two_digits(rest) {
        if parts.is_empty() {
            parts.push(w);
        } else {
            parts.push(format!("and {}", w));
        }
    }

    Ok(parts.join(" "))
}

/// Spells a grand total for the document: floor, words, "Rupees Only".
///
/// Never fails. Negative totals (a discount above 100%) are prefixed with
/// "Minus". Totals past the formatter's range fall back to their digits.
///
/// ```rust
/// use quote_core::money::Rupees;
/// use quote_core::words::rupees_in_words;
///
/// assert_eq!(rupees_in_words(Rupees::new(374.355)), "Three Hundred and Seventy Four Rupees Only");
/// assert_eq!(rupees_in_words(Rupees::new(1e9)), "1000000000 Rupees Only");
/// ```
pub fn rupees_in_words(amount: Rupees) -> String {
    let whole = amount.floor_whole();

    let spelled = if whole < 0.0 {
        format!("Minus {}", spell_whole(-whole))
    } else {
        spell_whole(whole)
    };

    format!("{} {}", spelled, CURRENCY_SUFFIX)
}

/// `whole` is a non-negative integral value.
fn spell_whole(whole: f64) -> String {
    // `as` saturates, so anything huge lands past the range and falls back.
    words_of(whole as u64).unwrap_or_else(|_| format!("{:.0}", whole))
}

// =============================================================================
// Unit Tests
// =============================================================================
