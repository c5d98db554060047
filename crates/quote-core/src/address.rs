//! # Shipping Address
//!
//! The client record stores the shipping address as one comma-separated
//! string: `"12 MG Road, Bengaluru, Karnataka, 560001"`. The quotation edits
//! it as four separate parts.

use serde::{Deserialize, Serialize};

/// "Ship To" block of a quotation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub postal_code: String,
}

impl ShippingAddress {
    /// Splits the stored field value into its parts.
    ///
    /// Empty segments are dropped before positions are assigned, so
    /// `"12 MG Road,, Pune"` yields city `"Pune"`. Missing parts stay empty.
    ///
    /// ```rust
    /// use quote_core::address::ShippingAddress;
    ///
    /// let addr = ShippingAddress::parse("12 MG Road, Bengaluru, Karnataka, 560001");
    /// assert_eq!(addr.city, "Bengaluru");
    /// assert_eq!(addr.postal_code, "560001");
    /// ```
    pub fn parse(stored: &str) -> Self {
        let mut parts = stored
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string);

        ShippingAddress {
            address: parts.next().unwrap_or_default(),
            city: parts.next().unwrap_or_default(),
            state: parts.next().unwrap_or_default(),
            postal_code: parts.next().unwrap_or_default(),
        }
    }

    /// Joins the non-empty parts back into the stored field value.
    pub fn to_field_value(&self) -> String {
        [&self.address, &self.city, &self.state, &self.postal_code]
            .iter()
            .map(|p| p.trim())
            .filter(|p| !p.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// True when every part is blank.
    pub fn is_empty(&self) -> bool {
        self.to_field_value().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_address() {
        let addr = ShippingAddress::parse(" 45 MG Road , Bengaluru,KA , 560001 ");
        assert_eq!(addr.address, "45 MG Road");
        assert_eq!(addr.city, "Bengaluru");
        assert_eq!(addr.state, "KA");
        assert_eq!(addr.postal_code, "560001");
    }

    #[test]
    fn test_parse_partial_and_empty() {
        let addr = ShippingAddress::parse("88 Park Street,, Kolkata");
        assert_eq!(addr.city, "Kolkata");
        assert_eq!(addr.state, "");

        assert_eq!(ShippingAddress::parse(""), ShippingAddress::default());
        assert!(ShippingAddress::parse(" , ,").is_empty());
    }

    #[test]
    fn test_field_value_skips_blank_parts() {
        let addr = ShippingAddress {
            address: " 12 Main St ".to_string(),
            city: String::new(),
            state: "MH".to_string(),
            postal_code: "  ".to_string(),
        };
        assert_eq!(addr.to_field_value(), "12 Main St, MH");
    }

    #[test]
    fn test_parse_then_join_normalizes_spacing() {
        let stored = "1 A Road,B City ,  C State,400001";
        assert_eq!(
            ShippingAddress::parse(stored).to_field_value(),
            "1 A Road, B City, C State, 400001"
        );
    }
}
