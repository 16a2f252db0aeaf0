//! Kenyan mobile number handling.

use crate::error::PaymentError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

// Accepts 07XX XXX XXX, 01XX XXX XXX, 254XXXXXXXXX and +254XXXXXXXXX.
static KENYAN_PHONE: OnceLock<Regex> = OnceLock::new();

fn kenyan_phone() -> &'static Regex {
    KENYAN_PHONE.get_or_init(|| {
        Regex::new(r"^(?:254|\+254|0)?([71])[0-9]{8}$").expect("valid regex")
    })
}

/// A Kenyan mobile number in canonical M-PESA form (`254XXXXXXXXX`).
///
/// Only [`PhoneNumber::parse`] constructs values, so holding one means the
/// number already passed validation and normalization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Parse and normalize a customer-entered phone number.
    ///
    /// Spaces and dashes are stripped; `07../01..`, `254..` and `+254..`
    /// forms all normalize to `254XXXXXXXXX`.
    pub fn parse(input: &str) -> Result<Self, PaymentError> {
        let cleaned: String = input
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-')
            .collect();

        if !kenyan_phone().is_match(&cleaned) {
            return Err(PaymentError::InvalidPhone(input.to_string()));
        }

        let normalized = if let Some(rest) = cleaned.strip_prefix('+') {
            rest.to_string()
        } else if let Some(rest) = cleaned.strip_prefix('0') {
            format!("254{rest}")
        } else if cleaned.starts_with("254") {
            cleaned
        } else {
            format!("254{cleaned}")
        };

        Ok(Self(normalized))
    }

    /// Get the canonical form as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_common_forms() {
        for input in [
            "0712345678",
            "0712 345 678",
            "0712-345-678",
            "254712345678",
            "+254712345678",
            "712345678",
            "0112345678",
        ] {
            let phone = PhoneNumber::parse(input).unwrap();
            assert!(
                phone.as_str() == "254712345678" || phone.as_str() == "254112345678",
                "unexpected normalization of {input}: {phone}"
            );
        }
    }

    #[test]
    fn test_normalizes_to_mpesa_form() {
        assert_eq!(
            PhoneNumber::parse("0712 345 678").unwrap().as_str(),
            "254712345678"
        );
        assert_eq!(
            PhoneNumber::parse("+254712345678").unwrap().as_str(),
            "254712345678"
        );
    }

    #[test]
    fn test_rejects_invalid_input() {
        for input in ["", "0812345678", "07123", "not-a-number", "07123456789"] {
            assert!(
                matches!(PhoneNumber::parse(input), Err(PaymentError::InvalidPhone(_))),
                "accepted {input:?}"
            );
        }
    }
}
