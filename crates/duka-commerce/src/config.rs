//! Store settings.

use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Subtotal at or above which delivery is free.
pub const FREE_DELIVERY_THRESHOLD: Money = Money::new(5_000);

/// Flat delivery fee charged below the free-delivery threshold.
pub const FLAT_DELIVERY_FEE: Money = Money::new(200);

/// VAT rate applied for display purposes.
pub const DEFAULT_VAT_RATE_PERCENT: f64 = 16.0;

/// Delivery pricing rule: a flat fee waived above a subtotal threshold.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeliveryPolicy {
    /// Subtotal at or above which delivery is free.
    #[serde(default = "default_free_threshold")]
    pub free_threshold: Money,
    /// Flat fee charged below the threshold.
    #[serde(default = "default_flat_fee")]
    pub flat_fee: Money,
}

fn default_free_threshold() -> Money {
    FREE_DELIVERY_THRESHOLD
}

fn default_flat_fee() -> Money {
    FLAT_DELIVERY_FEE
}

impl Default for DeliveryPolicy {
    fn default() -> Self {
        Self {
            free_threshold: FREE_DELIVERY_THRESHOLD,
            flat_fee: FLAT_DELIVERY_FEE,
        }
    }
}

impl DeliveryPolicy {
    /// Fee charged for a given cart subtotal. An empty order ships nothing,
    /// so a zero subtotal carries no fee.
    pub fn fee_for(&self, subtotal: Money) -> Money {
        if subtotal.is_zero() || subtotal >= self.free_threshold {
            Money::zero()
        } else {
            self.flat_fee
        }
    }
}

/// Store-wide settings, loadable from configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoreSettings {
    /// Display name of the store.
    #[serde(default = "default_store_name")]
    pub store_name: String,
    /// Delivery pricing rule.
    #[serde(default)]
    pub delivery: DeliveryPolicy,
    /// VAT rate shown on receipts (not part of the cart total).
    #[serde(default = "default_vat_rate")]
    pub vat_rate_percent: f64,
}

fn default_store_name() -> String {
    "Autoduka".to_string()
}

fn default_vat_rate() -> f64 {
    DEFAULT_VAT_RATE_PERCENT
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            store_name: default_store_name(),
            delivery: DeliveryPolicy::default(),
            vat_rate_percent: DEFAULT_VAT_RATE_PERCENT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_matches_store_rules() {
        let policy = DeliveryPolicy::default();
        assert_eq!(policy.free_threshold, Money::new(5_000));
        assert_eq!(policy.flat_fee, Money::new(200));
    }

    #[test]
    fn test_fee_boundaries() {
        let policy = DeliveryPolicy::default();
        assert_eq!(policy.fee_for(Money::new(5_000)), Money::zero());
        assert_eq!(policy.fee_for(Money::new(4_999)), Money::new(200));
        assert_eq!(policy.fee_for(Money::zero()), Money::zero());
    }

    #[test]
    fn test_settings_deserialize_with_defaults() {
        let settings: StoreSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings.store_name, "Autoduka");
        assert_eq!(settings.delivery, DeliveryPolicy::default());
        assert!((settings.vat_rate_percent - 16.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_settings_deserialize_overrides() {
        let settings: StoreSettings = serde_json::from_str(
            r#"{"store_name":"Gears","delivery":{"free_threshold":10000,"flat_fee":350}}"#,
        )
        .unwrap();
        assert_eq!(settings.store_name, "Gears");
        assert_eq!(settings.delivery.free_threshold, Money::new(10_000));
        assert_eq!(settings.delivery.flat_fee, Money::new(350));
    }
}
