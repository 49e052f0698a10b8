use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::design::GarmentCategory;
use crate::constants::{FREE_SHIPPING_THRESHOLD, SHIPPING_FEE, TAX_RATE};

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: String,
    pub category: GarmentCategory,
    pub color: String,
    pub material: String,
    pub pattern: String,
    pub price: f64,
    pub quantity: u32,
    /// Set when the line came from a saved design.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, example = "2024-06-01T12:34:56Z")]
    pub created_at: Option<DateTime<Utc>>,
}

impl CartItem {
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// A line item before the cart assigns it an id.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct NewCartItem {
    pub category: GarmentCategory,
    pub color: String,
    pub material: String,
    pub pattern: String,
    pub price: f64,
    pub quantity: u32,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct Pricing {
    pub shipping_fee: f64,
    /// Orders strictly above this subtotal ship for free.
    pub free_shipping_threshold: f64,
    pub tax_rate: f64,
}

impl Default for Pricing {
    fn default() -> Self {
        Pricing {
            shipping_fee: SHIPPING_FEE,
            free_shipping_threshold: FREE_SHIPPING_THRESHOLD,
            tax_rate: TAX_RATE,
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CartTotals {
    pub subtotal: f64,
    pub shipping: f64,
    pub tax: f64,
    pub total: f64,
}

impl CartTotals {
    pub fn compute(items: &[CartItem], pricing: &Pricing) -> Self {
        let subtotal: f64 = items.iter().map(CartItem::line_total).sum();
        let shipping = if subtotal > pricing.free_shipping_threshold {
            0.0
        } else {
            pricing.shipping_fee
        };
        let tax = subtotal * pricing.tax_rate;
        CartTotals {
            subtotal,
            shipping,
            tax,
            total: subtotal + shipping + tax,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(price: f64, quantity: u32) -> CartItem {
        CartItem {
            id: format!("{}x{}", price, quantity),
            category: GarmentCategory::Shirts,
            color: "#8B5CF6".to_string(),
            material: "cotton".to_string(),
            pattern: "solid".to_string(),
            price,
            quantity,
            created_at: None,
        }
    }

    #[test]
    fn empty_cart_still_pays_flat_shipping() {
        let totals = CartTotals::compute(&[], &Pricing::default());
        assert_eq!(totals.subtotal, 0.0);
        assert_eq!(totals.shipping, 15.0);
        assert_eq!(totals.tax, 0.0);
        assert_eq!(totals.total, 15.0);
    }

    #[test]
    fn exactly_one_hundred_is_not_free_shipping() {
        let totals = CartTotals::compute(&[item(50.0, 2)], &Pricing::default());
        assert_eq!(totals.subtotal, 100.0);
        assert_eq!(totals.shipping, 15.0);
        assert_eq!(totals.tax, 8.0);
        assert_eq!(totals.total, 123.0);
    }

    #[test]
    fn above_threshold_ships_free() {
        let totals = CartTotals::compute(&[item(99.99, 1), item(10.0, 3)], &Pricing::default());
        assert!((totals.subtotal - 129.99).abs() < 1e-9);
        assert_eq!(totals.shipping, 0.0);
        assert_eq!(totals.tax, totals.subtotal * 0.08);
        assert_eq!(totals.total, totals.subtotal + totals.shipping + totals.tax);
    }

    #[test]
    fn created_at_is_omitted_when_absent() {
        let json = serde_json::to_value(item(1.0, 1)).unwrap();
        assert!(json.get("createdAt").is_none());
        assert_eq!(json["category"], "shirts");
    }
}
