use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// ID Type
// ============================================================================

/// Product identifier as assigned by the store.
///
/// The store is free to hand out numeric or string ids, so both are accepted
/// on the wire and echoed back verbatim in resource URLs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    Number(u64),
    Text(String),
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductId::Number(n) => write!(f, "{}", n),
            ProductId::Text(s) => write!(f, "{}", s),
        }
    }
}

// ============================================================================
// Stock tier
// ============================================================================

/// Low/Medium/High stock classification driving the color-coded badges.
///
/// One boundary policy everywhere: below 20 is Low, 20..=99 is Medium,
/// 100 and up is High.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockTier {
    Low,
    Medium,
    High,
}

impl StockTier {
    pub fn classify(stock: u32) -> Self {
        if stock < 20 {
            StockTier::Low
        } else if stock < 100 {
            StockTier::Medium
        } else {
            StockTier::High
        }
    }

    /// CSS modifier for the stock badge.
    pub fn badge_class(&self) -> &'static str {
        match self {
            StockTier::Low => "badge--stock-low",
            StockTier::Medium => "badge--stock-medium",
            StockTier::High => "badge--stock-high",
        }
    }
}

// ============================================================================
// Product
// ============================================================================

/// A catalog item as stored by the remote product store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub stock: u32,
    /// Star rating in [1, 5]; absent is rendered as 0.
    #[serde(default)]
    pub rating: Option<f64>,
    /// Units sold, maintained server-side. Zeroed on creation.
    #[serde(default)]
    pub sales: u64,
    #[serde(default)]
    pub image: String,
    /// Stamped by the client at creation time, day precision.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDate>,
}

impl Product {
    pub fn stock_tier(&self) -> StockTier {
        StockTier::classify(self.stock)
    }

    pub fn rating_or_zero(&self) -> f64 {
        self.rating.unwrap_or(0.0)
    }
}

// ============================================================================
// ProductInput
// ============================================================================

/// The id-less product record sent as a POST/PUT body.
///
/// Updates are full-record replaces, so `sales` and `created_at` are carried
/// through rather than dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub stock: u32,
    pub rating: f64,
    pub sales: u64,
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_boundaries() {
        assert_eq!(StockTier::classify(0), StockTier::Low);
        assert_eq!(StockTier::classify(19), StockTier::Low);
        assert_eq!(StockTier::classify(20), StockTier::Medium);
        assert_eq!(StockTier::classify(99), StockTier::Medium);
        assert_eq!(StockTier::classify(100), StockTier::High);
        assert_eq!(StockTier::classify(150), StockTier::High);
    }

    #[test]
    fn sparse_record_deserializes_with_defaults() {
        let p: Product =
            serde_json::from_str(r#"{"id": 7, "name": "Desk Lamp"}"#).expect("sparse product");
        assert_eq!(p.id, ProductId::Number(7));
        assert_eq!(p.rating, None);
        assert_eq!(p.rating_or_zero(), 0.0);
        assert_eq!(p.sales, 0);
        assert_eq!(p.created_at, None);
        assert!(p.image.is_empty());
    }

    #[test]
    fn wire_names_are_camel_case() {
        let input = ProductInput {
            name: "Smartphone X".into(),
            description: "Flagship".into(),
            price: 699.0,
            category: "Electronics".into(),
            stock: 12,
            rating: 4.5,
            sales: 0,
            image: String::new(),
            created_at: NaiveDate::from_ymd_opt(2026, 8, 6),
        };
        let json = serde_json::to_value(&input).expect("serialize");
        assert_eq!(json["createdAt"], "2026-08-06");
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn string_ids_round_trip_in_urls() {
        let p: Product =
            serde_json::from_str(r#"{"id": "a1b2", "name": "Mug"}"#).expect("string id");
        assert_eq!(p.id.to_string(), "a1b2");
        assert_eq!(ProductId::Number(42).to_string(), "42");
    }
}
