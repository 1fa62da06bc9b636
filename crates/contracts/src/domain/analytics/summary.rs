use serde::{Deserialize, Serialize};

/// Precomputed analytics payload served by the store.
///
/// Rendered as received; nothing here is derived client-side, and every
/// field falls back to zero/empty when the store omits it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalyticsSummary {
    pub total_revenue: f64,
    pub total_orders: u64,
    pub monthly_sales: Vec<MonthlySales>,
    pub top_categories: Vec<CategoryShare>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonthlySales {
    pub month: String,
    pub sales: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryShare {
    pub category: String,
    /// Share of total revenue, 0 to 100.
    pub percentage: f64,
}

impl CategoryShare {
    /// Absolute revenue attributed to this category. Rounding to two
    /// decimals happens at display time only.
    pub fn revenue_share(&self, total_revenue: f64) -> f64 {
        total_revenue * self.percentage / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_fields_default_to_zero_and_empty() {
        let summary: AnalyticsSummary = serde_json::from_str("{}").expect("empty payload");
        assert_eq!(summary.total_revenue, 0.0);
        assert_eq!(summary.total_orders, 0);
        assert!(summary.monthly_sales.is_empty());
        assert!(summary.top_categories.is_empty());
    }

    #[test]
    fn revenue_share_is_percentage_of_total() {
        let share = CategoryShare {
            category: "Electronics".into(),
            percentage: 35.0,
        };
        assert_eq!(share.revenue_share(124_500.0), 43_575.0);
    }

    #[test]
    fn payload_uses_camel_case_names() {
        let summary: AnalyticsSummary = serde_json::from_str(
            r#"{
                "totalRevenue": 1000.0,
                "totalOrders": 12,
                "monthlySales": [{"month": "Jan", "sales": 400.0}],
                "topCategories": [{"category": "Books", "percentage": 20.0}]
            }"#,
        )
        .expect("analytics payload");
        assert_eq!(summary.total_revenue, 1000.0);
        assert_eq!(summary.monthly_sales[0].month, "Jan");
        assert_eq!(summary.top_categories[0].revenue_share(summary.total_revenue), 200.0);
    }
}
