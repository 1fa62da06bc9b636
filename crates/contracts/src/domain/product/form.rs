use super::aggregate::{Product, ProductInput};
use chrono::NaiveDate;
use std::fmt;

/// Fixed category list offered by the creation form. The filter dropdowns
/// are derived from the live collection instead (see `stats::category_options`).
pub const CURATED_CATEGORIES: [&str; 6] = [
    "Electronics",
    "Clothing",
    "Home & Kitchen",
    "Books",
    "Sports",
    "Beauty",
];

/// Raw form state, one string per input element.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductForm {
    pub name: String,
    pub description: String,
    pub price: String,
    pub category: String,
    pub stock: String,
    pub rating: String,
    pub image: String,
}

impl Default for ProductForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            price: String::new(),
            category: CURATED_CATEGORIES[0].to_string(),
            stock: String::new(),
            rating: String::new(),
            image: String::new(),
        }
    }
}

/// Why a submitted form was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    Missing(&'static str),
    InvalidNumber { field: &'static str, value: String },
    OutOfRange { field: &'static str, expected: &'static str },
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::Missing(field) => write!(f, "{} is required", field),
            FormError::InvalidNumber { field, value } => {
                write!(f, "invalid numeric field: {} ({:?})", field, value)
            }
            FormError::OutOfRange { field, expected } => {
                write!(f, "{} must be {}", field, expected)
            }
        }
    }
}

impl std::error::Error for FormError {}

/// Typed field values after successful coercion.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedForm {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub stock: u32,
    pub rating: f64,
    pub image: String,
}

impl ParsedForm {
    /// Record for `POST /products`: zero sales, creation date stamped by the
    /// client at day precision.
    pub fn into_new_product(self, today: NaiveDate) -> ProductInput {
        ProductInput {
            name: self.name,
            description: self.description,
            price: self.price,
            category: self.category,
            stock: self.stock,
            rating: self.rating,
            sales: 0,
            image: self.image,
            created_at: Some(today),
        }
    }

    /// Record for `PUT /products/{id}`: a full-record replace, so the
    /// server-maintained `sales` and the original creation date are carried
    /// over from the record being edited.
    pub fn into_update(self, existing: &Product) -> ProductInput {
        ProductInput {
            name: self.name,
            description: self.description,
            price: self.price,
            category: self.category,
            stock: self.stock,
            rating: self.rating,
            sales: existing.sales,
            image: self.image,
            created_at: existing.created_at,
        }
    }
}

fn parse_price(raw: &str) -> Result<f64, FormError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FormError::Missing("price"));
    }
    let value: f64 = trimmed.parse().map_err(|_| FormError::InvalidNumber {
        field: "price",
        value: trimmed.to_string(),
    })?;
    if !value.is_finite() || value < 0.0 {
        return Err(FormError::OutOfRange {
            field: "price",
            expected: "a non-negative amount",
        });
    }
    Ok(value)
}

fn parse_stock(raw: &str) -> Result<u32, FormError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FormError::Missing("stock"));
    }
    trimmed.parse().map_err(|_| FormError::InvalidNumber {
        field: "stock",
        value: trimmed.to_string(),
    })
}

fn parse_rating(raw: &str) -> Result<f64, FormError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FormError::Missing("rating"));
    }
    let value: f64 = trimmed.parse().map_err(|_| FormError::InvalidNumber {
        field: "rating",
        value: trimmed.to_string(),
    })?;
    if !value.is_finite() || !(1.0..=5.0).contains(&value) {
        return Err(FormError::OutOfRange {
            field: "rating",
            expected: "between 1 and 5",
        });
    }
    Ok(value)
}

impl ProductForm {
    /// Pre-fill the form from an existing record for editing.
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price.to_string(),
            category: product.category.clone(),
            stock: product.stock.to_string(),
            rating: product
                .rating
                .map(|r| r.to_string())
                .unwrap_or_default(),
            image: product.image.clone(),
        }
    }

    /// Coerce the string fields to their typed values.
    ///
    /// Presence and numeric validity are enforced here rather than left to
    /// the markup: a field that fails to parse is a typed error, never a
    /// silent zero or a NaN forwarded to the store.
    pub fn parse(&self) -> Result<ParsedForm, FormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(FormError::Missing("name"));
        }
        let description = self.description.trim();
        if description.is_empty() {
            return Err(FormError::Missing("description"));
        }
        let category = self.category.trim();
        if category.is_empty() {
            return Err(FormError::Missing("category"));
        }

        Ok(ParsedForm {
            name: name.to_string(),
            description: description.to_string(),
            price: parse_price(&self.price)?,
            category: category.to_string(),
            stock: parse_stock(&self.stock)?,
            rating: parse_rating(&self.rating)?,
            image: self.image.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::ProductId;

    fn filled_form() -> ProductForm {
        ProductForm {
            name: "Smartphone X".into(),
            description: "Flagship phone".into(),
            price: "19.99".into(),
            category: "Electronics".into(),
            stock: "30".into(),
            rating: "4.5".into(),
            image: "https://example.com/p.jpg".into(),
        }
    }

    #[test]
    fn create_coerces_and_stamps() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        let input = filled_form().parse().expect("valid form").into_new_product(today);
        assert_eq!(input.price, 19.99);
        assert_eq!(input.stock, 30);
        assert_eq!(input.rating, 4.5);
        assert_eq!(input.sales, 0);
        assert_eq!(input.created_at, Some(today));
    }

    #[test]
    fn update_preserves_server_fields() {
        let existing = Product {
            id: ProductId::Number(3),
            name: "Old".into(),
            description: "Old".into(),
            price: 5.0,
            category: "Books".into(),
            stock: 8,
            rating: Some(3.0),
            sales: 412,
            image: String::new(),
            created_at: NaiveDate::from_ymd_opt(2025, 1, 2),
        };
        let input = filled_form().parse().unwrap().into_update(&existing);
        assert_eq!(input.sales, 412);
        assert_eq!(input.created_at, existing.created_at);
        assert_eq!(input.price, 19.99);
    }

    #[test]
    fn rejects_non_numeric_input() {
        let mut form = filled_form();
        form.stock = "lots".into();
        assert_eq!(
            form.parse(),
            Err(FormError::InvalidNumber {
                field: "stock",
                value: "lots".into()
            })
        );
    }

    #[test]
    fn rejects_missing_required_fields() {
        let mut form = filled_form();
        form.name = "   ".into();
        assert_eq!(form.parse(), Err(FormError::Missing("name")));

        let mut form = filled_form();
        form.price = String::new();
        assert_eq!(form.parse(), Err(FormError::Missing("price")));
    }

    #[test]
    fn rejects_out_of_range_values() {
        let mut form = filled_form();
        form.rating = "5.5".into();
        assert!(matches!(
            form.parse(),
            Err(FormError::OutOfRange { field: "rating", .. })
        ));

        let mut form = filled_form();
        form.price = "-2".into();
        assert!(matches!(
            form.parse(),
            Err(FormError::OutOfRange { field: "price", .. })
        ));

        let mut form = filled_form();
        form.price = "NaN".into();
        assert!(matches!(
            form.parse(),
            Err(FormError::OutOfRange { field: "price", .. })
        ));
    }

    #[test]
    fn error_messages_name_the_field() {
        let err = FormError::InvalidNumber {
            field: "stock",
            value: "x".into(),
        };
        assert_eq!(err.to_string(), "invalid numeric field: stock (\"x\")");
    }

    #[test]
    fn from_product_round_trips_into_form() {
        let existing = Product {
            id: ProductId::Text("p9".into()),
            name: "Mug".into(),
            description: "Ceramic".into(),
            price: 12.5,
            category: "Home & Kitchen".into(),
            stock: 44,
            rating: None,
            sales: 9,
            image: String::new(),
            created_at: None,
        };
        let form = ProductForm::from_product(&existing);
        assert_eq!(form.price, "12.5");
        assert_eq!(form.rating, "");
        assert_eq!(form.category, "Home & Kitchen");
    }
}
