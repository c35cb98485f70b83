use super::default_limit;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

/// Prices are strictly positive and carry at most two decimal places.
pub fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    if price.is_sign_negative() || price.is_zero() {
        return Err(ValidationError::new("price").with_message("Price must be greater than 0".into()));
    }

    if price.normalize().scale() > 2 {
        return Err(ValidationError::new("price")
            .with_message("Price must have at most 2 decimal places".into()));
    }

    Ok(())
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FindAllProducts {
    #[serde(default)]
    #[validate(range(min = 0, message = "skip must not be negative"))]
    pub skip: i64,

    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 1000, message = "limit must be between 1 and 1000"))]
    pub limit: i64,

    pub category: Option<String>,

    #[serde(default = "default_active_only")]
    pub active_only: bool,
}

fn default_active_only() -> bool {
    true
}

impl Default for FindAllProducts {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: default_limit(),
            category: None,
            active_only: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Espresso")]
    pub name: String,

    #[validate(custom(function = "validate_price"))]
    #[schema(value_type = String, example = "2.50")]
    pub price: Decimal,

    #[validate(length(min = 1, message = "Category is required"))]
    #[schema(example = "coffee")]
    pub category: String,

    pub description: Option<String>,

    #[serde(default)]
    #[validate(range(min = 0, message = "Stock must not be negative"))]
    #[schema(example = 100)]
    pub stock: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProductRequest {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: Option<String>,

    #[validate(custom(function = "validate_price"))]
    #[schema(value_type = Option<String>)]
    pub price: Option<Decimal>,

    #[validate(length(min = 1, message = "Category must not be empty"))]
    pub category: Option<String>,

    pub description: Option<String>,

    #[validate(range(min = 0, message = "Stock must not be negative"))]
    pub stock: Option<i32>,

    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateStockRequest {
    #[validate(range(min = 0, message = "Stock must not be negative"))]
    pub stock: i32,
}
