//! Payload validation for create and full-replace update.

use crate::error::AppError;
use crate::model::{NewProduct, ProductPayload};
use serde_json::Value;

/// Width of the `name` and `image_url` columns.
pub const MAX_TEXT_LEN: usize = 255;

/// Largest value the `NUMERIC(10, 2)` price column holds.
pub const MAX_PRICE: f64 = 99_999_999.99;
const MAX_PRICE_CENTS: f64 = 9_999_999_999.0;

pub struct RequestValidator;

impl RequestValidator {
    /// Decode a JSON body into a payload. Anything that is not an object with
    /// correctly typed fields is a bad request.
    pub fn parse(body: Value) -> Result<ProductPayload, AppError> {
        if !body.is_object() {
            return Err(AppError::BadRequest("body must be a JSON object".into()));
        }
        serde_json::from_value(body).map_err(|e| AppError::BadRequest(e.to_string()))
    }

    /// Name and price are required; price must be a non-negative number.
    pub fn validate(payload: ProductPayload) -> Result<NewProduct, AppError> {
        let name = match payload.name {
            Some(n) if !n.trim().is_empty() => n,
            _ => return Err(AppError::Validation("name and price are required".into())),
        };
        let Some(price) = payload.price else {
            return Err(AppError::Validation("name and price are required".into()));
        };
        if !price.is_finite() || price < 0.0 {
            return Err(AppError::Validation("price must be a non-negative number".into()));
        }
        // Compare in cents: the column rounds to two places before checking precision.
        if (price * 100.0).round() > MAX_PRICE_CENTS {
            return Err(AppError::Validation(format!("price must be at most {:.2}", MAX_PRICE)));
        }
        if name.chars().count() > MAX_TEXT_LEN {
            return Err(AppError::Validation(format!(
                "name must be at most {} characters",
                MAX_TEXT_LEN
            )));
        }
        if let Some(url) = &payload.image_url {
            if url.chars().count() > MAX_TEXT_LEN {
                return Err(AppError::Validation(format!(
                    "image_url must be at most {} characters",
                    MAX_TEXT_LEN
                )));
            }
        }
        Ok(NewProduct {
            name,
            price,
            image_url: payload.image_url,
        })
    }

    pub fn parse_and_validate(body: Value) -> Result<NewProduct, AppError> {
        Self::validate(Self::parse(body)?)
    }
}
