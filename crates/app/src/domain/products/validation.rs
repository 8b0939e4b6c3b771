//! Product field validation.
//!
//! Each rule is a pure function of a single field value. [`ProductDraft::validate`]
//! runs every rule and collects the failures per field rather than stopping at
//! the first one.

use std::{
    collections::BTreeMap,
    fmt::{Display, Formatter, Result as FmtResult},
};

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::products::data::{ProductDraft, ProductFields};

pub const NAME_MAX_LENGTH: usize = 255;
pub const SKU_MAX_LENGTH: usize = 100;
pub const TEXT_MAX_LENGTH: usize = 255;

const REQUIRED_MESSAGE: &str = "This field is required.";
const BLANK_MESSAGE: &str = "This field may not be blank.";

/// Field name to validation messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, Vec<String>>);

impl ValidationErrors {
    /// Errors consisting of a single message for one field.
    #[must_use]
    pub fn single(field: &str, message: impl Into<String>) -> Self {
        let mut errors = Self::default();
        errors.add(field, message);
        errors
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Record the error from `result` against `field`, passing any value through.
    fn check<T>(&mut self, field: &str, result: Result<T, String>) -> Option<T> {
        result.map_err(|message| self.add(field, message)).ok()
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let mut first = true;

        for (field, messages) in &self.0 {
            for message in messages {
                if !first {
                    f.write_str("; ")?;
                }

                write!(f, "{field}: {message}")?;
                first = false;
            }
        }

        Ok(())
    }
}

/// Name must be non-empty after trimming.
///
/// # Errors
///
/// Returns the validation message on failure.
pub fn validate_name(value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err("Name cannot be blank.".to_string());
    }

    validate_max_length(value, NAME_MAX_LENGTH)
}

/// SKU must be non-empty after trimming. Uniqueness is enforced by the store.
///
/// # Errors
///
/// Returns the validation message on failure.
pub fn validate_sku(value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err("SKU cannot be blank.".to_string());
    }

    validate_max_length(value, SKU_MAX_LENGTH)
}

/// # Errors
///
/// Returns the validation message when `value` is negative.
pub fn validate_price(value: i64) -> Result<u64, String> {
    non_negative("Price", value)
}

/// # Errors
///
/// Returns the validation message when `value` is negative.
pub fn validate_discount(value: i64) -> Result<u64, String> {
    non_negative("Discount", value)
}

/// # Errors
///
/// Returns the validation message when `value` is negative.
pub fn validate_stock(value: i64) -> Result<u64, String> {
    non_negative("Stock", value)
}

/// # Errors
///
/// Returns the validation message when `value` is empty after trimming.
pub fn validate_not_blank(value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(BLANK_MESSAGE.to_string());
    }

    Ok(())
}

/// Picture must be a non-blank, absolute http(s) URL.
///
/// # Errors
///
/// Returns the validation message on failure.
pub fn validate_picture(value: &str) -> Result<(), String> {
    validate_not_blank(value)?;

    match Url::parse(value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => Ok(()),
        Ok(_) | Err(_) => Err("Enter a valid URL.".to_string()),
    }
}

/// # Errors
///
/// Returns the validation message when `value` exceeds `max` characters.
pub fn validate_max_length(value: &str, max: usize) -> Result<(), String> {
    if value.chars().count() > max {
        return Err(format!("Ensure this field has no more than {max} characters."));
    }

    Ok(())
}

fn validate_short_text(value: &str) -> Result<(), String> {
    validate_not_blank(value)?;
    validate_max_length(value, TEXT_MAX_LENGTH)
}

fn non_negative(label: &str, value: i64) -> Result<u64, String> {
    u64::try_from(value).map_err(|_negative| format!("{label} must be a positive integer."))
}

fn required<T>(value: Option<T>) -> Result<T, String> {
    value.ok_or_else(|| REQUIRED_MESSAGE.to_string())
}

fn text(value: Option<String>) -> Result<String, String> {
    required(value).map(|value| value.trim().to_string())
}

fn checked(
    value: Option<String>,
    rule: impl FnOnce(&str) -> Result<(), String>,
) -> Result<String, String> {
    let value = text(value)?;
    rule(&value)?;
    Ok(value)
}

impl ProductDraft {
    /// Validate every field, returning the typed fields or all failures.
    ///
    /// Text values are trimmed. `discount` defaults to zero and
    /// `is_available` to `true` when absent.
    ///
    /// # Errors
    ///
    /// Returns the collected per-field messages when any rule fails.
    pub fn validate(self) -> Result<ProductFields, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let name = errors.check("name", checked(self.name, validate_name));
        let sku = errors.check("sku", checked(self.sku, validate_sku));
        let description = errors.check(
            "description",
            checked(self.description, validate_not_blank),
        );
        let shop = errors.check("shop", checked(self.shop, validate_short_text));
        let location = errors.check(
            "location",
            checked(self.location, validate_short_text),
        );
        let price = errors.check("price", required(self.price).and_then(validate_price));
        let discount = errors.check("discount", validate_discount(self.discount.unwrap_or(0)));
        let category = errors.check(
            "category",
            checked(self.category, validate_short_text),
        );
        let stock = errors.check("stock", required(self.stock).and_then(validate_stock));
        let picture = errors.check("picture", checked(self.picture, validate_picture));

        let (
            Some(name),
            Some(sku),
            Some(description),
            Some(shop),
            Some(location),
            Some(price),
            Some(discount),
            Some(category),
            Some(stock),
            Some(picture),
        ) = (
            name,
            sku,
            description,
            shop,
            location,
            price,
            discount,
            category,
            stock,
            picture,
        )
        else {
            return Err(errors);
        };

        Ok(ProductFields {
            name,
            sku,
            description,
            shop,
            location,
            price,
            discount,
            category,
            stock,
            is_available: self.is_available.unwrap_or(true),
            picture,
        })
    }
}
