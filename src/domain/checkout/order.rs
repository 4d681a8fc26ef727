//! Order request validation.
//!
//! Turns an untrusted [`OrderCreationRequest`] into a [`ValidatedOrder`] or
//! the first [`ValidationError`] it violates. Checks run in a fixed order:
//! presence, amount, currency, contact, email.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use super::errors::ValidationError;

/// Smallest chargeable amount, in the smallest currency unit.
pub const MIN_ORDER_AMOUNT: i64 = 100;

/// Currencies the processor account is set up to settle.
pub const SUPPORTED_CURRENCIES: &[&str] = &["INR"];

/// Exact number of digits in a contact number.
pub const CONTACT_DIGITS: usize = 10;

static CONTACT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("contact pattern is valid"));

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_.-]+@([A-Za-z0-9_-]+\.)+[A-Za-z0-9_-]{2,4}$")
        .expect("email pattern is valid")
});

/// Raw order creation input, exactly as the client sent it.
///
/// `amount` stays a JSON value so that a string or fractional amount is
/// reported as a validation error instead of failing deserialization.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderCreationRequest {
    pub amount: Option<Value>,
    pub currency: Option<String>,
    pub user_id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub contact: Option<String>,
}

/// An order request that satisfied every rule. Strings are trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedOrder {
    pub amount: i64,
    pub currency: String,
    pub user_id: String,
    pub name: String,
    pub email: Option<String>,
    pub contact: Option<String>,
}

impl OrderCreationRequest {
    /// Validate and normalize the request.
    ///
    /// # Errors
    ///
    /// Returns the first rule the request violates.
    pub fn validate(&self) -> Result<ValidatedOrder, ValidationError> {
        let currency = present(&self.currency);
        let user_id = present(&self.user_id);
        let name = present(&self.name);
        let amount = self.amount.as_ref().filter(|v| amount_present(v));

        let mut missing = Vec::new();
        if amount.is_none() {
            missing.push("amount");
        }
        if currency.is_none() {
            missing.push("currency");
        }
        if user_id.is_none() {
            missing.push("userId");
        }
        if name.is_none() {
            missing.push("name");
        }

        let (Some(amount), Some(currency), Some(user_id), Some(name)) =
            (amount, currency, user_id, name)
        else {
            return Err(ValidationError::MissingFields(missing));
        };

        let amount = parse_amount(amount).ok_or(ValidationError::AmountNotInteger)?;
        if amount < MIN_ORDER_AMOUNT {
            return Err(ValidationError::AmountTooSmall {
                min: MIN_ORDER_AMOUNT,
            });
        }

        if !SUPPORTED_CURRENCIES.contains(&currency) {
            return Err(ValidationError::UnsupportedCurrency {
                currency: currency.to_string(),
                supported: SUPPORTED_CURRENCIES.join(", "),
            });
        }

        let contact = present(&self.contact);
        if let Some(contact) = contact {
            if !CONTACT_REGEX.is_match(contact) {
                return Err(ValidationError::InvalidContact);
            }
        }

        let email = present(&self.email);
        if let Some(email) = email {
            if !EMAIL_REGEX.is_match(email) {
                return Err(ValidationError::InvalidEmail);
            }
        }

        Ok(ValidatedOrder {
            amount,
            currency: currency.to_string(),
            user_id: user_id.to_string(),
            name: name.to_string(),
            email: email.map(str::to_string),
            contact: contact.map(str::to_string),
        })
    }
}

impl ValidatedOrder {
    /// Metadata attached to the processor order. Absent optionals become `""`.
    pub fn notes(&self) -> BTreeMap<String, String> {
        BTreeMap::from([
            ("userId".to_string(), self.user_id.clone()),
            ("name".to_string(), self.name.clone()),
            ("email".to_string(), self.email.clone().unwrap_or_default()),
            ("contact".to_string(), self.contact.clone().unwrap_or_default()),
        ])
    }
}

/// Trimmed value, or `None` when absent or blank.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn amount_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.trim().is_empty(),
        _ => true,
    }
}

/// Integer amount from a JSON number; `500.0` counts, `"500"` and `500.5` don't.
fn parse_amount(value: &Value) -> Option<i64> {
    let Value::Number(number) = value else {
        return None;
    };
    if let Some(amount) = number.as_i64() {
        return Some(amount);
    }
    number
        .as_f64()
        .filter(|f| f.is_finite() && f.fract() == 0.0)
        .filter(|f| *f >= i64::MIN as f64 && *f < i64::MAX as f64)
        .map(|f| f as i64)
}
