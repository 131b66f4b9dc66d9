//! Customer field validation
//!
//! Rules run in a fixed order per field: required check, field-specific
//! format checks, then the schema length limit. The first failing rule wins;
//! a `None` result means the value is acceptable.

pub mod validators;

use std::collections::BTreeMap;

use crate::core::CustomerField;

/// Validate a single field value. Returns the message of the first failing
/// rule, or `None` when the value is valid.
///
/// Pure function of its inputs; no cross-field rules exist, so the rest of
/// the draft is not consulted.
pub fn validate_field(field: CustomerField, value: &str) -> Option<String> {
    if field.is_required() {
        if let Err(message) = validators::required()(value) {
            return Some(message);
        }
    }

    if field == CustomerField::CustomerId {
        if let Err(message) = validators::alphanumeric()(value) {
            return Some(message);
        }
        if let Err(message) = validators::max_length(5)(value) {
            return Some(message);
        }
    }

    if matches!(field, CustomerField::Phone | CustomerField::Fax) {
        let label = if field == CustomerField::Phone {
            "teléfono"
        } else {
            "fax"
        };
        if let Err(message) = validators::phone_charset(label)(value) {
            return Some(message);
        }
    }

    validators::max_length(field.max_len())(value).err()
}

/// Validate a whole draft. Fields absent from the map count as empty. Returns
/// the first failing message per field, in display order; empty when the
/// draft is clean.
pub fn validate_draft(values: &BTreeMap<CustomerField, String>) -> BTreeMap<CustomerField, String> {
    let mut errors = BTreeMap::new();
    for field in CustomerField::ALL {
        let value = values.get(&field).map(String::as_str).unwrap_or("");
        if let Some(message) = validate_field(field, value) {
            errors.insert(field, message);
        }
    }
    errors
}
