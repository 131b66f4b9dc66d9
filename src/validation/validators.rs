//! Reusable field validators
//!
//! Each validator is a closure over a candidate input string. Validators
//! other than [`required`] let empty values through: whether a field may be
//! empty is decided by the required rule, not by format checks.

use std::sync::OnceLock;

use regex::Regex;

fn alphanumeric_regex() -> &'static Regex {
    static ALPHANUMERIC: OnceLock<Regex> = OnceLock::new();
    ALPHANUMERIC.get_or_init(|| Regex::new(r"^[a-zA-Z0-9]+$").unwrap())
}

fn phone_charset_regex() -> &'static Regex {
    static PHONE_CHARSET: OnceLock<Regex> = OnceLock::new();
    // Digits plus the separators people actually type in phone numbers
    PHONE_CHARSET.get_or_init(|| Regex::new(r"^[0-9+\-() ]+$").unwrap())
}

/// Validator: value must be non-empty after trimming.
pub fn required() -> impl Fn(&str) -> Result<(), String> + Send + Sync + Clone {
    |value: &str| {
        if value.trim().is_empty() {
            Err("Este campo es obligatorio".to_string())
        } else {
            Ok(())
        }
    }
}

/// Validator: value must contain only ASCII letters and digits.
pub fn alphanumeric() -> impl Fn(&str) -> Result<(), String> + Send + Sync + Clone {
    |value: &str| {
        if !value.is_empty() && !alphanumeric_regex().is_match(value) {
            Err("Debe ser alfanumérico (sin espacios ni símbolos)".to_string())
        } else {
            Ok(())
        }
    }
}

/// Validator: value must look like a phone number (digits, `+`, `-`,
/// parentheses and spaces). `label` names the field in the message.
pub fn phone_charset(
    label: &'static str,
) -> impl Fn(&str) -> Result<(), String> + Send + Sync + Clone {
    move |value: &str| {
        if !value.is_empty() && !phone_charset_regex().is_match(value) {
            Err(format!("Caracteres inválidos en {}", label))
        } else {
            Ok(())
        }
    }
}

/// Validator: value must not exceed `max` characters.
pub fn max_length(max: usize) -> impl Fn(&str) -> Result<(), String> + Send + Sync + Clone {
    move |value: &str| {
        if value.chars().count() > max {
            Err(format!("Máximo {} caracteres", max))
        } else {
            Ok(())
        }
    }
}
