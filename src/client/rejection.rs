//! Extraction of user-facing messages from rejected requests
//!
//! The backend forwards database errors more or less verbatim, so rejection
//! bodies range from clean `{"message": "..."}` payloads to raw PostgreSQL
//! diagnostics with a `CONTEXT:` tail. These helpers reduce all of that to a
//! single line the modal can show.

use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;

/// Marker after which database diagnostics follow in forwarded errors.
const CONTEXT_MARKER: &str = "CONTEXT:";

/// Substrings that identify a duplicate-key rejection, in either language
/// the backend has been seen answering in.
const DUPLICATE_MARKERS: [&str; 2] = ["ya existe", "already exists"];

fn id_in_message_regex() -> &'static Regex {
    static ID_IN_MESSAGE: OnceLock<Regex> = OnceLock::new();
    ID_IN_MESSAGE.get_or_init(|| Regex::new(r"(?i)ID\s+(\w+)").unwrap())
}

/// Pull the raw message out of an error body: the first of `message`,
/// `error` or `detail`, with any `CONTEXT:` diagnostics stripped. Returns an
/// empty string when the body carries none of the three.
fn raw_message(body: Option<&Value>) -> String {
    let Some(body) = body else {
        return String::new();
    };
    let raw = ["message", "error", "detail"]
        .iter()
        .find_map(|key| {
            body.get(key)
                .and_then(Value::as_str)
                .filter(|s| !s.trim().is_empty())
        })
        .unwrap_or("");
    match raw.split_once(CONTEXT_MARKER) {
        Some((before, _)) => before.trim().to_string(),
        None => raw.trim().to_string(),
    }
}

fn is_duplicate(status: u16, raw: &str) -> bool {
    status == 409 || DUPLICATE_MARKERS.iter().any(|marker| raw.contains(marker))
}

/// The duplicate-key message, naming the offending ID. The ID is taken from
/// the server message when present, otherwise from the submitted draft.
fn duplicate_message(raw: &str, submitted_id: &str) -> String {
    let id = id_in_message_regex()
        .captures(raw)
        .map(|captures| captures[1].to_string())
        .unwrap_or_else(|| submitted_id.to_string());
    format!("El ID \"{}\" ya existe. Por favor elige otro ID.", id)
}

/// Message for a rejected create.
///
/// Duplicate-key conditions (HTTP 409, or a body mentioning an existing ID)
/// get the dedicated message; any other non-empty server message is shown
/// verbatim; otherwise the fallback names the status.
pub(crate) fn create_rejection(status: u16, body: Option<&Value>, submitted_id: &str) -> String {
    let raw = raw_message(body);
    if is_duplicate(status, &raw) {
        return duplicate_message(&raw, submitted_id);
    }
    if !raw.is_empty() {
        return raw;
    }
    format!("Error al crear el cliente (HTTP {})", status)
}

/// Message for a rejected update. Same extraction as create, without the
/// duplicate-key special case.
pub(crate) fn update_rejection(status: u16, body: Option<&Value>) -> String {
    let raw = raw_message(body);
    if !raw.is_empty() {
        return raw;
    }
    format!("Error al actualizar el cliente (HTTP {})", status)
}

/// Message for a rejected delete.
pub(crate) fn delete_rejection(status: u16, body: Option<&Value>) -> String {
    let raw = raw_message(body);
    if !raw.is_empty() {
        return raw;
    }
    format!("Error al eliminar el cliente (HTTP {})", status)
}
