//! WASM bindings for rrule-text.
//!
//! Exposes RRULE description to JavaScript via `wasm-bindgen`. Results cross
//! the boundary as JSON strings of the form `{"text": ..., "approximate": ...}`.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p rrule-text-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/rrule-text-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/rrule_text_wasm.wasm
//! ```

use rrule_text::{Description, RuleDescriptor};
use serde::Serialize;
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTO for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct DescriptionDto<'a> {
    text: &'a str,
    approximate: bool,
}

impl<'a> From<&'a Description> for DescriptionDto<'a> {
    fn from(d: &'a Description) -> Self {
        Self {
            text: d.text(),
            approximate: d.is_approximate(),
        }
    }
}

fn to_json(description: &Description) -> Result<String, String> {
    serde_json::to_string(&DescriptionDto::from(description))
        .map_err(|e| format!("Serialization error: {}", e))
}

// ---------------------------------------------------------------------------
// Target-independent entry points
// ---------------------------------------------------------------------------

/// Describe an RRULE string, returning the JSON result.
///
/// Same as [`describe_rrule`] but reports errors as plain strings, so it can be
/// called outside a JavaScript host.
pub fn describe_rrule_json(rrule: &str, dtstart: &str, timezone: &str) -> Result<String, String> {
    let description =
        rrule_text::describe_rrule(rrule, dtstart, timezone).map_err(|e| e.to_string())?;
    to_json(&description)
}

/// Describe a JSON-encoded [`RuleDescriptor`], returning the JSON result.
pub fn describe_descriptor_json(descriptor: &str) -> Result<String, String> {
    let rule: RuleDescriptor = serde_json::from_str(descriptor)
        .map_err(|e| format!("Invalid descriptor JSON: {}", e))?;
    rrule_text::validate(&rule).map_err(|e| e.to_string())?;
    to_json(&rrule_text::describe(&rule))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Describe an RRULE string in English.
///
/// Returns a JSON string `{"text": "...", "approximate": bool}`.
///
/// # Arguments
/// - `rrule` -- RFC 5545 RRULE string (e.g., "FREQ=WEEKLY;BYDAY=TU,TH")
/// - `dtstart` -- Local datetime string (e.g., "2026-02-17T14:00:00")
/// - `timezone` -- IANA timezone (e.g., "America/Los_Angeles")
#[wasm_bindgen(js_name = "describeRRule")]
pub fn describe_rrule(rrule: &str, dtstart: &str, timezone: &str) -> Result<String, JsValue> {
    describe_rrule_json(rrule, dtstart, timezone).map_err(|e| JsValue::from_str(&e))
}

/// Describe an already-parsed rule given as descriptor JSON.
///
/// Returns a JSON string `{"text": "...", "approximate": bool}`.
///
/// # Arguments
/// - `descriptor` -- JSON object with `frequency`, `interval`, `dtstart` and
///   optional `count`, `until` and `by_*` fields
#[wasm_bindgen(js_name = "describeDescriptor")]
pub fn describe_descriptor(descriptor: &str) -> Result<String, JsValue> {
    describe_descriptor_json(descriptor).map_err(|e| JsValue::from_str(&e))
}
