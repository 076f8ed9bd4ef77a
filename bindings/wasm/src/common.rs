use anyhow::{Result, anyhow};
use serde::Serialize;
use wasm_bindgen::JsValue;

pub(crate) fn js_err(e: impl ToString) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Hand a value to JS as a plain object by round-tripping through JSON text,
/// so maps become objects rather than `Map` instances.
pub(crate) fn to_js_object<T: Serialize + ?Sized>(value: &T) -> Result<JsValue> {
    let text = serde_json::to_string(value)
        .map_err(|e| anyhow!("Failed to serialize value: {e}"))?;
    js_sys::JSON::parse(&text)
        .map_err(|e| anyhow!("Failed to parse serialized value: {e:?}"))
}

/// Parse a selector: `world` or a country code.
pub(crate) fn parse_scope(raw: &str) -> Result<geodash_core::Scope> {
    geodash_core::Scope::parse(raw)
        .ok_or_else(|| anyhow!("Unknown selection {raw:?}. Expected \"world\" or a country code"))
}
