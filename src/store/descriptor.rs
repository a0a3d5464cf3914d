//! Parsing of `.metadata` JSON descriptors.

use crate::error::StoreError;
use crate::types::{RecordId, RecordKind};
use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::debug;

/// Fields the store needs from a descriptor, plus the raw document
#[derive(Debug, Clone)]
pub struct Descriptor {
    pub name: String,
    pub parent_id: Option<RecordId>,
    pub kind: RecordKind,
    pub last_modified: Option<DateTime<Utc>>,
    pub raw: Value,
}

/// Parse one descriptor.
///
/// `parent`, `visibleName` and `type` are required; `parent` may be an empty
/// string or `null` for root-level records. An unrecognised `type` tag is kept
/// as [`RecordKind::Other`]. Unknown fields are kept in `raw`.
pub fn parse_descriptor(key: &str, text: &str) -> Result<Descriptor, StoreError> {
    let raw: Value = serde_json::from_str(text)
        .map_err(|e| StoreError::malformed(key, format!("invalid JSON: {}", e)))?;
    let fields = raw
        .as_object()
        .ok_or_else(|| StoreError::malformed(key, "descriptor is not a JSON object"))?;

    let parent_id = match fields.get("parent") {
        None => return Err(StoreError::malformed(key, "missing field `parent`")),
        Some(Value::Null) => None,
        Some(Value::String(p)) if p.is_empty() => None,
        Some(Value::String(p)) => Some(p.clone()),
        Some(_) => return Err(StoreError::malformed(key, "`parent` is not a string")),
    };

    let name = fields
        .get("visibleName")
        .ok_or_else(|| StoreError::malformed(key, "missing field `visibleName`"))?
        .as_str()
        .ok_or_else(|| StoreError::malformed(key, "`visibleName` is not a string"))?
        .to_string();

    let tag = fields
        .get("type")
        .ok_or_else(|| StoreError::malformed(key, "missing field `type`"))?
        .as_str()
        .ok_or_else(|| StoreError::malformed(key, "`type` is not a string"))?;
    let kind = RecordKind::from_tag(tag);
    if kind == RecordKind::Other {
        debug!(key, tag, "record with unrecognised type kept as non-document");
    }

    let last_modified = fields.get("lastModified").and_then(parse_millis);

    Ok(Descriptor {
        name,
        parent_id,
        kind,
        last_modified,
        raw,
    })
}

// lastModified is epoch milliseconds, written as a string by the device
fn parse_millis(value: &Value) -> Option<DateTime<Utc>> {
    let millis = match value {
        Value::String(s) => s.trim().parse::<i64>().ok()?,
        Value::Number(n) => n.as_i64()?,
        _ => return None,
    };
    DateTime::from_timestamp_millis(millis)
}
