//! Quorum set codec
//!
//! ## JSON document
//!
//! ```text
//! { "t": <threshold>, "v": [ "<validator>", ..., { "t": ..., "v": [...] }, ... ] }
//! ```
//!
//! Validators come first, then inner sets, each in tree order. Decoding is
//! all-or-nothing: any malformed field or entry rejects the whole document.
//! The threshold may be written as an integral float (`1.0`) as long as it
//! fits in a `u32`.
//!
//! ## Canonical binary encoding
//!
//! `bincode` of the normalized tree; the driver hashes these bytes to get the
//! quorum set identifier carried in consensus statements.

use crate::domain::{normalized, QuorumSet};
use crate::error::{QuorumError, QuorumResult};
use crate::metrics;
use crate::ports::outbound::QuorumDriver;
use serde_json::{Map, Value};
use shared_types::{Hash, NodeId};

/// Encode `qset` as a `{t, v}` document, naming validators with `resolve`.
///
/// Fails if `resolve` returns an empty name.
pub fn to_json<R>(qset: &QuorumSet, resolve: &R) -> QuorumResult<Value>
where
    R: Fn(&NodeId) -> String,
{
    let mut entries = Vec::with_capacity(qset.child_count());

    for validator in &qset.validators {
        let name = resolve(validator);
        if name.is_empty() {
            return Err(QuorumError::EmptyValidatorName);
        }
        entries.push(Value::String(name));
    }
    for inner in &qset.inner_sets {
        entries.push(to_json(inner, resolve)?);
    }

    let mut doc = Map::new();
    doc.insert("t".to_string(), Value::from(qset.threshold));
    doc.insert("v".to_string(), Value::Array(entries));
    Ok(Value::Object(doc))
}

/// Encode with full, decodable keys.
pub fn to_json_full(qset: &QuorumSet) -> QuorumResult<Value> {
    to_json(qset, &NodeId::to_str_key)
}

/// Compact one-line document with short node names, for logs and debugging.
pub fn to_compact_string(qset: &QuorumSet) -> QuorumResult<String> {
    let doc = to_json(qset, &NodeId::to_short_string)?;
    Ok(serde_json::to_string(&doc)?)
}

/// Decode a `{t, v}` document.
pub fn from_json(doc: &Value) -> QuorumResult<QuorumSet> {
    decode(doc).inspect_err(|_| metrics::record_decode_failure())
}

/// Parse JSON text and decode it.
pub fn from_json_str(text: &str) -> QuorumResult<QuorumSet> {
    let doc: Value = serde_json::from_str(text).inspect_err(|_| metrics::record_decode_failure())?;
    from_json(&doc)
}

fn decode(doc: &Value) -> QuorumResult<QuorumSet> {
    let fields = doc.as_object().ok_or(QuorumError::NotAnObject)?;

    let threshold = fields
        .get("t")
        .and_then(threshold_of)
        .ok_or(QuorumError::InvalidThreshold)?;

    let entries = fields
        .get("v")
        .and_then(Value::as_array)
        .ok_or(QuorumError::InvalidValidators)?;

    let mut qset = QuorumSet {
        threshold,
        validators: Vec::with_capacity(entries.len()),
        inner_sets: Vec::new(),
    };

    for entry in entries {
        match entry {
            Value::String(key) => {
                let node_id = NodeId::from_str_key(key).map_err(|source| {
                    QuorumError::InvalidValidatorKey {
                        key: key.clone(),
                        source,
                    }
                })?;
                qset.validators.push(node_id);
            }
            Value::Object(_) => qset.inner_sets.push(decode(entry)?),
            other => {
                return Err(QuorumError::InvalidEntry {
                    found: json_kind(other).to_string(),
                })
            }
        }
    }

    Ok(qset)
}

fn threshold_of(value: &Value) -> Option<u32> {
    if let Some(t) = value.as_u64() {
        return u32::try_from(t).ok();
    }
    let t = value.as_f64()?;
    (t.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&t)).then_some(t as u32)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Canonical bytes of `qset` as given (callers normalize first).
pub fn canonical_bytes(qset: &QuorumSet) -> QuorumResult<Vec<u8>> {
    Ok(bincode::serialize(qset)?)
}

/// Identifier of `qset`: hash of the canonical bytes of its normalized form.
pub fn quorum_set_hash(qset: &QuorumSet, driver: &dyn QuorumDriver) -> QuorumResult<Hash> {
    let bytes = canonical_bytes(&normalized(qset))?;
    Ok(driver.hash_of(&[bytes.as_slice()]))
}
