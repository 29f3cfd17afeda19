//! Configuration fingerprinting.
//!
//! A project configuration is identified by a SHA-256 digest over the
//! canonical form of its `(stack, version, features)` tuple. Two requests
//! that differ only in JSON object key order must produce the same digest,
//! so `features` is canonicalized before hashing.

use serde_json::Value;
use sha2::{Digest, Sha256};

/// Compute a SHA-256 hex digest of the given bytes.
pub fn sha256_hex(data: &[u8]) -> String {
    let hash = Sha256::digest(data);
    format!("{hash:x}")
}

/// Serialize a JSON value into its canonical compact form.
///
/// Object keys are sorted lexicographically at every nesting level, array
/// order is preserved, and scalars use their compact JSON representation.
/// Deliberately independent of `serde_json`'s map ordering, which depends
/// on the `preserve_order` feature flag.
pub fn canonical_json(value: &Value) -> String {
    match value {
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            let fields: Vec<String> = keys
                .iter()
                .map(|k| {
                    let key = Value::String((*k).clone()).to_string();
                    format!("{key}:{}", canonical_json(&map[k.as_str()]))
                })
                .collect();
            format!("{{{}}}", fields.join(","))
        }
        Value::Array(items) => {
            let elems: Vec<String> = items.iter().map(canonical_json).collect();
            format!("[{}]", elems.join(","))
        }
        scalar => scalar.to_string(),
    }
}

/// Fingerprint a `(stack, version, features)` configuration.
///
/// Returns the lowercase-hex SHA-256 of `stack:version:canonical(features)`.
/// Equal configurations hash identically regardless of feature key order;
/// any difference in stack, version, or feature content changes the digest.
pub fn config_hash(stack: &str, version: &str, features: &Value) -> String {
    let normalized = format!("{stack}:{version}:{}", canonical_json(features));
    sha256_hex(normalized.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_input_produces_known_hash() {
        let hash = sha256_hex(b"");
        assert_eq!(
            hash,
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn consistent_output() {
        let data = b"hello world";
        assert_eq!(sha256_hex(data), sha256_hex(data));
        assert_eq!(sha256_hex(data).len(), 64);
    }

    #[test]
    fn canonical_json_sorts_object_keys() {
        let a = json!({"b": 1, "a": 2});
        let b = json!({"a": 2, "b": 1});
        assert_eq!(canonical_json(&a), canonical_json(&b));
        assert_eq!(canonical_json(&a), r#"{"a":2,"b":1}"#);
    }

    #[test]
    fn canonical_json_sorts_nested_keys() {
        let a = json!({"outer": {"z": true, "a": [1, 2, {"k": "v", "b": null}]}});
        let b = json!({"outer": {"a": [1, 2, {"b": null, "k": "v"}], "z": true}});
        assert_eq!(canonical_json(&a), canonical_json(&b));
    }

    #[test]
    fn canonical_json_preserves_array_order() {
        let a = json!(["auth", "db"]);
        let b = json!(["db", "auth"]);
        assert_ne!(canonical_json(&a), canonical_json(&b));
    }

    #[test]
    fn canonical_json_escapes_string_scalars() {
        let v = json!({"name": "line\nbreak"});
        assert_eq!(canonical_json(&v), r#"{"name":"line\nbreak"}"#);
    }

    #[test]
    fn config_hash_is_key_order_invariant() {
        let a = json!({"auth": true, "db": "postgres"});
        let b = json!({"db": "postgres", "auth": true});
        assert_eq!(config_hash("node", "20", &a), config_hash("node", "20", &b));
    }

    #[test]
    fn config_hash_differs_across_inputs() {
        let features = json!({"auth": true});
        let base = config_hash("node", "20", &features);
        assert_ne!(base, config_hash("node", "22", &features));
        assert_ne!(base, config_hash("deno", "20", &features));
        assert_ne!(base, config_hash("node", "20", &json!({"auth": false})));
        assert_eq!(base.len(), 64);
    }
}
