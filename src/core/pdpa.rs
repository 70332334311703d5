//! PDPA helpers: stable pseudonyms for identifiers, PII redaction and
//! data-portability exports

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha2::{Digest, Sha256};

/// Field names whose values are always redacted, at any depth
pub const REDACT_FIELDS: [&str; 8] = [
    "full_name",
    "first_name",
    "last_name",
    "phone",
    "phone_number",
    "email",
    "line_id",
    "address",
];

pub const REDACTED: &str = "[REDACTED]";

/// Hex characters of the digest kept in a pseudonym
const PSEUDONYM_HEX_CHARS: usize = 16;

/// Stable pseudonym for a user id, IP or e-mail: first 16 hex chars of SHA-256
pub fn anonymize(value: &str) -> String {
    let digest = Sha256::digest(value.as_bytes());
    let hex: String = digest.iter().map(|b| format!("{:02x}", b)).collect();
    hex[..PSEUDONYM_HEX_CHARS].to_string()
}

/// Copy of `value` with every PII field replaced by `"[REDACTED]"`
pub fn redact_pii(value: &Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, v)| {
                    let v = if REDACT_FIELDS.contains(&key.as_str()) {
                        Value::String(REDACTED.to_string())
                    } else {
                        redact_pii(v)
                    };
                    (key.clone(), v)
                })
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.iter().map(redact_pii).collect()),
        other => other.clone(),
    }
}

pub const EXPORT_FORMAT: &str = "json";
pub const EXPORT_COMPLIANCE: &str = "PDPA-data-portability";

/// Everything held for one user, in a portable shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataExport<P, C> {
    pub user_id: String,
    pub profile: P,
    pub conversations: Vec<C>,
    pub export_format: String,
    pub compliance: String,
}

/// Right to data portability
pub fn user_data_export<P, C>(user_id: &str, profile: P, conversations: Vec<C>) -> DataExport<P, C> {
    DataExport {
        user_id: user_id.to_string(),
        profile,
        conversations,
        export_format: EXPORT_FORMAT.to_string(),
        compliance: EXPORT_COMPLIANCE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_anonymize_is_stable_and_short() {
        let a = anonymize("user-42");
        assert_eq!(a.len(), 16);
        assert_eq!(a, anonymize("user-42"));
        assert_ne!(a, anonymize("user-43"));
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_anonymize_known_digest() {
        // sha256("abc") = ba7816bf8f01cfea...
        assert_eq!(anonymize("abc"), "ba7816bf8f01cfea");
    }

    #[test]
    fn test_redact_nested() {
        let input = json!({
            "user": {"full_name": "Somchai", "age": 30},
            "messages": [
                {"text": "hi", "email": "a@b.c"},
                {"text": "bye", "contact": {"phone": "0812345678"}}
            ],
            "line_id": null
        });
        let redacted = redact_pii(&input);

        assert_eq!(redacted["user"]["full_name"], REDACTED);
        assert_eq!(redacted["user"]["age"], 30);
        assert_eq!(redacted["messages"][0]["email"], REDACTED);
        assert_eq!(redacted["messages"][0]["text"], "hi");
        assert_eq!(redacted["messages"][1]["contact"]["phone"], REDACTED);
        assert_eq!(redacted["line_id"], REDACTED);
        // input untouched
        assert_eq!(input["user"]["full_name"], "Somchai");
    }

    #[test]
    fn test_redact_scalars_unchanged() {
        assert_eq!(redact_pii(&json!("email")), json!("email"));
        assert_eq!(redact_pii(&json!([1, 2])), json!([1, 2]));
    }

    #[test]
    fn test_user_data_export_shape() {
        let export = user_data_export("u1", json!({"name": "NaMo"}), vec![json!({"text": "hi"})]);
        let value = serde_json::to_value(&export).unwrap();
        assert_eq!(value["user_id"], "u1");
        assert_eq!(value["profile"]["name"], "NaMo");
        assert_eq!(value["conversations"][0]["text"], "hi");
        assert_eq!(value["export_format"], "json");
        assert_eq!(value["compliance"], "PDPA-data-portability");
    }

    #[test]
    fn test_user_data_export_empty_history() {
        let export: DataExport<Value, Value> = user_data_export("u2", Value::Null, Vec::new());
        assert!(export.conversations.is_empty());
        assert_eq!(export.export_format, EXPORT_FORMAT);
    }
}
