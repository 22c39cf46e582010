//! Decoder for LD pair datasets.
//!
//! Upstream LD exports are inconsistent: some entries are JSON objects, others
//! are the same object serialized into a JSON string. Both are accepted here.
//! Entries that decode to neither are dropped.

use serde_json::Value;
use tracing::debug;

use crate::core::ld::LdPair;
use crate::parsing::ParseError;

/// The decoded LD dataset.
#[derive(Debug, Clone, Default)]
pub struct LdSet {
    pub pairs: Vec<LdPair>,

    /// Entries that could not be decoded
    pub dropped: usize,
}

/// Decode one LD entry, either an object or a string holding an object.
pub fn decode_ld_entry(entry: Value) -> Option<LdPair> {
    match entry {
        Value::String(text) => serde_json::from_str(&text).ok(),
        other => serde_json::from_value(other).ok(),
    }
}

/// Parse an LD dataset: a JSON array of entries, or `{"data": [...]}`.
pub fn parse_ld_set(text: &str) -> Result<LdSet, ParseError> {
    let entries = match serde_json::from_str::<Value>(text)? {
        Value::Array(entries) => entries,
        Value::Object(mut object) => match object.remove("data") {
            Some(Value::Array(entries)) => entries,
            _ => {
                return Err(ParseError::InvalidFormat(
                    "LD document has no \"data\" array".to_string(),
                ))
            }
        },
        _ => {
            return Err(ParseError::InvalidFormat(
                "LD document must be an array or an object".to_string(),
            ))
        }
    };

    let total = entries.len();
    let pairs: Vec<LdPair> = entries.into_iter().filter_map(decode_ld_entry).collect();
    let dropped = total - pairs.len();
    if dropped > 0 {
        debug!(dropped, total, "Dropped undecodable LD entries");
    }

    Ok(LdSet { pairs, dropped })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_object_and_string() {
        let object = json!({
            "variant1": "16:100_A/G", "variant2": "16:150_C/T", "chrom": "16", "pos": 150,
            "correlation_values": {"rsquare": 0.4}
        });
        let encoded = Value::String(object.to_string());

        let a = decode_ld_entry(object).unwrap();
        let b = decode_ld_entry(encoded).unwrap();
        assert_eq!(a, b);
        assert!((a.correlation("rsquare") - 0.4).abs() < f64::EPSILON);
    }

    #[test]
    fn test_decode_failures() {
        assert!(decode_ld_entry(Value::String("{not json".into())).is_none());
        assert!(decode_ld_entry(json!({"variant1": "x"})).is_none());
        assert!(decode_ld_entry(json!(42)).is_none());
    }

    #[test]
    fn test_parse_ld_set_counts_dropped() {
        let text = r#"{"data": [
            {"variant1": "a", "variant2": "b", "chrom": "16", "pos": 1},
            "{\"variant1\": \"a\", \"variant2\": \"c\", \"chrom\": \"16\", \"pos\": 2}",
            "garbage",
            null
        ]}"#;
        let set = parse_ld_set(text).unwrap();
        assert_eq!(set.pairs.len(), 2);
        assert_eq!(set.dropped, 2);
        assert_eq!(set.pairs[1].variant2, "c");
    }

    #[test]
    fn test_parse_ld_set_bare_array() {
        let set = parse_ld_set("[]").unwrap();
        assert!(set.pairs.is_empty());
        assert!(parse_ld_set(r#"{"rows": []}"#).is_err());
        assert!(parse_ld_set("3").is_err());
    }
}
