//! Response envelopes for the browser widgets.
//!
//! Each endpoint has a fixed shape that its consumer parses, including keys
//! that are always `null`. The shapes differ per endpoint and are kept as
//! separate types.

use serde::Serialize;
use serde_json::Value;

use crate::core::gene::Gene;
use crate::core::ld::LdEntry;
use crate::core::recomb::RecombTable;
use crate::core::variant::Variant;

/// `{data, lastPage: null, meta}` for `/genes`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenesEnvelope<'a> {
    pub data: Vec<&'a Gene>,
    pub last_page: Option<u32>,
    pub meta: &'a Value,
}

impl<'a> GenesEnvelope<'a> {
    pub fn new(data: Vec<&'a Gene>, meta: &'a Value) -> Self {
        Self {
            data,
            last_page: None,
            meta,
        }
    }
}

/// Fixed metadata block of the LD envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LdMeta {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub source: &'static str,
}

pub const LD_META: LdMeta = LdMeta {
    name: "LD",
    kind: "ld",
    source: "local",
};

/// `{data, lastPage: null, error: null, next: null, meta}` for the LD route
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LdEnvelope<'a> {
    pub data: Vec<LdEntry<'a>>,
    pub last_page: Option<u32>,
    pub error: Option<String>,
    pub next: Option<String>,
    pub meta: LdMeta,
}

impl<'a> LdEnvelope<'a> {
    pub fn new(data: Vec<LdEntry<'a>>) -> Self {
        Self {
            data,
            last_page: None,
            error: None,
            next: None,
            meta: LD_META,
        }
    }
}

/// Recomb envelope. On success `error` is omitted; on failure `data` is
/// `null` and `error` carries the message. `meta` is present either way.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecombEnvelope<'a> {
    pub data: Option<RecombTable>,
    pub last_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub meta: &'a Value,
}

impl<'a> RecombEnvelope<'a> {
    pub fn success(data: RecombTable, meta: &'a Value) -> Self {
        Self {
            data: Some(data),
            last_page: None,
            error: None,
            meta,
        }
    }

    pub fn failure(error: impl Into<String>, meta: &'a Value) -> Self {
        Self {
            data: None,
            last_page: None,
            error: Some(error.into()),
            meta,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VariantMeta {
    pub count: usize,
}

/// `{data, meta: {count}}` for the variant routes
#[derive(Debug, Serialize)]
pub struct VariantEnvelope {
    pub data: Vec<Variant>,
    pub meta: VariantMeta,
}

impl VariantEnvelope {
    pub fn new(data: Vec<Variant>) -> Self {
        let count = data.len();
        Self {
            data,
            meta: VariantMeta { count },
        }
    }
}

/// `{error}` body returned with a failure status by the variant routes
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ld::LdPair;
    use serde_json::json;

    #[test]
    fn test_genes_envelope_shape() {
        let gene = Gene::new("16", 1, 2);
        let meta = json!({"build": "GRCh38"});
        let value = serde_json::to_value(GenesEnvelope::new(vec![&gene], &meta)).unwrap();
        assert_eq!(
            value,
            json!({
                "data": [{"chrom": "16", "start": 1, "end": 2}],
                "lastPage": null,
                "meta": {"build": "GRCh38"}
            })
        );
    }

    #[test]
    fn test_ld_envelope_shape() {
        let pair = LdPair::new("a", "b", "16", 7).with_correlation("rsquare", 0.5);
        let value = serde_json::to_value(LdEnvelope::new(vec![LdEntry::new(&pair, "rsquare")])).unwrap();
        assert_eq!(
            value,
            json!({
                "data": [{"variant1": "a", "variant2": "b", "chrom": "16", "pos": 7, "rsquare": 0.5}],
                "lastPage": null,
                "error": null,
                "next": null,
                "meta": {"name": "LD", "type": "ld", "source": "local"}
            })
        );
    }

    #[test]
    fn test_recomb_success_has_no_error_key() {
        let meta = json!({});
        let value = serde_json::to_value(RecombEnvelope::success(RecombTable::new(), &meta)).unwrap();
        let object = value.as_object().unwrap();
        assert!(!object.contains_key("error"));
        assert_eq!(value["data"]["chromosome"], json!([]));
        assert!(value["lastPage"].is_null());
    }

    #[test]
    fn test_recomb_failure_keeps_meta() {
        let meta = json!({"source": "hapmap"});
        let value = serde_json::to_value(RecombEnvelope::failure("bad filter", &meta)).unwrap();
        assert_eq!(
            value,
            json!({"data": null, "lastPage": null, "error": "bad filter", "meta": {"source": "hapmap"}})
        );
    }

    #[test]
    fn test_variant_envelope_count() {
        let value = serde_json::to_value(VariantEnvelope::new(Vec::new())).unwrap();
        assert_eq!(value, json!({"data": [], "meta": {"count": 0}}));
    }
}
