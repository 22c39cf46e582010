use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;

/// Correlation kind reported when the client does not ask for one
pub const DEFAULT_CORRELATION: &str = "rsquare";

/// A pair of variants in linkage disequilibrium.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LdPair {
    /// Index variant the pair was computed against
    pub variant1: String,

    /// Partner variant
    pub variant2: String,

    pub chrom: String,

    /// Position of the partner variant
    pub pos: u64,

    /// Correlation statistics keyed by kind (`rsquare`, `dprime`, ...)
    #[serde(default)]
    pub correlation_values: BTreeMap<String, f64>,
}

impl LdPair {
    pub fn new(
        variant1: impl Into<String>,
        variant2: impl Into<String>,
        chrom: impl Into<String>,
        pos: u64,
    ) -> Self {
        Self {
            variant1: variant1.into(),
            variant2: variant2.into(),
            chrom: chrom.into(),
            pos,
            correlation_values: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_correlation(mut self, kind: impl Into<String>, value: f64) -> Self {
        self.correlation_values.insert(kind.into(), value);
        self
    }

    /// Correlation of the given kind, `0.0` if the pair has none recorded.
    #[must_use]
    pub fn correlation(&self, kind: &str) -> f64 {
        self.correlation_values.get(kind).copied().unwrap_or(0.0)
    }
}

/// An LD pair as returned to clients: one correlation value, keyed by its kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LdEntry<'a> {
    pub pair: &'a LdPair,
    pub correlation_kind: &'a str,
}

impl<'a> LdEntry<'a> {
    pub fn new(pair: &'a LdPair, correlation_kind: &'a str) -> Self {
        Self {
            pair,
            correlation_kind,
        }
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        self.pair.correlation(self.correlation_kind)
    }
}

impl Serialize for LdEntry<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(5))?;
        map.serialize_entry("variant1", &self.pair.variant1)?;
        map.serialize_entry("variant2", &self.pair.variant2)?;
        map.serialize_entry("chrom", &self.pair.chrom)?;
        map.serialize_entry("pos", &self.pair.pos)?;
        map.serialize_entry(self.correlation_kind, &self.value())?;
        map.end()
    }
}
