//! Typed constraint sets, one per dataset.
//!
//! A bound that is `None` is absent. `Some(0)` is a real bound: zero is a
//! valid coordinate and filters like any other value.

use serde::Deserialize;

use crate::core::ld::DEFAULT_CORRELATION;

/// Default cap on variants returned by one query
pub const DEFAULT_VARIANT_LIMIT: usize = 100;

/// Upper bound accepted for a client-supplied variant limit
pub const MAX_VARIANT_LIMIT: usize = 10_000;

/// Treat `chrom=` the same as an omitted chromosome.
fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|s| !s.is_empty())
}

/// Interval-overlap query over the gene set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GeneQuery {
    pub chrom: Option<String>,
    pub start: Option<u64>,
    pub end: Option<u64>,
}

impl GeneQuery {
    pub fn chrom(&self) -> Option<&str> {
        non_empty(self.chrom.as_ref())
    }
}

/// LD lookup for one index variant.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LdQuery {
    /// Must equal `variant1` of every returned pair
    pub variant: String,
    pub chrom: Option<String>,
    pub start: Option<u64>,
    pub stop: Option<u64>,
    /// Correlation kind to report, `rsquare` unless asked otherwise
    #[serde(default = "default_correlation")]
    pub correlation: String,
}

fn default_correlation() -> String {
    DEFAULT_CORRELATION.to_string()
}

impl LdQuery {
    pub fn new(variant: impl Into<String>) -> Self {
        Self {
            variant: variant.into(),
            chrom: None,
            start: None,
            stop: None,
            correlation: default_correlation(),
        }
    }

    pub fn chrom(&self) -> Option<&str> {
        non_empty(self.chrom.as_ref())
    }
}

/// Constraints parsed from a recomb filter expression.
///
/// Each recognized field/operator pair has a single slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecombFilter {
    /// `chromosome eq <value>`
    pub chromosome_eq: Option<String>,
    /// `position le <int>`
    pub position_le: Option<i64>,
    /// `position ge <int>`
    pub position_ge: Option<i64>,
    /// `id in <int>`
    pub id_in: Option<i64>,
}

impl RecombFilter {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Point-containment query over a variant stream, capped at `limit` matches.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VariantQuery {
    pub chrom: Option<String>,
    pub start: Option<u64>,
    pub end: Option<u64>,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    DEFAULT_VARIANT_LIMIT
}

impl Default for VariantQuery {
    fn default() -> Self {
        Self {
            chrom: None,
            start: None,
            end: None,
            limit: DEFAULT_VARIANT_LIMIT,
        }
    }
}

impl VariantQuery {
    pub fn chrom(&self) -> Option<&str> {
        non_empty(self.chrom.as_ref())
    }

    /// The limit actually applied, clamped to [`MAX_VARIANT_LIMIT`].
    pub fn effective_limit(&self) -> usize {
        self.limit.min(MAX_VARIANT_LIMIT)
    }
}
