use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A gene annotation from the gene set.
///
/// Only the coordinates are interpreted; every other field of the source record
/// (gene name, strand, transcripts, ...) is carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gene {
    /// Chromosome name as written in the source (e.g. "16")
    pub chrom: String,

    /// First base of the gene span
    pub start: u64,

    /// Last base of the gene span
    pub end: u64,

    /// Opaque fields passed through to clients
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Gene {
    pub fn new(chrom: impl Into<String>, start: u64, end: u64) -> Self {
        Self {
            chrom: chrom.into(),
            start,
            end,
            extra: Map::new(),
        }
    }

    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// True if `[self.start, self.end]` intersects the query span.
    ///
    /// A missing bound leaves that side of the query open.
    #[must_use]
    pub fn overlaps(&self, start: Option<u64>, end: Option<u64>) -> bool {
        start.map_or(true, |start| self.end >= start) && end.map_or(true, |end| self.start <= end)
    }
}
