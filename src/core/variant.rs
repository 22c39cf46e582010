use serde::{Deserialize, Serialize};

/// A variant call taken from the fixed columns of a VCF data line.
///
/// Field names are upper-cased on the wire to match the VCF column headers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct Variant {
    pub chrom: String,
    pub pos: u64,
    pub id: String,
    #[serde(rename = "REF")]
    pub reference: String,
    pub alt: String,
    /// `None` when the QUAL column is `.`
    pub qual: Option<f64>,
}

impl Variant {
    /// True if this variant sits on `chrom` (when given) within `[start, end]`.
    #[must_use]
    pub fn is_within(&self, chrom: Option<&str>, start: Option<u64>, end: Option<u64>) -> bool {
        chrom.map_or(true, |chrom| self.chrom == chrom)
            && start.map_or(true, |start| self.pos >= start)
            && end.map_or(true, |end| self.pos <= end)
    }
}
