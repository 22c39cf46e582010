use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::core::gene::Gene;
use crate::parsing::ParseError;

/// The gene set as loaded from disk.
#[derive(Debug, Clone, Default)]
pub struct GeneSet {
    pub genes: Vec<Gene>,

    /// Dataset metadata, returned verbatim in every gene response
    pub meta: Value,
}

#[derive(Deserialize)]
struct RawGeneSet {
    data: Vec<Value>,
    meta: Value,
}

/// Parse a gene set document: `{"data": [...], "meta": {...}}`.
///
/// Entries without usable `chrom`/`start`/`end` are skipped with a warning;
/// a document that is not of this shape at all is an error.
pub fn parse_gene_set(text: &str) -> Result<GeneSet, ParseError> {
    let raw: RawGeneSet = serde_json::from_str(text)?;

    let mut genes = Vec::with_capacity(raw.data.len());
    for (index, entry) in raw.data.into_iter().enumerate() {
        match serde_json::from_value::<Gene>(entry) {
            Ok(gene) => genes.push(gene),
            Err(e) => warn!(index, error = %e, "Skipping malformed gene record"),
        }
    }

    Ok(GeneSet {
        genes,
        meta: raw.meta,
    })
}
