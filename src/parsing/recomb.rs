use serde::{Deserialize, Deserializer};
use serde_json::{Number, Value};

use crate::core::recomb::RecombTable;
use crate::parsing::ParseError;

/// The recombination dataset as loaded from disk.
#[derive(Debug, Clone, Default)]
pub struct RecombSet {
    pub table: RecombTable,

    /// Dataset metadata, returned verbatim in every recomb response
    pub meta: Value,
}

#[derive(Deserialize)]
struct RawRecombSet {
    data: RawColumns,
    meta: Value,
}

#[derive(Deserialize)]
struct RawColumns {
    #[serde(deserialize_with = "chromosome_column")]
    chromosome: Vec<String>,
    id: Vec<i64>,
    pos_cm: Vec<f64>,
    position: Vec<i64>,
    recomb_rate: Vec<f64>,
}

/// Chromosome cells are written as either "16" or 16 depending on the exporter.
#[derive(Deserialize)]
#[serde(untagged)]
enum ChromosomeCell {
    Text(String),
    Number(Number),
}

fn chromosome_column<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    let cells = Vec::<ChromosomeCell>::deserialize(deserializer)?;
    Ok(cells
        .into_iter()
        .map(|cell| match cell {
            ChromosomeCell::Text(text) => text,
            ChromosomeCell::Number(number) => number.to_string(),
        })
        .collect())
}

/// Parse a columnar recombination document:
/// `{"data": {"chromosome": [...], "id": [...], ...}, "meta": {...}}`.
///
/// # Errors
///
/// Returns `ParseError::Json` if the document does not have that shape and
/// `ParseError::MisalignedColumns` if the five columns differ in length.
pub fn parse_recomb_set(text: &str) -> Result<RecombSet, ParseError> {
    let raw: RawRecombSet = serde_json::from_str(text)?;
    let columns = raw.data;

    let table = RecombTable {
        chromosome: columns.chromosome,
        id: columns.id,
        pos_cm: columns.pos_cm,
        position: columns.position,
        recomb_rate: columns.recomb_rate,
    };

    if !table.is_aligned() {
        return Err(ParseError::MisalignedColumns(table.column_lengths()));
    }

    Ok(RecombSet {
        table,
        meta: raw.meta,
    })
}
