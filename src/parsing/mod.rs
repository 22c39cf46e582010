//! Decoders for the datasets served by locus-server.
//!
//! This module provides parsers for:
//!
//! - **Gene sets**: `{"data": [gene...], "meta": {...}}` JSON documents
//! - **LD pairs**: JSON arrays whose entries may be objects or JSON-encoded strings
//! - **Recombination rates**: columnar JSON with five parallel arrays
//! - **VCF**: data lines of plain or gzip-compressed VCF files, streamed
//!
//! ## Malformed input
//!
//! Whole documents that cannot be read are errors. Individual records that
//! cannot be read (one bad gene, one undecodable LD string, one short VCF line)
//! are skipped and the rest of the dataset is kept.

use thiserror::Error;

pub mod genes;
pub mod ld;
pub mod recomb;
pub mod vcf;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Recombination columns differ in length (chromosome, id, pos_cm, position, recomb_rate = {0:?})")]
    MisalignedColumns([usize; 5]),
}
