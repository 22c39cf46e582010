use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::query::VariantQuery;
use crate::core::variant::Variant;
use crate::parsing::vcf::open_variant_file;

#[derive(Error, Debug)]
pub enum VariantSourceError {
    #[error("Variant source is not configured")]
    NotConfigured,

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Variant query did not complete: {0}")]
    Task(String),
}

/// Collect variants on `chrom` with `start <= pos <= end` from a record stream.
///
/// Reading stops as soon as the limit is reached, so the result is the first
/// `limit` matches in stream order and nothing past the last match is pulled
/// from the source. The first stream error aborts the query.
///
/// # Errors
///
/// Returns the first error yielded by `records`.
pub fn filter_variants<I, E>(records: I, query: &VariantQuery) -> Result<Vec<Variant>, E>
where
    I: IntoIterator<Item = Result<Variant, E>>,
{
    let limit = query.effective_limit();
    let chrom = query.chrom();
    let mut matches = Vec::new();
    if limit == 0 {
        return Ok(matches);
    }

    for record in records {
        let variant = record?;
        if !variant.is_within(chrom, query.start, query.end) {
            continue;
        }
        matches.push(variant);
        if matches.len() >= limit {
            break;
        }
    }

    Ok(matches)
}

/// Stream the VCF at `path` through [`filter_variants`].
///
/// # Errors
///
/// Returns `VariantSourceError::Io` if the file cannot be opened or a read
/// fails part way (truncated gzip, invalid UTF-8).
pub fn read_variants(path: &Path, query: &VariantQuery) -> Result<Vec<Variant>, VariantSourceError> {
    let io_error = |source| VariantSourceError::Io {
        path: path.to_path_buf(),
        source,
    };
    let reader = open_variant_file(path).map_err(io_error)?;
    filter_variants(reader, query).map_err(io_error)
}
