use serde::Serialize;
use serde_json::Value;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

use crate::core::gene::Gene;
use crate::core::ld::LdPair;
use crate::core::recomb::RecombTable;
use crate::parsing::genes::{parse_gene_set, GeneSet};
use crate::parsing::ld::{parse_ld_set, LdSet};
use crate::parsing::recomb::{parse_recomb_set, RecombSet};
use crate::parsing::ParseError;

pub const GENES_FILE: &str = "genes.json";
pub const LD_FILE: &str = "ld.json";
pub const RECOMB_FILE: &str = "recomb.json";
pub const VARIANTS_FILE: &str =
    "ALL.chr16.shapeit2_integrated_snvindels_v2a_27022019.GRCh38.phased.vcf.gz";
pub const TEST_VARIANTS_FILE: &str = "HG00098.vcf.gz";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", .path.display())]
    Parse { path: PathBuf, source: ParseError },
}

/// Which of the two line-oriented variant sources a query reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantSource {
    /// Full cohort VCF
    Main,
    /// Small single-sample VCF used for front-end development
    Test,
}

/// Locations of every dataset file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    pub genes: PathBuf,
    pub ld: PathBuf,
    pub recomb: PathBuf,
    pub variants: Option<PathBuf>,
    pub test_variants: Option<PathBuf>,
}

impl DataPaths {
    /// Default file names under one data directory.
    pub fn from_dir(dir: &Path) -> Self {
        Self {
            genes: dir.join(GENES_FILE),
            ld: dir.join(LD_FILE),
            recomb: dir.join(RECOMB_FILE),
            variants: Some(dir.join(VARIANTS_FILE)),
            test_variants: Some(dir.join(TEST_VARIANTS_FILE)),
        }
    }
}

/// All datasets served by the query endpoints.
///
/// Built once before serving and never mutated; request handlers share it
/// read-only. Variant sources are kept as paths because they are streamed
/// from disk per query rather than held in memory.
#[derive(Debug, Clone, Default)]
pub struct DatasetStore {
    genes: GeneSet,
    ld: LdSet,
    recomb: RecombSet,
    variants: Option<PathBuf>,
    test_variants: Option<PathBuf>,
}

/// Dataset sizes, as reported by `inspect` and at startup
#[derive(Debug, Clone, Serialize)]
pub struct StoreSummary {
    pub genes: usize,
    pub ld_pairs: usize,
    pub ld_dropped: usize,
    pub recomb_rows: usize,
    pub variants: Option<PathBuf>,
    pub test_variants: Option<PathBuf>,
}

impl DatasetStore {
    pub fn new(genes: GeneSet, ld: LdSet, recomb: RecombSet) -> Self {
        Self {
            genes,
            ld,
            recomb,
            variants: None,
            test_variants: None,
        }
    }

    #[must_use]
    pub fn with_variant_source(mut self, source: VariantSource, path: impl Into<PathBuf>) -> Self {
        match source {
            VariantSource::Main => self.variants = Some(path.into()),
            VariantSource::Test => self.test_variants = Some(path.into()),
        }
        self
    }

    /// Load every required dataset.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if a required file is missing or unparseable.
    /// Missing variant files only produce a warning, since they are opened
    /// per request.
    pub fn load(paths: &DataPaths) -> Result<Self, StoreError> {
        let genes = load_file(&paths.genes, parse_gene_set)?;
        let ld = load_file(&paths.ld, parse_ld_set)?;
        let recomb = load_file(&paths.recomb, parse_recomb_set)?;

        for path in [&paths.variants, &paths.test_variants].into_iter().flatten() {
            if !path.exists() {
                warn!(path = %path.display(), "Variant source not found; its endpoint will return errors");
            }
        }

        let store = Self {
            genes,
            ld,
            recomb,
            variants: paths.variants.clone(),
            test_variants: paths.test_variants.clone(),
        };

        let summary = store.summary();
        info!(
            genes = summary.genes,
            ld_pairs = summary.ld_pairs,
            ld_dropped = summary.ld_dropped,
            recomb_rows = summary.recomb_rows,
            "Loaded datasets"
        );

        Ok(store)
    }

    pub fn genes(&self) -> &[Gene] {
        &self.genes.genes
    }

    pub fn gene_meta(&self) -> &Value {
        &self.genes.meta
    }

    pub fn ld_pairs(&self) -> &[LdPair] {
        &self.ld.pairs
    }

    pub fn recomb(&self) -> &RecombTable {
        &self.recomb.table
    }

    pub fn recomb_meta(&self) -> &Value {
        &self.recomb.meta
    }

    pub fn variant_source(&self, source: VariantSource) -> Option<&Path> {
        match source {
            VariantSource::Main => self.variants.as_deref(),
            VariantSource::Test => self.test_variants.as_deref(),
        }
    }

    pub fn summary(&self) -> StoreSummary {
        StoreSummary {
            genes: self.genes.genes.len(),
            ld_pairs: self.ld.pairs.len(),
            ld_dropped: self.ld.dropped,
            recomb_rows: self.recomb.table.len(),
            variants: self.variants.clone(),
            test_variants: self.test_variants.clone(),
        }
    }
}

fn load_file<T>(
    path: &Path,
    parse: impl FnOnce(&str) -> Result<T, ParseError>,
) -> Result<T, StoreError> {
    let content = std::fs::read_to_string(path).map_err(|source| StoreError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&content).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const GENES: &str = r#"{"data": [{"chrom": "16", "start": 1, "end": 10}], "meta": {"n": 1}}"#;
    const LD: &str = r#"[{"variant1": "a", "variant2": "b", "chrom": "16", "pos": 3}, "bad"]"#;
    const RECOMB: &str = r#"{"data": {"chromosome": ["16"], "id": [0], "pos_cm": [0.0],
        "position": [5], "recomb_rate": [1.0]}, "meta": {}}"#;

    fn write_datasets(dir: &Path) {
        std::fs::write(dir.join(GENES_FILE), GENES).unwrap();
        std::fs::write(dir.join(LD_FILE), LD).unwrap();
        std::fs::write(dir.join(RECOMB_FILE), RECOMB).unwrap();
    }

    #[test]
    fn test_load_from_dir() {
        let dir = tempfile::tempdir().unwrap();
        write_datasets(dir.path());

        let store = DatasetStore::load(&DataPaths::from_dir(dir.path())).unwrap();
        assert_eq!(store.genes().len(), 1);
        assert_eq!(store.gene_meta()["n"], 1);
        assert_eq!(store.ld_pairs().len(), 1);
        assert_eq!(store.summary().ld_dropped, 1);
        assert_eq!(store.recomb().len(), 1);
        assert_eq!(
            store.variant_source(VariantSource::Test),
            Some(dir.path().join(TEST_VARIANTS_FILE).as_path())
        );
    }

    #[test]
    fn test_missing_required_file() {
        let dir = tempfile::tempdir().unwrap();
        write_datasets(dir.path());
        std::fs::remove_file(dir.path().join(LD_FILE)).unwrap();

        let err = DatasetStore::load(&DataPaths::from_dir(dir.path())).unwrap_err();
        assert!(matches!(err, StoreError::Read { .. }));
        assert!(err.to_string().contains(LD_FILE));
    }

    #[test]
    fn test_unparseable_required_file() {
        let dir = tempfile::tempdir().unwrap();
        write_datasets(dir.path());
        std::fs::write(dir.path().join(GENES_FILE), "{").unwrap();

        let err = DatasetStore::load(&DataPaths::from_dir(dir.path())).unwrap_err();
        assert!(matches!(err, StoreError::Parse { .. }));
    }

    #[test]
    fn test_variant_sources_default_unset() {
        let store = DatasetStore::default();
        assert!(store.variant_source(VariantSource::Main).is_none());

        let store = store.with_variant_source(VariantSource::Main, "calls.vcf");
        assert_eq!(store.variant_source(VariantSource::Main), Some(Path::new("calls.vcf")));
        assert!(store.variant_source(VariantSource::Test).is_none());
    }
}
