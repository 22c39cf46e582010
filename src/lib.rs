//! # locus-server
//!
//! A read-only query service for genome browser annotation tracks.
//!
//! A genome browser asks for the data behind one view at a time: the genes in
//! a window, the LD partners of a selected variant, the recombination rate
//! across the region, the variant calls underneath. `locus-server` loads those
//! datasets once at startup and answers each request with a filtered subset
//! wrapped in the exact JSON envelope the browser widget expects.
//!
//! ## Features
//!
//! - **Interval queries**: Genes overlapping a window, open-ended on either side
//! - **LD lookup**: Exact index-variant match, reporting the requested correlation kind
//! - **Recombination filters**: A small `field op value and ...` expression language
//! - **Variant streaming**: Early-terminating scans over plain or gzipped VCF
//! - **Tolerant loading**: Malformed records are skipped, not fatal
//!
//! ## Example
//!
//! ```rust,no_run
//! use locus_server::core::query::GeneQuery;
//! use locus_server::filter::genes::filter_genes;
//! use locus_server::store::dataset::{DataPaths, DatasetStore};
//! use std::path::Path;
//!
//! let store = DatasetStore::load(&DataPaths::from_dir(Path::new("data"))).unwrap();
//!
//! let query = GeneQuery { chrom: Some("16".into()), start: Some(53_000_000), end: Some(54_000_000) };
//! for gene in filter_genes(store.genes(), &query) {
//!     println!("{}:{}-{}", gene.chrom, gene.start, gene.end);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Record and query types
//! - [`parsing`]: Dataset decoders (JSON, VCF)
//! - [`store`]: The immutable in-memory dataset store
//! - [`filter`]: Filters and the recomb expression parser
//! - [`cli`]: Command-line interface implementation
//! - [`web`]: HTTP routes and response envelopes

pub mod cli;
pub mod core;
pub mod filter;
pub mod parsing;
pub mod store;
pub mod web;

// Re-export commonly used types for convenience
pub use crate::core::gene::Gene;
pub use crate::core::ld::LdPair;
pub use crate::core::recomb::RecombTable;
pub use crate::core::variant::Variant;
pub use crate::store::dataset::DatasetStore;
