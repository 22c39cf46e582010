//! Query filters over the loaded datasets.
//!
//! Each dataset has its own filter and its own matching rule:
//!
//! - [`genes::filter_genes`]: **interval overlap**; a gene matches when its
//!   span intersects the query window
//! - [`ld::filter_ld`]: exact match on the index variant, then optional
//!   chromosome and position narrowing
//! - [`recomb::filter_recomb`]: row-wise constraints over a columnar table,
//!   driven by an expression parsed with [`expression::parse_recomb_filter`]
//! - [`variants::filter_variants`]: **point containment** on a streamed VCF,
//!   stopping at the result limit
//!
//! All filters keep input order and never modify the store.
//!
//! ## Example
//!
//! ```rust
//! use locus_server::core::gene::Gene;
//! use locus_server::core::query::GeneQuery;
//! use locus_server::filter::genes::filter_genes;
//!
//! let genes = vec![Gene::new("16", 100, 200), Gene::new("16", 500, 600)];
//! let query = GeneQuery { chrom: Some("16".into()), start: Some(150), end: Some(300) };
//! assert_eq!(filter_genes(&genes, &query).len(), 1);
//! ```

pub mod expression;
pub mod genes;
pub mod ld;
pub mod recomb;
pub mod variants;
