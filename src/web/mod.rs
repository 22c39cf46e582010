//! HTTP query gateway for the genome browser.
//!
//! This module serves the loaded datasets over a small JSON API built on Axum.
//! Every route is read-only and answers `GET` only.
//!
//! ## Starting the Server
//!
//! ```text
//! # Serve ./data on the default port 8000
//! locus-server serve
//!
//! # Custom data directory, port and front-end origin
//! locus-server serve --data-dir /srv/tracks --port 9000 --allow-origin https://browser.example.org
//! ```
//!
//! ## API Endpoints
//!
//! - `GET /genes?chrom=&start=&end=` - Genes overlapping a window
//! - `GET /ld/genome_builds/{build}/references/{ref}/populations/{pop}/variants?variant=` - LD partners
//! - `GET /recomb?filter=` - Recombination rates matching a filter expression
//! - `GET /pandas/genes?chrom=&start=&end=&limit=` - Variants from the cohort VCF
//! - `GET /pandas/test/genes?...` - Variants from the test VCF

pub mod envelope;
pub mod server;
