//! In-memory dataset store.
//!
//! The store holds the gene set, LD pairs and recombination table after they
//! are loaded at startup, plus the locations of the streamed variant sources.
//! It has no mutation API: build it with [`dataset::DatasetStore::load`] and
//! share it behind an `Arc`.
//!
//! ## Example
//!
//! ```rust,no_run
//! use locus_server::store::dataset::{DataPaths, DatasetStore};
//! use std::path::Path;
//!
//! let store = DatasetStore::load(&DataPaths::from_dir(Path::new("data"))).unwrap();
//! println!("{} genes loaded", store.genes().len());
//! ```

pub mod dataset;
