//! Core data types for the annotation datasets.
//!
//! This module provides the record and query types used throughout the library:
//!
//! - [`gene::Gene`]: A gene span with its opaque annotation fields
//! - [`ld::LdPair`]: A variant pair with its correlation statistics
//! - [`recomb::RecombTable`]: The columnar recombination rate series
//! - [`variant::Variant`]: The fixed columns of one VCF record
//! - [`query`]: Typed constraint sets for each dataset
//!
//! ## Coordinates
//!
//! Positions are taken as written in the source datasets; no conversion
//! between 0-based and 1-based systems is performed.

pub mod gene;
pub mod ld;
pub mod query;
pub mod recomb;
pub mod variant;
