//! Interface layer: parsing order snapshots from external sources.

pub mod json;
