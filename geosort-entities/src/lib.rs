#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # geosort-entities
//!
//! Reusable, agnostic geo entities for geosort.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod geo;
