//! # geosort-core
//!
//! Sorting of heterogeneous collections by the great-circle distance
//! of a nested location to a center point.

pub mod path;
pub mod resolve;
pub mod usecases;
pub mod util;
pub mod value;

pub use geosort_entities as entities;
