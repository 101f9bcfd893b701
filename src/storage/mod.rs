//! Catalog persistence

pub mod catalog;

pub use catalog::{load_catalog, load_projection};
