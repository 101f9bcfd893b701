//! Catalog and projection snapshot loading
//!
//! One narrow collaborator interface: a JSON array of items, produced
//! upstream with embeddings and Bayesian ratings already computed, and
//! an optional JSON object mapping item id to a 2-D projection point.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::core::{Catalog, Item};

/// Read a catalog snapshot and validate it into a [`Catalog`].
///
/// Validation happens here, before any engine call: uniform channel
/// dimensionalities, unique ids, no empty vector fields.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
	let content = fs::read_to_string(path)
		.with_context(|| format!("Failed to read catalog file {}", path.display()))?;
	let items: Vec<Item> = serde_json::from_str(&content)
		.with_context(|| format!("Failed to parse catalog file {}", path.display()))?;
	let catalog = Catalog::new(items)
		.with_context(|| format!("Invalid catalog in {}", path.display()))?;
	Ok(catalog)
}

/// Read a projection file mapping item id to its 2-D point.
pub fn load_projection(path: &Path) -> Result<HashMap<u64, [f32; 2]>> {
	let content = fs::read_to_string(path)
		.with_context(|| format!("Failed to read projection file {}", path.display()))?;
	let projection: HashMap<u64, [f32; 2]> = serde_json::from_str(&content)
		.with_context(|| format!("Failed to parse projection file {}", path.display()))?;
	Ok(projection)
}
