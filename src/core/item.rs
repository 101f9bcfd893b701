//! Catalog items and the validated catalog snapshot

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::core::Category;
use crate::error::{Error, Result};

/// One board game, with its precomputed feature channels.
///
/// All vector channels are produced upstream (embedding model, theme
/// extraction, prior clustering) and are treated as opaque here. The
/// catalog guarantees their lengths are consistent across items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
	/// Stable unique identifier
	pub id: u64,
	/// Display name, not guaranteed unique
	pub name: String,
	/// Dense semantic description vector
	pub embedding: Vec<f32>,
	/// Theme indicator vector
	pub themes: Vec<f32>,
	/// Multi-hot category membership, one dimension per [`Category`]
	pub categories: Vec<f32>,
	/// Previously computed grouping signal, used as a similarity channel
	pub cluster_tag: Vec<f32>,
	/// Popularity proxy
	pub num_user_ratings: u64,
	/// Shrinkage-adjusted average rating
	pub bayes_avg_rating: f32,
}

impl Item {
	/// Whether this item is tagged with the given category
	pub fn has_category(&self, category: Category) -> bool {
		self.categories
			.get(category.index())
			.is_some_and(|&v| v > 0.0)
	}
}

/// Read-only catalog snapshot, validated on construction.
///
/// Validation enforces the invariants the engine relies on: unique ids,
/// non-empty vector channels, and catalog-wide consistent channel
/// dimensionalities. A catalog that passes construction never produces a
/// `DimensionMismatch` from the distance engine.
#[derive(Debug, Clone)]
pub struct Catalog {
	items: Vec<Item>,
	by_id: HashMap<u64, usize>,
}

impl Catalog {
	pub fn new(items: Vec<Item>) -> Result<Self> {
		let mut by_id = HashMap::with_capacity(items.len());

		for (idx, item) in items.iter().enumerate() {
			validate_channels(item)?;

			if let Some(first) = items.first() {
				check_dims("embedding", first.embedding.len(), item.embedding.len())?;
				check_dims("themes", first.themes.len(), item.themes.len())?;
				check_dims("cluster_tag", first.cluster_tag.len(), item.cluster_tag.len())?;
			}

			// The categories channel doubles as the filter index, so its
			// width is pinned to the closed category set.
			check_dims("categories", Category::COUNT, item.categories.len())?;

			if by_id.insert(item.id, idx).is_some() {
				return Err(Error::InvalidArgument(format!(
					"duplicate item id {} in catalog",
					item.id
				)));
			}
		}

		Ok(Self { items, by_id })
	}

	pub fn items(&self) -> &[Item] {
		&self.items
	}

	pub fn len(&self) -> usize {
		self.items.len()
	}

	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	pub fn get(&self, id: u64) -> Option<&Item> {
		self.by_id.get(&id).map(|&idx| &self.items[idx])
	}

	/// First item with the given name, in catalog order
	pub fn find_by_name(&self, name: &str) -> Option<&Item> {
		self.items.iter().find(|item| item.name == name)
	}

	pub fn iter(&self) -> std::slice::Iter<'_, Item> {
		self.items.iter()
	}

	/// Dimensionality of the description embedding, `None` for an empty catalog
	pub fn embedding_dim(&self) -> Option<usize> {
		self.items.first().map(|item| item.embedding.len())
	}
}

fn validate_channels(item: &Item) -> Result<()> {
	for (field, len) in [
		("embedding", item.embedding.len()),
		("themes", item.themes.len()),
		("categories", item.categories.len()),
		("cluster_tag", item.cluster_tag.len()),
	] {
		if len == 0 {
			return Err(Error::MissingField { field, id: item.id });
		}
	}
	Ok(())
}

fn check_dims(channel: &'static str, expected: usize, actual: usize) -> Result<()> {
	if expected != actual {
		return Err(Error::DimensionMismatch {
			channel,
			left: expected,
			right: actual,
		});
	}
	Ok(())
}
