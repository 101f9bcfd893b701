//! K-nearest-neighbour ranking over the catalog

use rayon::prelude::*;

use crate::core::{Catalog, Item};
use crate::engine::distance::distance;
use crate::error::{Error, Result};

/// One ranked catalog item with its distance to the query.
#[derive(Debug, Clone)]
pub struct Neighbor<'a> {
	pub item: &'a Item,
	pub distance: f32,
}

/// The catalog items nearest to `query`, ascending by distance.
///
/// The query itself is excluded by id, never by value, so an accidental
/// duplicate elsewhere in the catalog still ranks. Every remaining item
/// is scored in a single dense pass (no indexing or pruning); candidate
/// distances are computed in parallel, then stable-sorted so ties keep
/// catalog order. A failed comparison aborts the whole call rather than
/// skipping the offending item.
///
/// Returns at most `k` neighbors, fewer when the catalog is smaller.
/// An empty comparable set yields an empty result, not an error.
pub fn rank<'a>(query: &Item, catalog: &'a Catalog, k: usize) -> Result<Vec<Neighbor<'a>>> {
	if k < 1 {
		return Err(Error::InvalidArgument(format!(
			"k must be at least 1, got {k}"
		)));
	}

	let mut neighbors: Vec<Neighbor<'a>> = catalog
		.items()
		.par_iter()
		.filter(|item| item.id != query.id)
		.map(|item| distance(query, item).map(|d| Neighbor { item, distance: d }))
		.collect::<Result<Vec<_>>>()?;

	neighbors.sort_by(|a, b| {
		a.distance
			.partial_cmp(&b.distance)
			.unwrap_or(std::cmp::Ordering::Equal)
	});
	neighbors.truncate(k);

	Ok(neighbors)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn item(id: u64, name: &str, embedding: Vec<f32>, rating: f32) -> Item {
		Item {
			id,
			name: name.to_string(),
			embedding,
			themes: vec![1.0, 0.0],
			categories: vec![0.0; 8],
			cluster_tag: vec![1.0, 0.0],
			num_user_ratings: 100,
			bayes_avg_rating: rating,
		}
	}

	fn catalog() -> Catalog {
		Catalog::new(vec![
			item(1, "Alpha", vec![1.0, 0.0, 0.0], 7.0),
			item(2, "Beta", vec![0.9, 0.1, 0.0], 7.0),
			item(3, "Gamma", vec![0.0, 0.0, 1.0], 7.0),
		])
		.unwrap()
	}

	#[test]
	fn query_is_excluded_by_id() {
		let cat = catalog();
		let query = cat.get(1).unwrap().clone();
		let result = rank(&query, &cat, 10).unwrap();
		assert!(result.iter().all(|n| n.item.id != 1));
	}

	#[test]
	fn nearest_comes_first() {
		let cat = catalog();
		let query = cat.get(1).unwrap().clone();
		let result = rank(&query, &cat, 1).unwrap();
		assert_eq!(result.len(), 1);
		assert_eq!(result[0].item.name, "Beta");
	}

	#[test]
	fn distances_are_non_decreasing() {
		let cat = catalog();
		let query = cat.get(2).unwrap().clone();
		let result = rank(&query, &cat, 10).unwrap();
		for pair in result.windows(2) {
			assert!(pair[0].distance <= pair[1].distance);
		}
	}

	#[test]
	fn k_bounds_the_result() {
		let cat = catalog();
		let query = cat.get(1).unwrap().clone();
		assert_eq!(rank(&query, &cat, 1).unwrap().len(), 1);
		assert_eq!(rank(&query, &cat, 50).unwrap().len(), cat.len() - 1);
	}

	#[test]
	fn zero_k_is_rejected() {
		let cat = catalog();
		let query = cat.get(1).unwrap().clone();
		assert!(matches!(
			rank(&query, &cat, 0),
			Err(Error::InvalidArgument(_))
		));
	}

	#[test]
	fn empty_comparable_set_yields_empty_result() {
		let cat = Catalog::new(vec![item(1, "Solo", vec![1.0, 0.0, 0.0], 7.0)]).unwrap();
		let query = cat.get(1).unwrap().clone();
		assert!(rank(&query, &cat, 5).unwrap().is_empty());
	}
}
