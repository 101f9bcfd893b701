//! Per-query recommendation aggregation

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::core::{Catalog, Item};
use crate::engine::rank::rank;
use crate::error::{Error, Result};
use crate::ui::Log;

/// Recommendations for a single query item.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
	/// Names of the recommended items, nearest first
	pub names: Vec<String>,
	/// Mean `bayes_avg_rating` over the full k-neighbor set, a
	/// diagnostic statistic only (nothing is filtered on it)
	pub mean_neighbor_rating: f32,
}

/// Ordered map from query item name to its recommendations.
///
/// Entries keep query order. Two query items sharing a name collapse to
/// one entry: the later query overwrites the earlier one in place, at
/// the earlier position.
#[derive(Debug, Clone, Default)]
pub struct RecommendationMap {
	entries: Vec<(String, Recommendation)>,
}

impl RecommendationMap {
	fn insert(&mut self, name: String, rec: Recommendation) {
		match self.entries.iter_mut().find(|(n, _)| *n == name) {
			Some(entry) => entry.1 = rec,
			None => self.entries.push((name, rec)),
		}
	}

	pub fn get(&self, name: &str) -> Option<&Recommendation> {
		self.entries
			.iter()
			.find(|(n, _)| n == name)
			.map(|(_, rec)| rec)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &Recommendation)> {
		self.entries.iter().map(|(n, rec)| (n.as_str(), rec))
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

impl Serialize for RecommendationMap {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		let mut map = serializer.serialize_map(Some(self.entries.len()))?;
		for (name, rec) in &self.entries {
			map.serialize_entry(name, rec)?;
		}
		map.end()
	}
}

/// Ranked recommendations for each query item.
///
/// Runs the neighbor ranking once per query with `k_neighbors`, then
/// takes the first `top_n` names as that query's list. `top_n` larger
/// than `k_neighbors` simply yields shorter lists. Any failed ranking
/// aborts the whole aggregation.
pub fn aggregate(
	queries: &[&Item],
	catalog: &Catalog,
	k_neighbors: usize,
	top_n: usize,
	log: &dyn Log,
) -> Result<RecommendationMap> {
	if queries.is_empty() {
		return Err(Error::InvalidArgument(
			"query set must not be empty".to_string(),
		));
	}
	if top_n < 1 {
		return Err(Error::InvalidArgument(format!(
			"top_n must be at least 1, got {top_n}"
		)));
	}

	let mut map = RecommendationMap::default();

	for query in queries {
		let neighbors = rank(query, catalog, k_neighbors)?;

		let mean_neighbor_rating = if neighbors.is_empty() {
			0.0
		} else {
			neighbors
				.iter()
				.map(|n| n.item.bayes_avg_rating)
				.sum::<f32>() / neighbors.len() as f32
		};

		log.debug_with(
			"Ranked neighbors",
			&[
				("query", query.name.clone()),
				("neighbors", neighbors.len().to_string()),
				("mean_rating", format!("{mean_neighbor_rating:.2}")),
			],
		);

		let names = neighbors
			.iter()
			.take(top_n)
			.map(|n| n.item.name.clone())
			.collect();

		map.insert(
			query.name.clone(),
			Recommendation {
				names,
				mean_neighbor_rating,
			},
		);
	}

	Ok(map)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::ui::Quiet;

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

	#[test]
	fn one_entry_per_query_in_query_order() {
		let cat = Catalog::new(vec![
			item(1, "Alpha", vec![1.0, 0.0], 7.0),
			item(2, "Beta", vec![0.9, 0.1], 7.5),
			item(3, "Gamma", vec![0.0, 1.0], 8.0),
		])
		.unwrap();
		let queries = [cat.get(3).unwrap(), cat.get(1).unwrap()];

		let map = aggregate(&queries, &cat, 2, 2, &Quiet).unwrap();
		let keys: Vec<&str> = map.iter().map(|(n, _)| n).collect();
		assert_eq!(keys, ["Gamma", "Alpha"]);
	}

	#[test]
	fn duplicate_query_names_collapse_to_last() {
		let cat = Catalog::new(vec![
			item(1, "Twin", vec![1.0, 0.0], 7.0),
			item(2, "Twin", vec![0.0, 1.0], 7.0),
			item(3, "Near A", vec![0.9, 0.1], 7.0),
			item(4, "Near B", vec![0.1, 0.9], 7.0),
		])
		.unwrap();
		let queries = [cat.get(1).unwrap(), cat.get(2).unwrap()];

		let map = aggregate(&queries, &cat, 1, 1, &Quiet).unwrap();
		assert_eq!(map.len(), 1);
		// Second "Twin" wins: its nearest neighbor is "Near B".
		assert_eq!(map.get("Twin").unwrap().names, ["Near B"]);
	}

	#[test]
	fn top_n_larger_than_k_yields_shorter_lists() {
		let cat = Catalog::new(vec![
			item(1, "Alpha", vec![1.0, 0.0], 7.0),
			item(2, "Beta", vec![0.9, 0.1], 7.5),
			item(3, "Gamma", vec![0.0, 1.0], 8.0),
		])
		.unwrap();
		let queries = [cat.get(1).unwrap()];

		let map = aggregate(&queries, &cat, 1, 5, &Quiet).unwrap();
		assert_eq!(map.get("Alpha").unwrap().names.len(), 1);
	}

	#[test]
	fn empty_query_set_is_rejected() {
		let cat = Catalog::new(vec![item(1, "Alpha", vec![1.0, 0.0], 7.0)]).unwrap();
		assert!(matches!(
			aggregate(&[], &cat, 5, 5, &Quiet),
			Err(Error::InvalidArgument(_))
		));
	}
}
