//! Weighted multi-feature distance between catalog items

use crate::config::{
	CATEGORY_WEIGHT, CLUSTER_TAG_WEIGHT, DESCRIPTION_WEIGHT, POPULARITY_WEIGHT, RATING_WEIGHT,
	THEME_WEIGHT,
};
use crate::core::Item;
use crate::error::{Error, Result};

/// Scalar dissimilarity between two items, always ≥ 0.
///
/// Combines five feature channels with fixed weights: description
/// embedding (cosine), rating and popularity (absolute difference), and
/// the cluster-tag and theme vectors (cosine). The category channel is
/// computed alongside the others but enters the sum with
/// [`CATEGORY_WEIGHT`] = 0.
pub fn distance(a: &Item, b: &Item) -> Result<f32> {
	let description = cosine_distance("embedding", &a.embedding, &b.embedding)?;
	let rating = (a.bayes_avg_rating - b.bayes_avg_rating).abs();
	let popularity = a.num_user_ratings.abs_diff(b.num_user_ratings) as f32;
	let cluster_tag = cosine_distance("cluster_tag", &a.cluster_tag, &b.cluster_tag)?;
	let theme = cosine_distance("themes", &a.themes, &b.themes)?;
	let category = cosine_distance("categories", &a.categories, &b.categories)?;

	Ok(DESCRIPTION_WEIGHT * description
		+ RATING_WEIGHT * rating
		+ POPULARITY_WEIGHT * popularity
		+ CLUSTER_TAG_WEIGHT * cluster_tag
		+ THEME_WEIGHT * theme
		+ CATEGORY_WEIGHT * category)
}

/// Cosine distance (1 - cosine similarity), clamped at 0.
///
/// A zero vector on either side makes the similarity 0/0; that case is
/// pinned to 1.0 (maximal dissimilarity) rather than left to float
/// semantics.
fn cosine_distance(channel: &'static str, a: &[f32], b: &[f32]) -> Result<f32> {
	if a.len() != b.len() {
		return Err(Error::DimensionMismatch {
			channel,
			left: a.len(),
			right: b.len(),
		});
	}

	let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
	let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
	let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

	if norm_a == 0.0 || norm_b == 0.0 {
		return Ok(1.0);
	}

	Ok((1.0 - dot / (norm_a * norm_b)).max(0.0))
}

#[cfg(test)]
mod tests {
	use super::*;

	fn item(id: u64, embedding: Vec<f32>, rating: f32, num_ratings: u64) -> Item {
		Item {
			id,
			name: format!("game-{id}"),
			embedding,
			themes: vec![1.0, 0.0],
			categories: vec![0.0; 8],
			cluster_tag: vec![1.0, 0.0, 0.0],
			num_user_ratings: num_ratings,
			bayes_avg_rating: rating,
		}
	}

	#[test]
	fn identical_items_have_zero_distance() {
		let a = item(1, vec![0.5, 0.5, 0.0], 7.2, 1200);
		let b = a.clone();
		assert_eq!(distance(&a, &b).unwrap(), 0.0);
	}

	#[test]
	fn distance_is_symmetric() {
		let a = item(1, vec![1.0, 0.0, 0.0], 6.5, 800);
		let b = item(2, vec![0.0, 1.0, 0.0], 7.9, 3400);
		assert_eq!(distance(&a, &b).unwrap(), distance(&b, &a).unwrap());
	}

	#[test]
	fn zero_vector_channel_counts_as_maximal() {
		let mut a = item(1, vec![1.0, 0.0, 0.0], 7.0, 100);
		let mut b = item(2, vec![1.0, 0.0, 0.0], 7.0, 100);
		a.themes = vec![0.0, 0.0];
		b.themes = vec![0.0, 0.0];
		// Only the theme channel differs from the identical-items case.
		let d = distance(&a, &b).unwrap();
		assert!((d - crate::config::THEME_WEIGHT).abs() < 1e-6);
	}

	#[test]
	fn mismatched_embedding_lengths_fail() {
		let a = item(1, vec![1.0, 0.0], 7.0, 100);
		let b = item(2, vec![1.0, 0.0, 0.0], 7.0, 100);
		let err = distance(&a, &b).unwrap_err();
		assert!(matches!(err, Error::DimensionMismatch { channel: "embedding", .. }));
	}

	#[test]
	fn rating_and_popularity_use_absolute_differences() {
		let a = item(1, vec![1.0, 0.0, 0.0], 6.0, 500);
		let b = item(2, vec![1.0, 0.0, 0.0], 8.0, 200);
		let d = distance(&a, &b).unwrap();
		// |6 - 8| * 1.0 + |500 - 200| * 0.9, all cosine channels identical
		assert!((d - (2.0 + 270.0)).abs() < 1e-3);
	}
}
