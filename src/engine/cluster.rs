//! Automatic cluster-count selection and representative extraction

use std::collections::HashMap;

use serde::Serialize;

use crate::config::{MAX_CLUSTERS, MIN_CLUSTERS, REPRESENTATIVES_PER_GROUP};
use crate::core::Item;
use crate::engine::kmeans::KMeans;
use crate::engine::metrics::silhouette_score;
use crate::error::{Error, Result};
use crate::ui::Log;

/// Ids of the top-rated members of the first two clusters.
#[derive(Debug, Clone, Serialize)]
pub struct ClusterGroups {
	pub group_a: Vec<u64>,
	pub group_b: Vec<u64>,
}

/// Split a filtered subset into automatically sized clusters and pull
/// the top-rated representatives out of clusters 0 and 1.
///
/// Sweeps every candidate cluster count in `[MIN_CLUSTERS, MAX_CLUSTERS]`
/// that is smaller than the subset, scores each seeded K-means fit by
/// silhouette, and keeps the first maximum. The winning count is refit
/// on the same data; with a fixed seed the refit reproduces the scored
/// labeling. The representative groups come from cluster labels 0 and 1
/// literally, not from the two largest clusters.
///
/// `projection` must supply a 2-D point for every subset item.
pub fn select_clusters(
	subset: &[&Item],
	projection: &HashMap<u64, [f32; 2]>,
	log: &dyn Log,
) -> Result<ClusterGroups> {
	let n = subset.len();
	if n < 2 * MIN_CLUSTERS {
		return Err(Error::InsufficientData {
			subset_size: n,
			reason: format!("at least {} items are needed to cluster", 2 * MIN_CLUSTERS),
		});
	}

	let mut points = Vec::with_capacity(n);
	for item in subset {
		match projection.get(&item.id) {
			Some(point) => points.push(*point),
			None => {
				return Err(Error::MissingField {
					field: "projection",
					id: item.id,
				})
			}
		}
	}

	let (best_count, best_score) = best_cluster_count(&points, log)?;
	log.info_with(
		"Selected cluster count",
		&[
			("clusters", best_count.to_string()),
			("silhouette", format!("{best_score:.3}")),
			("items", n.to_string()),
		],
	);

	let fit = KMeans::new(best_count).fit(&points);

	let group_a = top_rated(subset, &fit.labels, 0);
	let group_b = top_rated(subset, &fit.labels, 1);

	for (label, group) in [(0, &group_a), (1, &group_b)] {
		if group.is_empty() {
			return Err(Error::InsufficientData {
				subset_size: n,
				reason: format!("cluster {label} is empty after the final fit"),
			});
		}
	}

	Ok(ClusterGroups { group_a, group_b })
}

/// Silhouette sweep over the candidate range. Candidate counts that are
/// not smaller than the subset are skipped; ties keep the smallest
/// count (first maximum while scanning ascending).
fn best_cluster_count(points: &[[f32; 2]], log: &dyn Log) -> Result<(usize, f32)> {
	let mut best: Option<(usize, f32)> = None;

	for count in MIN_CLUSTERS..=MAX_CLUSTERS {
		if count >= points.len() {
			break;
		}

		let fit = KMeans::new(count).fit(points);
		let score = silhouette_score(points, &fit.labels);
		log.debug_with(
			"Scored candidate clustering",
			&[
				("clusters", count.to_string()),
				("silhouette", format!("{score:.3}")),
			],
		);

		if best.map_or(true, |(_, s)| score > s) {
			best = Some((count, score));
		}
	}

	best.ok_or_else(|| Error::InsufficientData {
		subset_size: points.len(),
		reason: format!("no candidate cluster count below {} remains", points.len()),
	})
}

/// Members of one cluster label, best-rated first, capped at
/// `REPRESENTATIVES_PER_GROUP`. Rating ties keep subset order.
fn top_rated(subset: &[&Item], labels: &[usize], label: usize) -> Vec<u64> {
	let mut members: Vec<&Item> = subset
		.iter()
		.zip(labels.iter())
		.filter(|(_, &l)| l == label)
		.map(|(item, _)| *item)
		.collect();

	members.sort_by(|a, b| {
		b.bayes_avg_rating
			.partial_cmp(&a.bayes_avg_rating)
			.unwrap_or(std::cmp::Ordering::Equal)
	});

	members
		.iter()
		.take(REPRESENTATIVES_PER_GROUP)
		.map(|item| item.id)
		.collect()
}
