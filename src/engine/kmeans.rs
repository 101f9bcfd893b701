//! Seeded K-means over 2-D projection points
//!
//! Lloyd's algorithm with k-means++ initialization. Every source of
//! randomness comes from one seeded RNG, so a refit on the same data
//! with the same seed reproduces the labeling exactly.

use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

use crate::config::{KMEANS_MAX_ITER, KMEANS_SEED, KMEANS_TOL};

#[derive(Debug, Clone)]
pub struct KMeans {
	n_clusters: usize,
	max_iter: usize,
	tol: f32,
	seed: u64,
}

/// Outcome of one fit: per-point labels in input order plus the final
/// centroids.
#[derive(Debug, Clone)]
pub struct KMeansFit {
	pub labels: Vec<usize>,
	pub centroids: Vec<[f32; 2]>,
	/// Sum of squared distances to assigned centroids
	pub inertia: f32,
	pub n_iter: usize,
}

impl KMeans {
	pub fn new(n_clusters: usize) -> Self {
		Self {
			n_clusters,
			max_iter: KMEANS_MAX_ITER,
			tol: KMEANS_TOL,
			seed: KMEANS_SEED,
		}
	}

	pub fn with_seed(mut self, seed: u64) -> Self {
		self.seed = seed;
		self
	}

	/// Fit on `data`, which must hold at least `n_clusters` points.
	pub fn fit(&self, data: &[[f32; 2]]) -> KMeansFit {
		debug_assert!(data.len() >= self.n_clusters);

		let mut centroids = self.init_centroids(data);
		let mut labels = vec![0usize; data.len()];
		let mut n_iter = 0;

		for iter in 0..self.max_iter {
			n_iter = iter + 1;

			for (i, point) in data.iter().enumerate() {
				labels[i] = nearest_centroid(point, &centroids);
			}

			let mut sums = vec![[0.0f32; 2]; self.n_clusters];
			let mut counts = vec![0usize; self.n_clusters];
			for (point, &label) in data.iter().zip(labels.iter()) {
				sums[label][0] += point[0];
				sums[label][1] += point[1];
				counts[label] += 1;
			}

			let mut shift = 0.0f32;
			for (c, centroid) in centroids.iter_mut().enumerate() {
				// A centroid that lost every point stays where it is.
				if counts[c] == 0 {
					continue;
				}
				let updated = [
					sums[c][0] / counts[c] as f32,
					sums[c][1] / counts[c] as f32,
				];
				shift = shift.max(squared_distance(centroid, &updated));
				*centroid = updated;
			}

			if shift <= self.tol {
				break;
			}
		}

		for (i, point) in data.iter().enumerate() {
			labels[i] = nearest_centroid(point, &centroids);
		}

		let inertia = data
			.iter()
			.zip(labels.iter())
			.map(|(point, &label)| squared_distance(point, &centroids[label]))
			.sum();

		KMeansFit {
			labels,
			centroids,
			inertia,
			n_iter,
		}
	}

	/// k-means++: first centroid uniform, each further one drawn with
	/// probability proportional to squared distance from the nearest
	/// already-chosen centroid.
	fn init_centroids(&self, data: &[[f32; 2]]) -> Vec<[f32; 2]> {
		let mut rng = StdRng::seed_from_u64(self.seed);
		let mut centroids = Vec::with_capacity(self.n_clusters);
		centroids.push(data[rng.random_range(0..data.len())]);

		while centroids.len() < self.n_clusters {
			let weights: Vec<f32> = data
				.iter()
				.map(|point| {
					centroids
						.iter()
						.map(|c| squared_distance(point, c))
						.fold(f32::INFINITY, f32::min)
				})
				.collect();
			let total: f32 = weights.iter().sum();

			// Every remaining point coincides with a centroid; fall back
			// to cycling through the data deterministically.
			if total <= 0.0 {
				let idx = centroids.len() % data.len();
				centroids.push(data[idx]);
				continue;
			}

			let mut r = rng.random::<f32>() * total;
			let mut chosen = data.len() - 1;
			for (i, w) in weights.iter().enumerate() {
				r -= w;
				if r <= 0.0 {
					chosen = i;
					break;
				}
			}
			centroids.push(data[chosen]);
		}

		centroids
	}
}

fn nearest_centroid(point: &[f32; 2], centroids: &[[f32; 2]]) -> usize {
	let mut best = 0;
	let mut best_dist = f32::INFINITY;
	for (c, centroid) in centroids.iter().enumerate() {
		let dist = squared_distance(point, centroid);
		if dist < best_dist {
			best = c;
			best_dist = dist;
		}
	}
	best
}

fn squared_distance(a: &[f32; 2], b: &[f32; 2]) -> f32 {
	let dx = a[0] - b[0];
	let dy = a[1] - b[1];
	dx * dx + dy * dy
}
