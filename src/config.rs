//! Engine configuration and constants

// === Distance Channel Weights ===
pub const DESCRIPTION_WEIGHT: f32 = 1.0;
pub const RATING_WEIGHT: f32 = 1.0;
pub const POPULARITY_WEIGHT: f32 = 0.9;
pub const CLUSTER_TAG_WEIGHT: f32 = 0.03;
pub const THEME_WEIGHT: f32 = 0.04;

/// The category channel is computed but carries no weight in the final sum.
/// Kept as a named constant so the omission is inspectable and a future
/// weight change is a one-line edit.
pub const CATEGORY_WEIGHT: f32 = 0.0;

// === Recommendation Defaults ===
pub const DEFAULT_K_NEIGHBORS: usize = 20;
pub const DEFAULT_TOP_N: usize = 5;

// === Clustering ===
pub const MIN_CLUSTERS: usize = 2;
pub const MAX_CLUSTERS: usize = 9;
pub const KMEANS_SEED: u64 = 42;
pub const KMEANS_MAX_ITER: usize = 100;
pub const KMEANS_TOL: f32 = 1e-4;
pub const REPRESENTATIVES_PER_GROUP: usize = 5;
