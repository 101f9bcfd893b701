//! # Similarity & Clustering Engine
//!
//! Pure request-scoped computation over a read-only catalog snapshot:
//! weighted multi-feature distance, k-nearest-neighbour ranking, per-query
//! recommendation aggregation, category filtering, and silhouette-driven
//! K-means clustering.

pub mod cluster;
pub mod distance;
pub mod filter;
pub mod kmeans;
pub mod metrics;
pub mod rank;
pub mod recommend;

pub use cluster::{select_clusters, ClusterGroups};
pub use distance::distance;
pub use filter::{filter_by_categories, filter_by_labels};
pub use kmeans::{KMeans, KMeansFit};
pub use metrics::silhouette_score;
pub use rank::{rank, Neighbor};
pub use recommend::{aggregate, Recommendation, RecommendationMap};
