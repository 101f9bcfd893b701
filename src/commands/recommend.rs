//! Recommend command - rank similar games per selected game

use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use colored::Colorize;
use serde_json::json;

use crate::core::Item;
use crate::engine::{aggregate, RecommendationMap};
use crate::storage;
use crate::track::InteractionTracker;
use crate::ui::Log;

#[allow(clippy::too_many_arguments)]
pub fn run(
	catalog_path: &Path,
	games: &[String],
	k_neighbors: usize,
	top_n: usize,
	export: Option<&Path>,
	track: Option<&Path>,
	user: &str,
	log: &dyn Log,
) -> Result<()> {
	let start = Instant::now();

	let catalog = storage::load_catalog(catalog_path)?;
	log.success(&format!(
		"Loaded {} games from {}",
		catalog.len(),
		catalog_path.display()
	));
	if let Some(dim) = catalog.embedding_dim() {
		log.debug(&format!("Embedding dimension: {}D", dim));
	}

	// Resolve selections by name; unknown names are reported, not fatal,
	// as long as at least one query remains.
	let mut queries: Vec<&Item> = Vec::with_capacity(games.len());
	for name in games {
		match catalog.find_by_name(name) {
			Some(item) => queries.push(item),
			None => log.warn(&format!("No game named \"{}\" in the catalog", name)),
		}
	}
	if queries.is_empty() {
		bail!("None of the selected games exist in the catalog");
	}

	let recommendations = aggregate(&queries, &catalog, k_neighbors, top_n, log)?;

	print_recommendations(&recommendations);
	eprintln!(
		"\n{}",
		format!("Completed in {:.2}s", start.elapsed().as_secs_f32()).dimmed()
	);

	if let Some(track_path) = track {
		record_event(track_path, user, &queries, &recommendations, log);
	}

	if let Some(export_path) = export {
		let json = serde_json::to_string_pretty(&recommendations)?;
		fs::write(export_path, json)
			.with_context(|| format!("Failed to write {}", export_path.display()))?;
		log.success(&format!("Exported recommendations to {}", export_path.display()));
	}

	Ok(())
}

fn print_recommendations(recommendations: &RecommendationMap) {
	for (query, rec) in recommendations.iter() {
		println!(
			"\n{} {} {}",
			"Because you picked".bright_white(),
			query.bright_cyan().bold(),
			format!("(neighbor avg {:.2})", rec.mean_neighbor_rating).dimmed()
		);

		for (pos, name) in rec.names.iter().enumerate() {
			println!(
				"  {} {}",
				format!("{}.", pos + 1).bright_black(),
				name.bright_white()
			);
		}
	}
}

/// A tracker failure downgrades to an error log; the recommendations
/// were already shown and must not be retracted over a side channel.
fn record_event(
	path: &Path,
	user: &str,
	queries: &[&Item],
	recommendations: &RecommendationMap,
	log: &dyn Log,
) {
	let result = InteractionTracker::create(path, user).and_then(|mut tracker| {
		let selected: Vec<&str> = queries.iter().map(|q| q.name.as_str()).collect();
		tracker.track("games_selected", json!({ "names": selected }))?;
		tracker.track(
			"recommendations_displayed",
			serde_json::to_value(recommendations)?,
		)
	});

	if let Err(err) = result {
		log.error(&format!("Failed to track interaction: {}", err));
	}
}
