//! Cluster command - split a category subset into representative groups

use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use colored::Colorize;
use serde_json::json;

use crate::core::{Catalog, Category, Item};
use crate::engine::{filter_by_categories, select_clusters, ClusterGroups};
use crate::storage;
use crate::track::InteractionTracker;
use crate::ui::Log;

#[allow(clippy::too_many_arguments)]
pub fn run(
	catalog_path: &Path,
	projection_path: &Path,
	labels: &[String],
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

	let projection = storage::load_projection(projection_path)?;
	log.debug(&format!("Loaded {} projection points", projection.len()));

	let mut selected: Vec<Category> = Vec::with_capacity(labels.len());
	for label in labels {
		match Category::from_label(label) {
			Some(category) => selected.push(category),
			None => log.warn(&format!("Ignoring unknown category \"{}\"", label)),
		}
	}

	let subset = filter_by_categories(&catalog, &selected);
	log.info_with(
		"Filtered catalog",
		&[
			("labels", selected.iter().map(|c| c.label()).collect::<Vec<_>>().join(",")),
			("items", subset.len().to_string()),
		],
	);

	let groups = select_clusters(&subset, &projection, log)?;

	print_groups(&catalog, &groups);
	eprintln!(
		"\n{}",
		format!("Completed in {:.2}s", start.elapsed().as_secs_f32()).dimmed()
	);

	if let Some(track_path) = track {
		record_event(track_path, user, &selected, &groups, log);
	}

	if let Some(export_path) = export {
		let json = serde_json::to_string_pretty(&groups)?;
		fs::write(export_path, json)
			.with_context(|| format!("Failed to write {}", export_path.display()))?;
		log.success(&format!("Exported groups to {}", export_path.display()));
	}

	Ok(())
}

fn print_groups(catalog: &Catalog, groups: &ClusterGroups) {
	for (title, ids) in [("Group A", &groups.group_a), ("Group B", &groups.group_b)] {
		println!(
			"\n{} {}",
			title.bright_cyan().bold(),
			format!("({} games)", ids.len()).dimmed()
		);

		for id in ids {
			match catalog.get(*id) {
				Some(item) => print_member(item),
				None => println!("  {} {}", "?".bright_black(), format!("id {}", id).dimmed()),
			}
		}
	}
}

fn print_member(item: &Item) {
	println!(
		"  {} {} {}",
		"•".bright_blue(),
		item.name.bright_white(),
		format!("{:.2}", item.bayes_avg_rating).bright_green()
	);
}

fn record_event(
	path: &Path,
	user: &str,
	selected: &[Category],
	groups: &ClusterGroups,
	log: &dyn Log,
) {
	let result = InteractionTracker::create(path, user).and_then(|mut tracker| {
		let labels: Vec<&str> = selected.iter().map(|c| c.label()).collect();
		tracker.track("categories_selected", json!({ "labels": labels }))?;
		tracker.track("cluster_groups_displayed", serde_json::to_value(groups)?)
	});

	if let Err(err) = result {
		log.error(&format!("Failed to track interaction: {}", err));
	}
}
