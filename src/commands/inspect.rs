//! Inspect command - catalog statistics

use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use crate::core::{Catalog, Category};
use crate::storage;
use crate::ui::Log;

pub fn run(catalog_path: &Path, log: &dyn Log) -> Result<()> {
	let catalog = storage::load_catalog(catalog_path)?;
	log.success(&format!(
		"Loaded {} games from {}",
		catalog.len(),
		catalog_path.display()
	));

	print_dimensions(&catalog);
	print_categories(&catalog);
	print_top_rated(&catalog, 5);

	Ok(())
}

fn print_dimensions(catalog: &Catalog) {
	let Some(first) = catalog.items().first() else {
		return;
	};

	println!("\n{}", "Channels".bright_cyan().bold());
	for (name, dim) in [
		("embedding", first.embedding.len()),
		("themes", first.themes.len()),
		("categories", first.categories.len()),
		("cluster_tag", first.cluster_tag.len()),
	] {
		println!(
			"  {} {}",
			format!("{:<12}", name).bright_white(),
			format!("{}D", dim).dimmed()
		);
	}
}

fn print_categories(catalog: &Catalog) {
	println!("\n{}", "Categories".bright_cyan().bold());
	for category in Category::ALL {
		let count = catalog
			.iter()
			.filter(|item| item.has_category(category))
			.count();
		println!(
			"  {} {}",
			format!("{:<12}", category.label()).bright_white(),
			format!("{} games", count).dimmed()
		);
	}
}

fn print_top_rated(catalog: &Catalog, limit: usize) {
	let mut items: Vec<_> = catalog.iter().collect();
	items.sort_by(|a, b| {
		b.bayes_avg_rating
			.partial_cmp(&a.bayes_avg_rating)
			.unwrap_or(std::cmp::Ordering::Equal)
	});

	println!("\n{}", "Top rated".bright_cyan().bold());
	for item in items.iter().take(limit) {
		println!(
			"  {} {} {}",
			format!("{:.2}", item.bayes_avg_rating).bright_green(),
			item.name.bright_white(),
			format!("{} ratings", item.num_user_ratings).dimmed()
		);
	}
}
