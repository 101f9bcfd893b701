//! Category-based catalog filtering

use crate::core::{Catalog, Category, Item};

/// Items tagged with at least one of the selected categories, in
/// catalog order. An empty selection keeps nothing.
pub fn filter_by_categories<'a>(catalog: &'a Catalog, selected: &[Category]) -> Vec<&'a Item> {
	if selected.is_empty() {
		return Vec::new();
	}

	catalog
		.iter()
		.filter(|item| selected.iter().any(|&c| item.has_category(c)))
		.collect()
}

/// Label-level entry point: resolves each label against the closed
/// category set and filters on the matches. Unknown labels are ignored,
/// not reported.
pub fn filter_by_labels<'a>(catalog: &'a Catalog, selected_labels: &[String]) -> Vec<&'a Item> {
	let selected: Vec<Category> = selected_labels
		.iter()
		.filter_map(|label| Category::from_label(label))
		.collect();

	filter_by_categories(catalog, &selected)
}
