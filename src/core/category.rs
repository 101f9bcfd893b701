//! Closed category enumeration
//!
//! The multi-hot `categories` vector on every item has one dimension per
//! variant, in declaration order. The layout is fixed: adding a variant
//! changes the expected vector width across the whole catalog.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
	Thematic,
	Strategy,
	War,
	Family,
	Cgs,
	Abstract,
	Party,
	Childrens,
}

impl Category {
	pub const ALL: [Category; 8] = [
		Category::Thematic,
		Category::Strategy,
		Category::War,
		Category::Family,
		Category::Cgs,
		Category::Abstract,
		Category::Party,
		Category::Childrens,
	];

	/// Number of known categories, and the required width of every
	/// item's `categories` vector.
	pub const COUNT: usize = Self::ALL.len();

	/// Dimension of this category in the multi-hot vector
	pub fn index(self) -> usize {
		self as usize
	}

	pub fn label(self) -> &'static str {
		match self {
			Category::Thematic => "thematic",
			Category::Strategy => "strategy",
			Category::War => "war",
			Category::Family => "family",
			Category::Cgs => "cgs",
			Category::Abstract => "abstract",
			Category::Party => "party",
			Category::Childrens => "childrens",
		}
	}

	/// Resolve a user-supplied label. Unknown labels yield `None`;
	/// callers decide whether to ignore or report them.
	pub fn from_label(label: &str) -> Option<Category> {
		Self::ALL
			.iter()
			.copied()
			.find(|c| c.label().eq_ignore_ascii_case(label))
	}
}

impl fmt::Display for Category {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.label())
	}
}
