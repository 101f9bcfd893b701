//! Engine error taxonomy
//!
//! Every engine operation fails loudly and specifically: a bad comparison
//! aborts its enclosing ranking call instead of silently skipping the
//! offending item, which would corrupt rank ordering without the caller
//! noticing.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
	/// Two items disagree on the length of a vector channel.
	#[error("dimension mismatch in {channel} channel: {left} vs {right}")]
	DimensionMismatch {
		channel: &'static str,
		left: usize,
		right: usize,
	},

	/// Caller-supplied parameter out of contract.
	#[error("invalid argument: {0}")]
	InvalidArgument(String),

	/// The filtered subset cannot form meaningful clusters.
	#[error("insufficient data for clustering ({subset_size} items): {reason}")]
	InsufficientData { subset_size: usize, reason: String },

	/// An item lacks a required vector attribute.
	#[error("item {id} is missing the {field} field")]
	MissingField { field: &'static str, id: u64 },
}
