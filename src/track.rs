//! JSON Lines interaction tracking
//!
//! One tracker instance per run, built at the composition root and
//! passed down explicitly. Events append to a `.jsonl` file; engine
//! output serializes straight into the `details` payload.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use chrono::Utc;
use rand::RngExt;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Serialize)]
pub struct Event {
	pub event_id: String,
	pub event_type: String,
	pub timestamp: String,
	pub user_id: String,
	pub session_id: String,
	pub details: Value,
}

pub struct InteractionTracker {
	file: File,
	user_id: String,
	session_id: String,
	sequence: u64,
}

impl InteractionTracker {
	/// Open (or create) the event log at `path` in append mode and
	/// start a fresh session.
	pub fn create(path: &Path, user_id: &str) -> std::io::Result<Self> {
		let file = OpenOptions::new().create(true).append(true).open(path)?;
		Ok(Self {
			file,
			user_id: user_id.to_string(),
			session_id: random_id(),
			sequence: 0,
		})
	}

	pub fn session_id(&self) -> &str {
		&self.session_id
	}

	/// Append one event. Callers report failures through their logging
	/// interface and keep going; a lost event never aborts a request.
	pub fn track(&mut self, event_type: &str, details: Value) -> std::io::Result<()> {
		self.sequence += 1;
		let event = Event {
			event_id: format!("{}-{:04}", self.session_id, self.sequence),
			event_type: event_type.to_string(),
			timestamp: Utc::now().to_rfc3339(),
			user_id: self.user_id.clone(),
			session_id: self.session_id.clone(),
			details,
		};

		let line = serde_json::to_string(&event)?;
		writeln!(self.file, "{}", line)
	}
}

fn random_id() -> String {
	let mut rng = rand::rng();
	(0..12)
		.map(|_| char::from_digit(rng.random_range(0..16), 16).unwrap_or('0'))
		.collect()
}
