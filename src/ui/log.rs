//! Logging interface and console backend
//!
//! Components that emit diagnostics receive a `&dyn Log`; the concrete
//! backend is chosen once, at the composition root. Tests substitute
//! [`Quiet`].

use colored::Colorize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
	Info,
	Success,
	Warn,
	Error,
	Debug,
}

/// Structured logging capability: a level, a message, and optional
/// key/value fields.
pub trait Log {
	fn record(&self, level: Level, msg: &str, fields: &[(&'static str, String)]);

	fn info(&self, msg: &str) {
		self.record(Level::Info, msg, &[]);
	}

	fn success(&self, msg: &str) {
		self.record(Level::Success, msg, &[]);
	}

	fn warn(&self, msg: &str) {
		self.record(Level::Warn, msg, &[]);
	}

	fn error(&self, msg: &str) {
		self.record(Level::Error, msg, &[]);
	}

	fn debug(&self, msg: &str) {
		self.record(Level::Debug, msg, &[]);
	}

	fn info_with(&self, msg: &str, fields: &[(&'static str, String)]) {
		self.record(Level::Info, msg, fields);
	}

	fn debug_with(&self, msg: &str, fields: &[(&'static str, String)]) {
		self.record(Level::Debug, msg, fields);
	}
}

/// Colored terminal backend. Debug records are dropped unless verbose.
pub struct Console {
	verbose: bool,
}

impl Console {
	pub fn new(verbose: bool) -> Self {
		Self { verbose }
	}
}

impl Log for Console {
	fn record(&self, level: Level, msg: &str, fields: &[(&'static str, String)]) {
		if level == Level::Debug && !self.verbose {
			return;
		}

		let prefix = match level {
			Level::Info => "ℹ".bright_blue().bold(),
			Level::Success => "✓".bright_green().bold(),
			Level::Warn => "⚠".bright_yellow().bold(),
			Level::Error => "✗".bright_red().bold(),
			Level::Debug => "⚙".bright_black().bold(),
		};

		let body = match level {
			Level::Debug => msg.dimmed().to_string(),
			_ => msg.bright_white().to_string(),
		};

		let mut line = format!("{} {}", prefix, body);
		for (key, value) in fields {
			line.push(' ');
			line.push_str(&format!("{}={}", key, value).dimmed().to_string());
		}

		println!("{}", line);
	}
}

/// Discards everything. The backend for tests and `--quiet` runs.
pub struct Quiet;

impl Log for Quiet {
	fn record(&self, _level: Level, _msg: &str, _fields: &[(&'static str, String)]) {}
}
