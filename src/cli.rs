use clap::builder::styling::{AnsiColor, Color, Style};
use clap::builder::Styles;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

use crate::config::{DEFAULT_K_NEIGHBORS, DEFAULT_TOP_N};

fn styles() -> Styles {
	Styles::styled()
		.header(Style::new().bold().fg_color(Some(Color::Ansi(AnsiColor::Blue))))
		.usage(Style::new().bold().fg_color(Some(Color::Ansi(AnsiColor::Blue))))
		.literal(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue))))
		.placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow))))
		.valid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue))))
		.invalid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red))))
}

#[derive(Parser, Debug)]
#[command(
	name = "meeple",
	author,
	version,
	about = "Board game recommendations from multi-feature similarity",
	styles = styles(),
	disable_help_subcommand = true,
	after_help = format!(
		"{title}
  {meeple} {recommend} {recommend_args}   {recommend_desc}
  {meeple} {cluster}   {cluster_args}   {cluster_desc}
  {meeple} {inspect}   {inspect_args}                      {inspect_desc}",
		title = "Examples:".bright_blue().bold(),
		meeple = "meeple".bright_blue(),
		recommend = "recommend".yellow(),
		recommend_args = "-c games.json -g \"Root\" -g \"Scythe\"",
		recommend_desc = "Rank neighbors per game".dimmed(),
		cluster = "cluster".yellow(),
		cluster_args = "-c games.json -p points.json -l war",
		cluster_desc = "Cluster a category subset".dimmed(),
		inspect = "inspect".yellow(),
		inspect_args = "-c games.json",
		inspect_desc = "Show catalog statistics".dimmed(),
	),
)]
pub struct Cli {
	/// Enable verbose debug output
	#[arg(short = 'v', long = "verbose", global = true)]
	pub verbose: bool,

	/// Suppress all diagnostic output
	#[arg(short = 'q', long = "quiet", global = true, conflicts_with = "verbose")]
	pub quiet: bool,

	#[command(subcommand)]
	pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
	/// Recommend games similar to the selected ones
	Recommend {
		/// Catalog snapshot (JSON array of games)
		#[arg(short = 'c', long = "catalog")]
		catalog: PathBuf,

		/// Selected game name (repeat for several)
		#[arg(short = 'g', long = "game", required = true)]
		games: Vec<String>,

		/// Neighbors ranked per game
		#[arg(short = 'k', long = "neighbors", default_value_t = DEFAULT_K_NEIGHBORS)]
		neighbors: usize,

		/// Recommendations shown per game
		#[arg(short = 'n', long = "top", default_value_t = DEFAULT_TOP_N)]
		top: usize,

		/// Write the recommendation map to a JSON file
		#[arg(long = "export", value_name = "PATH")]
		export: Option<PathBuf>,

		/// Append interaction events to this JSONL file
		#[arg(long = "track", value_name = "PATH")]
		track: Option<PathBuf>,

		/// User id recorded in tracked events
		#[arg(short = 'u', long = "user", default_value = "anonymous")]
		user: String,
	},

	/// Cluster a category-filtered subset and show representative games
	Cluster {
		/// Catalog snapshot (JSON array of games)
		#[arg(short = 'c', long = "catalog")]
		catalog: PathBuf,

		/// 2-D projection file (JSON map of id to point)
		#[arg(short = 'p', long = "projection")]
		projection: PathBuf,

		/// Category label to include (repeat for several):
		/// thematic, strategy, war, family, cgs, abstract, party, childrens
		#[arg(short = 'l', long = "label", required = true)]
		labels: Vec<String>,

		/// Write the representative groups to a JSON file
		#[arg(long = "export", value_name = "PATH")]
		export: Option<PathBuf>,

		/// Append interaction events to this JSONL file
		#[arg(long = "track", value_name = "PATH")]
		track: Option<PathBuf>,

		/// User id recorded in tracked events
		#[arg(short = 'u', long = "user", default_value = "anonymous")]
		user: String,
	},

	/// Show catalog statistics
	Inspect {
		/// Catalog snapshot (JSON array of games)
		#[arg(short = 'c', long = "catalog")]
		catalog: PathBuf,
	},
}
