//! meeple - board game recommendations from multi-feature similarity

use anyhow::Result;
use clap::Parser;

use meeple::cli::{Cli, Command};
use meeple::commands;
use meeple::ui::{Console, Log, Quiet};

fn main() -> Result<()> {
	let cli = Cli::parse();

	let log: Box<dyn Log> = if cli.quiet {
		Box::new(Quiet)
	} else {
		Box::new(Console::new(cli.verbose))
	};

	match cli.command {
		Command::Recommend {
			catalog,
			games,
			neighbors,
			top,
			export,
			track,
			user,
		} => commands::recommend::run(
			&catalog,
			&games,
			neighbors,
			top,
			export.as_deref(),
			track.as_deref(),
			&user,
			log.as_ref(),
		),
		Command::Cluster {
			catalog,
			projection,
			labels,
			export,
			track,
			user,
		} => commands::cluster::run(
			&catalog,
			&projection,
			&labels,
			export.as_deref(),
			track.as_deref(),
			&user,
			log.as_ref(),
		),
		Command::Inspect { catalog } => commands::inspect::run(&catalog, log.as_ref()),
	}
}
