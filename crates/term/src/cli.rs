use std::path::PathBuf;

use clap::Parser;

#[cfg(test)]
mod tests;

#[derive(Parser, Debug)]
#[command(name = "stickies")]
#[command(about = "Sticky notes in the terminal")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Backing file for notes and theme (overrides STICKIES_STORE and config)
	#[arg(long, value_name = "PATH", conflicts_with = "ephemeral")]
	pub store: Option<PathBuf>,

	/// Configuration file (defaults to ~/.config/stickies/config.toml)
	#[arg(long, short = 'c', value_name = "PATH")]
	pub config: Option<PathBuf>,

	/// Keep everything in memory; nothing is persisted
	#[arg(long)]
	pub ephemeral: bool,

	/// Verbose logging
	#[arg(long, short = 'v')]
	pub verbose: bool,
}
