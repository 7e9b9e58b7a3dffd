mod app;
mod cli;
mod keymap;
mod layout;
mod logging;
mod palette;
mod render;

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use stickies_config::{Config, STORE_ENV};
use stickies_primitives::RandomColors;
use stickies_store::{FileStore, KeyValueStore, MemoryStore, Storage};
use stickies_view::ViewSync;

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();

	let config = Config::load_or_default(cli.config.as_deref()).context("loading configuration")?;
	logging::setup_tracing(&config.log, cli.verbose);

	let backend: Box<dyn KeyValueStore> = if cli.ephemeral {
		tracing::info!("Using in-memory store");
		Box::new(MemoryStore::new())
	} else {
		let path = config.store_path(cli.store, std::env::var_os(STORE_ENV));
		let store = FileStore::open(&path)
			.with_context(|| format!("opening store {}", path.display()))?;
		tracing::info!(path = %store.path().display(), "Opened store");
		Box::new(store)
	};

	let board = ViewSync::start(Storage::new(backend), RandomColors::new());
	app::run(board, &config.board).context("running terminal board")?;
	Ok(())
}
