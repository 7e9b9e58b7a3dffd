//! Tracing setup.
//!
//! The board owns the terminal, so logs never go to stderr. They are appended
//! to `stickies.<pid>.log` in the log directory; if that file cannot be
//! opened, logging stays off.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use stickies_config::LogConfig;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Installs the global subscriber. Returns the log file path when logging is on.
pub fn setup_tracing(config: &LogConfig, verbose: bool) -> Option<PathBuf> {
	let log_dir = stickies_config::log_dir();
	std::fs::create_dir_all(&log_dir).ok()?;

	let log_path = log_dir.join(format!("stickies.{}.log", std::process::id()));
	let file = OpenOptions::new()
		.create(true)
		.append(true)
		.open(&log_path)
		.ok()?;

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
		if verbose {
			EnvFilter::new("stickies=debug")
		} else {
			EnvFilter::try_new(&config.filter).unwrap_or_else(|_| EnvFilter::new("stickies=info"))
		}
	});

	let file_layer = tracing_subscriber::fmt::layer()
		.with_writer(Mutex::new(file))
		.with_ansi(false)
		.with_target(true);

	tracing_subscriber::registry()
		.with(filter)
		.with(file_layer)
		.try_init()
		.ok()?;

	tracing::info!(path = ?log_path, "Tracing initialized");
	Some(log_path)
}
