//! Configuration for the stickies board.
//!
//! Configuration is TOML. Every field is optional:
//!
//! ```toml
//! [storage]
//! path = "/home/me/.local/share/stickies/storage.json"
//!
//! [board]
//! columns = 3
//! note_width = 28
//!
//! [log]
//! filter = "stickies=info"
//! ```
//!
//! # Configuration Files
//!
//! The default location is `$XDG_CONFIG_HOME/stickies/config.toml` (or
//! `~/.config/stickies/config.toml`). A missing default file means defaults;
//! a missing file that was asked for explicitly is an error.
//!
//! # Storage Path
//!
//! The backing file is resolved in order from the command line,
//! [`STORE_ENV`], `storage.path`, and finally [`default_store_path`].

pub mod error;


use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub use error::{ConfigError, Result};
use serde::Deserialize;

/// Application directory name under the platform config/data dirs.
pub const APP_DIR: &str = "stickies";

/// Environment variable overriding the backing store file.
pub const STORE_ENV: &str = "STICKIES_STORE";

/// Environment variable overriding the log directory.
pub const LOG_DIR_ENV: &str = "STICKIES_LOG_DIR";

const MIN_COLUMNS: usize = 1;
const MIN_NOTE_WIDTH: u16 = 12;

/// Parsed configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
	pub storage: StorageConfig,
	pub board: BoardConfig,
	pub log: LogConfig,
}

/// `[storage]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StorageConfig {
	/// Backing file for notes and theme.
	pub path: Option<PathBuf>,
}

/// `[board]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoardConfig {
	/// Notes per row.
	pub columns: usize,
	/// Width of a note cell in terminal columns.
	pub note_width: u16,
}

impl Default for BoardConfig {
	fn default() -> Self {
		Self {
			columns: 3,
			note_width: 28,
		}
	}
}

impl BoardConfig {
	/// Notes per row, at least one.
	pub fn columns(&self) -> usize {
		self.columns.max(MIN_COLUMNS)
	}

	/// Note cell width, wide enough for the delete affordance and some text.
	pub fn note_width(&self) -> u16 {
		self.note_width.max(MIN_NOTE_WIDTH)
	}
}

/// `[log]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
	/// `tracing_subscriber::EnvFilter` directive, used when `RUST_LOG` is unset.
	pub filter: String,
}

impl Default for LogConfig {
	fn default() -> Self {
		Self {
			filter: "stickies=info".to_string(),
		}
	}
}

impl Config {
	/// Parses a TOML string.
	pub fn parse(input: &str) -> Result<Self> {
		Ok(toml::from_str(input)?)
	}

	/// Loads configuration from a file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
			path: path.to_path_buf(),
			error: e,
		})?;
		Self::parse(&content)
	}

	/// Loads `explicit` if given, otherwise the default file if it exists.
	pub fn load_or_default(explicit: Option<&Path>) -> Result<Self> {
		if let Some(path) = explicit {
			return Self::load(path);
		}
		match default_config_path() {
			Some(path) if path.is_file() => Self::load(path),
			_ => Ok(Self::default()),
		}
	}

	/// Resolves the backing store file.
	///
	/// `cli` wins over `env` (the value of [`STORE_ENV`]), which wins over
	/// `storage.path`, which wins over [`default_store_path`]. Empty values
	/// are ignored.
	pub fn store_path(&self, cli: Option<PathBuf>, env: Option<OsString>) -> PathBuf {
		cli.filter(|p| !p.as_os_str().is_empty())
			.or_else(|| env.filter(|v| !v.is_empty()).map(PathBuf::from))
			.or_else(|| self.storage.path.clone())
			.unwrap_or_else(default_store_path)
	}
}

/// Returns `~/.config/stickies/config.toml` or the platform equivalent.
pub fn default_config_path() -> Option<PathBuf> {
	dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
}

/// Returns `~/.local/share/stickies/storage.json` or the platform equivalent.
///
/// Falls back to the working directory when no data dir is known.
pub fn default_store_path() -> PathBuf {
	data_dir().join("storage.json")
}

/// Returns the log directory: [`LOG_DIR_ENV`] if set, else the data dir.
pub fn log_dir() -> PathBuf {
	std::env::var_os(LOG_DIR_ENV)
		.filter(|v| !v.is_empty())
		.map(PathBuf::from)
		.unwrap_or_else(data_dir)
}

fn data_dir() -> PathBuf {
	dirs::data_local_dir()
		.map(|d| d.join(APP_DIR))
		.unwrap_or_else(|| PathBuf::from("."))
}
