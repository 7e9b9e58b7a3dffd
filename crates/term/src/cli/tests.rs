use clap::CommandFactory;

use super::*;

#[test]
fn cli_definition_is_valid() {
	Cli::command().debug_assert();
}

#[test]
fn defaults_without_arguments() {
	let cli = Cli::try_parse_from(["stickies"]).expect("parse");
	assert_eq!(cli.store, None);
	assert_eq!(cli.config, None);
	assert!(!cli.ephemeral);
	assert!(!cli.verbose);
}

#[test]
fn parses_paths_and_flags() {
	let cli = Cli::try_parse_from(["stickies", "--store", "board.json", "-c", "conf.toml", "-v"])
		.expect("parse");
	assert_eq!(cli.store, Some(PathBuf::from("board.json")));
	assert_eq!(cli.config, Some(PathBuf::from("conf.toml")));
	assert!(cli.verbose);
}

#[test]
fn store_conflicts_with_ephemeral() {
	let result = Cli::try_parse_from(["stickies", "--store", "x.json", "--ephemeral"]);
	assert!(result.is_err());
}
