use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use pathfix::config::{
	CONFIG_FILE_NAME, DEFAULT_PATTERN, DEFAULT_REPLACEMENT, DEFAULT_SEARCH, Settings,
	discover_configs, merge_configs, user_config_path,
};
use pathfix::rewrite::rewrite_all;

#[derive(Parser)]
#[command(name = "pathfix")]
#[command(
	author,
	version,
	about = "Rewrite absolute grading-environment paths in output files to relative paths"
)]
struct Cli {
	#[command(subcommand)]
	command: Option<Commands>,

	/// Glob pattern of files to rewrite, relative to --dir
	#[arg(long, value_name = "GLOB")]
	pattern: Option<String>,

	/// Literal text to replace
	#[arg(long, value_name = "TEXT")]
	search: Option<String>,

	/// Literal text to substitute for each occurrence
	#[arg(long = "replace", value_name = "TEXT", allow_hyphen_values = true)]
	replacement: Option<String>,

	/// Directory the pattern is resolved against (defaults to the current directory)
	#[arg(long, value_name = "DIR")]
	dir: Option<PathBuf>,

	/// Enable debug logging
	#[arg(short, long)]
	verbose: bool,

	/// Create a template .pathfix.toml in the current directory
	#[arg(long)]
	init: bool,

	/// Overwrite existing .pathfix.toml when using --init
	#[arg(long, requires = "init")]
	force: bool,
}

#[derive(Subcommand)]
enum Commands {
	/// Configuration management commands
	Config {
		#[command(subcommand)]
		action: ConfigAction,
	},
}

#[derive(Subcommand)]
enum ConfigAction {
	/// Display each config file and the effective settings
	Show,
	/// Check all config files for errors without rewriting anything
	Validate,
}

fn main() -> ExitCode {
	match run() {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn run() -> Result<ExitCode> {
	let cli = Cli::parse();
	init_logging(cli.verbose);

	if cli.init {
		return handle_init(cli.force);
	}

	if let Some(command) = &cli.command {
		return match command {
			Commands::Config { action } => match action {
				ConfigAction::Show => handle_config_show(),
				ConfigAction::Validate => handle_config_validate(),
			},
		};
	}

	handle_rewrite(&cli)
}

/// `--verbose` forces debug output; otherwise `RUST_LOG` applies, then the default.
fn init_logging(verbose: bool) {
	let filter = if verbose {
		EnvFilter::new("pathfix=debug")
	} else {
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pathfix=info"))
	};
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.without_time()
		.init();
}

fn handle_init(force: bool) -> Result<ExitCode> {
	let config_path = PathBuf::from(CONFIG_FILE_NAME);

	if config_path.exists() && !force {
		anyhow::bail!("{CONFIG_FILE_NAME} already exists. Use --force to overwrite.");
	}

	std::fs::write(&config_path, init_template())
		.with_context(|| format!("Failed to write {}", config_path.display()))?;

	println!("Created {CONFIG_FILE_NAME}");
	Ok(ExitCode::SUCCESS)
}

fn init_template() -> String {
	format!(
		r#"# pathfix configuration
# Stop looking for {CONFIG_FILE_NAME} in parent directories.
root = true

# Files to rewrite, relative to the directory pathfix runs in.
pattern = "{DEFAULT_PATTERN}"

# Literal text to replace, and what to replace it with.
search = "{DEFAULT_SEARCH}"
replace = "{DEFAULT_REPLACEMENT}"
"#
	)
}

fn handle_config_show() -> Result<ExitCode> {
	let cwd = std::env::current_dir().context("Failed to get current directory")?;
	let configs = discover_configs(&cwd).context("Failed to discover config files")?;

	if configs.is_empty() {
		println!("No configuration files found.\n");
	} else {
		println!("Configuration files (in cascade order):\n");
	}

	for loaded in &configs {
		println!("# Source: {}", loaded.path.display());
		println!("# root: {}", loaded.config.root);
		if let Some(ref pattern) = loaded.config.pattern {
			println!("  pattern: {}", pattern);
		}
		if let Some(ref search) = loaded.config.search {
			println!("  search: {}", search);
		}
		if let Some(ref replace) = loaded.config.replace {
			println!("  replace: {}", replace);
		}
		println!();
	}

	let settings = merge_configs(&configs);
	println!("Effective settings:");
	println!("  pattern: {}", settings.pattern);
	println!("  search: {}", settings.search);
	println!("  replace: {}", settings.replacement);
	println!();

	if let Ok(user_path) = user_config_path() {
		println!("User config path: {}", user_path.display());
		if user_path.exists() {
			println!("  (exists)");
		} else {
			println!("  (not found)");
		}
	}

	Ok(ExitCode::SUCCESS)
}

fn handle_config_validate() -> Result<ExitCode> {
	let cwd = std::env::current_dir().context("Failed to get current directory")?;

	match discover_configs(&cwd) {
		Ok(configs) => {
			if configs.is_empty() {
				println!("No configuration files found.");
			} else {
				println!("All configuration files are valid:");
				for loaded in &configs {
					println!("  {}", loaded.path.display());
				}
			}
			Ok(ExitCode::SUCCESS)
		}
		Err(e) => {
			eprintln!("Configuration error: {}", e);
			Ok(ExitCode::FAILURE)
		}
	}
}

fn handle_rewrite(cli: &Cli) -> Result<ExitCode> {
	let cwd = std::env::current_dir().context("Failed to get current directory")?;
	let base_dir = match cli.dir {
		Some(ref dir) => cwd.join(dir),
		None => cwd,
	};

	let settings = effective_settings(cli, &base_dir)?;
	let substitution = settings
		.substitution()
		.context("Invalid search/replace settings")?;

	let summary = rewrite_all(&base_dir, &settings.pattern, &substitution)
		.with_context(|| format!("Failed to rewrite files matching {}", settings.pattern))?;

	println!(
		"Rewrote {} file(s): {} replacement(s) in {} file(s)",
		summary.files, summary.replacements, summary.files_changed
	);
	Ok(ExitCode::SUCCESS)
}

/// Config cascade from `base_dir` merged over defaults, then CLI flags on top.
fn effective_settings(cli: &Cli, base_dir: &Path) -> Result<Settings> {
	let configs = discover_configs(base_dir).context("Failed to load configuration")?;
	let mut settings = merge_configs(&configs);

	if let Some(ref pattern) = cli.pattern {
		settings.pattern = pattern.clone();
	}
	if let Some(ref search) = cli.search {
		settings.search = search.clone();
	}
	if let Some(ref replacement) = cli.replacement {
		settings.replacement = replacement.clone();
	}

	Ok(settings)
}
