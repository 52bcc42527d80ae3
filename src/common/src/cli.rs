use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Common CLI arguments shared by the dashboard binary and its subcommands
#[derive(Parser, Debug, Clone, Default)]
pub struct CommonArgs {
    #[arg(long, global = true, help = "Configuration file path")]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(short, long, global = true, help = "Enable quiet mode (minimal output)")]
    pub quiet: bool,

    #[arg(long, global = true, help = "Write logs to this file")]
    pub log_file: Option<PathBuf>,
}

/// Subcommands that inspect the configuration without fetching anything
#[derive(Subcommand, Debug, Clone)]
pub enum CommonCommands {
    /// Show current configuration and exit
    Config {
        #[arg(long, help = "Show configuration in JSON format")]
        json: bool,
    },
    /// Validate configuration and exit
    Validate,
}

/// Where log output goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// Plain commands log to stderr so stdout stays clean for reports.
    Stderr,
    /// The terminal UI owns the screen; logs go to `--log-file` or nowhere.
    Screen,
}

/// Utility functions for CLI operations
pub mod utils {
    use super::*;
    use crate::config::Configuration;
    use anyhow::{Context, Result};
    use std::fs::File;
    use std::sync::Mutex;
    use tracing_subscriber::EnvFilter;

    /// Level implied by `--quiet` / `--verbose`.
    pub fn log_level(args: &CommonArgs) -> &'static str {
        if args.quiet {
            "warn"
        } else if args.verbose {
            "debug"
        } else {
            "info"
        }
    }

    /// Initialize logging based on CLI arguments. `RUST_LOG` takes precedence.
    pub fn init_logging(args: &CommonArgs, target: LogTarget) -> Result<()> {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(log_level(args)));
        let builder = tracing_subscriber::fmt().with_env_filter(filter);

        match (&args.log_file, target) {
            (Some(path), _) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create log file {}", path.display()))?;
                builder
                    .with_ansi(false)
                    .with_writer(Mutex::new(file))
                    .try_init()
            }
            (None, LogTarget::Stderr) => builder.with_writer(std::io::stderr).try_init(),
            (None, LogTarget::Screen) => builder.with_writer(std::io::sink).try_init(),
        }
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))
    }

    /// Load configuration with optional override from CLI
    pub fn load_config(config_path: Option<&PathBuf>) -> Result<Configuration> {
        match config_path {
            Some(path) => {
                log::info!("Loading configuration from: {}", path.display());
                Configuration::load_from_path(path).context("Failed to load configuration")
            }
            None => Configuration::load().context("Failed to load configuration"),
        }
    }

    /// Render configuration in human-readable or JSON format
    pub fn format_config(config: &Configuration, json: bool) -> Result<String> {
        let config = config.redacted();
        if json {
            return serde_json::to_string_pretty(&config)
                .context("Failed to serialize configuration to JSON");
        }

        let mut out = String::new();
        out.push_str("Afya Dashboard Configuration:\n");
        out.push_str("=============================\n");
        out.push_str(&format!("GraphQL endpoint: {}\n", config.graphql.endpoint));
        out.push_str(&format!(
            "Authorization: {}\n",
            match config.graphql.auth_token {
                Some(_) => "bearer token (***)",
                None => "none",
            }
        ));
        out.push_str(&format!("TUI render interval: {:?}\n", config.tui.render_interval));
        Ok(out)
    }

    /// Validate configuration and report any issues
    pub fn validate_config(config: &Configuration) -> Result<()> {
        log::info!("Validating configuration...");
        config.validate()?;
        log::info!("Configuration validation passed");
        Ok(())
    }

    /// Handle a configuration-only command, returning what to print.
    pub fn handle_common_command(
        command: &CommonCommands,
        config: &Configuration,
    ) -> Result<String> {
        match command {
            CommonCommands::Config { json } => format_config(config, *json),
            CommonCommands::Validate => {
                validate_config(config)?;
                Ok(format!(
                    "Configuration is valid (endpoint {})",
                    config.graphql.endpoint
                ))
            }
        }
    }
}
