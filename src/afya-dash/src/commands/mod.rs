pub mod show;

use anyhow::Context;
use clap::{Parser, Subcommand};
use common::cli::{CommonArgs, CommonCommands, LogTarget, utils};
use common::config::Configuration;

use crate::client::GraphQlClient;
use crate::tui::app::App;

/// Afya analytics dashboard: metric cards and charts from a GraphQL API
#[derive(Parser, Debug)]
#[command(name = "afya-dash", version, about)]
pub struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    /// GraphQL endpoint, overriding the configuration file
    #[arg(long, global = true, env = "AFYA_GRAPHQL_URL")]
    endpoint: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Open the interactive dashboard (default)
    Tui {
        /// Metric to drill into once the metrics have loaded
        #[arg(long)]
        select: Option<String>,
    },
    /// Fetch once and print the dashboard
    Show(show::ShowArgs),
    #[command(flatten)]
    Common(CommonCommands),
    /// Print version information
    Version,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let command = self.command.unwrap_or(Commands::Tui { select: None });

        let target = match command {
            Commands::Version => {
                println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                return Ok(());
            }
            Commands::Tui { .. } => LogTarget::Screen,
            _ => LogTarget::Stderr,
        };
        utils::init_logging(&self.common, target)?;

        let config = apply_overrides(
            utils::load_config(self.common.config.as_ref())?,
            self.endpoint,
        );

        match command {
            Commands::Tui { select } => {
                let mut app = App::new(connect(&config)?, config.tui.render_interval);
                if let Some(name) = select {
                    app.state.select(name);
                }
                app.run().await
            }
            Commands::Show(args) => args.run(&connect(&config)?).await,
            Commands::Common(command) => {
                println!("{}", utils::handle_common_command(&command, &config)?);
                Ok(())
            }
            Commands::Version => Ok(()),
        }
    }
}

fn apply_overrides(mut config: Configuration, endpoint: Option<String>) -> Configuration {
    if let Some(endpoint) = endpoint {
        log::debug!("Endpoint overridden on the command line: {endpoint}");
        config.graphql.endpoint = endpoint;
    }
    config
}

fn connect(config: &Configuration) -> anyhow::Result<GraphQlClient> {
    config.validate()?;
    GraphQlClient::new(&config.graphql).context("Failed to build GraphQL client")
}
