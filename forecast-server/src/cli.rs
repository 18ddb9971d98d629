use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use forecast_core::Config;
use forecast_server::App;
use inquire::Text;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "forecast", version, about = "NWS forecast proxy")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the HTTP server.
    Serve {
        /// Address to listen on, e.g. "127.0.0.1:8080". Overrides the config file.
        #[arg(long)]
        bind: Option<String>,
    },

    /// Interactively edit the configuration file.
    Configure,

    /// Print the configuration file location.
    ConfigPath,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Command::Serve { bind } => {
                let mut config = Config::load()?;
                if let Some(bind) = bind {
                    config.bind_address = bind;
                }

                tracing::info!(
                    bind = %config.bind_address,
                    upstream = %config.points_base_url,
                    "starting forecast server"
                );
                App::build(&config).await?.run().await
            }
            Command::Configure => configure(),
            Command::ConfigPath => {
                println!("{}", Config::config_file_path()?.display());
                Ok(())
            }
        }
    }
}

fn configure() -> Result<()> {
    let mut config = Config::load()?;

    config.bind_address = Text::new("Bind address:")
        .with_default(&config.bind_address)
        .prompt()?;

    config.points_base_url = Text::new("NWS API base URL:")
        .with_default(&config.points_base_url)
        .prompt()?;

    config.user_agent = Text::new("User-Agent sent to NWS:")
        .with_default(&config.user_agent)
        .with_help_message("NWS asks for an app name and a contact, e.g. \"myapp (me@example.com)\"")
        .prompt()?;

    let current_timeout = config
        .request_timeout_secs
        .map(|t| t.to_string())
        .unwrap_or_default();
    let timeout = Text::new("Upstream request timeout in seconds:")
        .with_initial_value(&current_timeout)
        .with_help_message("Leave empty for no timeout")
        .prompt()?;
    config.request_timeout_secs = parse_timeout(&timeout)?;

    let path = config.save()?;
    println!("Saved configuration to {}", path.display());

    Ok(())
}

fn parse_timeout(input: &str) -> Result<Option<u64>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let secs = trimmed
        .parse::<u64>()
        .with_context(|| format!("Invalid timeout '{trimmed}': expected whole seconds"))?;
    Ok(Some(secs))
}
