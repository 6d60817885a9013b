use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use fxtoggle::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for fxtoggle::AppCommand {
    fn from(cmd: Commands) -> fxtoggle::AppCommand {
        match cmd {
            Commands::Show => fxtoggle::AppCommand::Show,
            Commands::Set { currency } => fxtoggle::AppCommand::Set(currency),
            Commands::Toggle => fxtoggle::AppCommand::Toggle,
            Commands::Rate => fxtoggle::AppCommand::Rate,
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Display all documents in the active currency
    Show,
    /// Set the display currency (ZAR or USD)
    Set {
        /// Currency code
        currency: String,
    },
    /// Switch to the other currency
    Toggle,
    /// Display the current ZAR/USD exchange rate
    Rate,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => setup(),
        Some(cmd) => fxtoggle::run_command(cmd.into(), cli.config_path.as_deref()).await,
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}

fn setup() -> anyhow::Result<()> {
    use anyhow::Context;

    let path = fxtoggle::config::AppConfig::default_config_path()?;

    if path.exists() {
        anyhow::bail!("Configuration file already exists at {}", path.display());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let default_config = r#"---
documents:
  - name: "Example"
    values:
      - name: "Annual revenue"
        zar: 12500000
    labels:
      - "R2.5M ARR target"

providers:
  exchange_rate:
    base_url: "https://api.exchangerate-api.com"
"#;

    std::fs::write(&path, default_config)
        .with_context(|| format!("Failed to write config file to {}", path.display()))?;

    tracing::info!("Created default configuration at {}", path.display());
    Ok(())
}
