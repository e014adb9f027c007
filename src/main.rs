use anyhow::Result;
use cardsync::log::init_logging;
use clap::{CommandFactory, Parser, Subcommand};

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

impl From<Commands> for cardsync::AppCommand {
    fn from(cmd: Commands) -> cardsync::AppCommand {
        match cmd {
            Commands::Snapshot => cardsync::AppCommand::Snapshot,
            Commands::Publish => cardsync::AppCommand::Publish,
            Commands::List => cardsync::AppCommand::List,
            Commands::Validate => cardsync::AppCommand::Validate,
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Assemble the catalog and write it to a local snapshot file
    Snapshot,
    /// Assemble the catalog and replace the card store contents
    Publish,
    /// Display the assembled catalog
    List,
    /// Report schema problems in the assembled catalog
    Validate,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => setup(),
        Some(cmd) => cardsync::run_command(cmd.into(), cli.config_path.as_deref()).await,
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

    let path = cardsync::config::AppConfig::default_config_path()?;

    if path.exists() {
        anyhow::bail!("Configuration file already exists at {}", path.display());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let default_config = r#"---
# store:
#   base_url: "http://localhost:8080"

snapshot_path: "cards.json"

# Per-quarter category overrides, applied on top of the built-in table:
# rotating_overrides:
#   discover-it:
#     1: ["grocery", "drugstore"]
"#;

    std::fs::write(&path, default_config)
        .with_context(|| format!("Failed to write config file to {}", path.display()))?;

    tracing::info!("Created default configuration at {}", path.display());
    Ok(())
}
