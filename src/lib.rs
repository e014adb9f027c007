pub mod catalog;
pub mod config;
pub mod log;
pub mod model;
pub mod publish;
pub mod sources;
pub mod ui;
pub mod validate;

use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::{debug, info, warn};

use crate::config::AppConfig;
use crate::model::Card;
use crate::publish::store::HttpCardStore;
use crate::sources::RotatingSource;
use crate::sources::static_table::StaticTableSource;

pub enum AppCommand {
    Snapshot,
    Publish,
    List,
    Validate,
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    match command {
        AppCommand::Snapshot => {
            let cards = assemble(&config).await;
            let count = publish::snapshot::write_snapshot(&cards, Path::new(&config.snapshot_path))?;
            println!("Wrote {} cards to {}", count, config.snapshot_path);
            Ok(())
        }
        AppCommand::Publish => {
            let store_config = config
                .store
                .as_ref()
                .context("No card store configured; set store.base_url in the config file")?;
            let store = HttpCardStore::new(&store_config.base_url)?;

            let cards = assemble(&config).await;
            let count = publish::publish_catalog(&cards, &store).await?;
            println!("Published {count} cards to {}", store_config.base_url);
            Ok(())
        }
        AppCommand::List => {
            let cards = assemble(&config).await;
            let source = StaticTableSource::new().with_overrides(&config.rotating_overrides);
            println!("{}", ui::catalog_table(&cards, &source));
            Ok(())
        }
        AppCommand::Validate => {
            let cards = assemble(&config).await;
            let problems = validate::validate_catalog(&cards);
            if problems.is_empty() {
                println!("Catalog is clean ({} cards)", cards.len());
                Ok(())
            } else {
                for problem in &problems {
                    eprintln!("{}", ui::style_text(problem, ui::StyleType::Error));
                }
                bail!("catalog has {} validation problem(s)", problems.len())
            }
        }
    }
}

/// One pipeline pass: fresh baseline, rotating overlay, merge. A failed or
/// empty overlay is soft; the baseline is returned unchanged.
pub async fn assemble(config: &AppConfig) -> Vec<Card> {
    info!("Assembling card catalog");
    let mut cards = catalog::baseline();

    let source = StaticTableSource::new().with_overrides(&config.rotating_overrides);
    match source.fetch().await {
        Ok(overlay) if overlay.is_empty() => {
            warn!("rotating source returned no data; keeping the baseline as-is");
        }
        Ok(overlay) => {
            info!(cards = overlay.len(), "merging rotating categories");
            catalog::merge_rotating(&mut cards, &overlay);
        }
        Err(e) => {
            warn!(error = %e, "rotating source failed; keeping the baseline as-is");
        }
    }

    cards
}
