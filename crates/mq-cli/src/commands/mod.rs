//! Command handlers and dispatch.

pub mod audit;
pub mod emergency;
pub mod resolve;
pub mod schedule;
pub mod swap;
pub mod template;

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use chrono::{NaiveDate, Utc};

use mq_config::MarqueeConfig;
use mq_db::service::MarqueeService;

use crate::cli::{Commands, OutputFormat};

pub async fn dispatch(
    command: Commands,
    service: Arc<MarqueeService>,
    config: &MarqueeConfig,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match command {
        Commands::Push(args) => schedule::push(&args, &service, config, format).await,
        Commands::Edit(args) => schedule::edit(&args, &service, config, format).await,
        Commands::Show(args) => schedule::show(&args, &service, format).await,
        Commands::List(args) => schedule::list(&args, &service, format).await,
        Commands::Delete(args) => schedule::delete(&args, &service, format).await,
        Commands::Override(args) => emergency::run(&args, &service, config, format).await,
        Commands::Resolve(args) => resolve::run(&args, &service, config, format).await,
        Commands::Audit(args) => audit::run(&args, &service, format).await,
        Commands::Status => resolve::status(&service, config, format).await,
        Commands::Template { action } => template::run(action, &service, format).await,
        Commands::Swap { action } => swap::run(action, service, config, format).await,
    }
}

/// Today's date in the gym's configured time zone.
pub(crate) fn local_today(config: &MarqueeConfig) -> anyhow::Result<NaiveDate> {
    let zone: chrono_tz::Tz = config
        .swap
        .timezone
        .parse()
        .map_err(|e| anyhow::anyhow!("unknown time zone '{}': {e}", config.swap.timezone))?;
    Ok(Utc::now().with_timezone(&zone).date_naive())
}

/// Card HTML from `--html-file` or `--html`, whichever was given.
pub(crate) fn read_html(
    file: Option<&Path>,
    inline: Option<&str>,
) -> anyhow::Result<Option<String>> {
    if let Some(path) = file {
        let html = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read HTML from '{}'", path.display()))?;
        return Ok(Some(html));
    }
    Ok(inline.map(str::to_string))
}
