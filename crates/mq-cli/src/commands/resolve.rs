//! `mq resolve` and `mq status` - what a board would display, and why.

use mq_config::MarqueeConfig;
use mq_db::service::MarqueeService;

use crate::cli::{OutputFormat, ResolveArgs};
use crate::commands::local_today;
use crate::output;

pub async fn run(
    args: &ResolveArgs,
    service: &MarqueeService,
    config: &MarqueeConfig,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let date = match args.date {
        Some(date) => date,
        None => local_today(config)?,
    };

    let resolved = service.resolve(date, args.board).await;
    if args.html_only {
        println!("{}", resolved.html);
        return Ok(());
    }
    output::output(&resolved, format)
}

pub async fn status(
    service: &MarqueeService,
    config: &MarqueeConfig,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let today = local_today(config)?;
    let presence = service.board_presence(today).await?;
    output::output(&presence, format)
}
