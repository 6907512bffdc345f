//! `mq override` - replace today's card on one board right now.

use mq_config::MarqueeConfig;
use mq_db::repos::schedule::OverrideRequest;
use mq_db::service::MarqueeService;

use crate::cli::{OutputFormat, OverrideArgs};
use crate::commands::{local_today, read_html};
use crate::output;

pub async fn run(
    args: &OverrideArgs,
    service: &MarqueeService,
    config: &MarqueeConfig,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let today = local_today(config)?;
    let html = read_html(args.html_file.as_deref(), args.html.as_deref())?;

    let entry = service
        .override_board(
            today,
            args.board,
            OverrideRequest {
                html,
                source_date: args.from_date,
                version: args.version,
                reason: args.reason.clone(),
            },
        )
        .await?;

    output::output(&entry, format)
}
