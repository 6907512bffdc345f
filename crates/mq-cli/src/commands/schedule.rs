//! `mq push`, `edit`, `show`, `list`, `delete`.

use serde::Serialize;

use mq_config::MarqueeConfig;
use mq_core::entities::ScheduleEntry;
use mq_db::repos::schedule::PushRequest;
use mq_db::service::MarqueeService;
use mq_db::updates::schedule::ScheduleUpdateBuilder;

use crate::cli::{DeleteArgs, EditArgs, ListArgs, OutputFormat, PushArgs, ShowArgs};
use crate::commands::{local_today, read_html};
use crate::output;

#[derive(Serialize)]
struct ListResponse {
    entries: Vec<ScheduleEntry>,
    total: u64,
    page: u32,
    page_size: u32,
}

#[derive(Serialize)]
struct DeleteResponse {
    date: chrono::NaiveDate,
    deleted: u32,
}

pub async fn push(
    args: &PushArgs,
    service: &MarqueeService,
    config: &MarqueeConfig,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let html = read_html(args.html_file.as_deref(), args.html.as_deref())?
        .ok_or_else(|| anyhow::anyhow!("provide the card HTML via --html-file or --html"))?;

    // Unversioned pushes take the board's configured default
    let version = args
        .version
        .unwrap_or_else(|| config.display.default_version(args.board));

    let entry = service
        .upsert_entry(&PushRequest {
            date: args.date,
            board: args.board,
            title: args.title.clone(),
            html,
            version: Some(version),
            date_label: args.date_label.clone(),
            pushed_by: args.pushed_by.clone(),
        })
        .await?;

    output::output(&entry, format)
}

pub async fn edit(
    args: &EditArgs,
    service: &MarqueeService,
    config: &MarqueeConfig,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let today = local_today(config)?;
    if args.date < today {
        anyhow::bail!(
            "cannot edit {}: date is in the past (today is {today})",
            args.date
        );
    }

    let mut builder = ScheduleUpdateBuilder::new();
    if let Some(ref title) = args.title {
        builder = builder.workout_title(title);
    }
    if let Some(html) = read_html(args.html_file.as_deref(), args.html.as_deref())? {
        builder = builder.html_content(html);
    }
    if let Some(version) = args.version {
        builder = builder.version(version);
    }

    let entry = service.edit_entry(args.date, args.board, builder.build()).await?;
    output::output(&entry, format)
}

pub async fn show(
    args: &ShowArgs,
    service: &MarqueeService,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let day = service.get_for_date(args.date).await?;
    output::output(&day, format)
}

pub async fn list(
    args: &ListArgs,
    service: &MarqueeService,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let (entries, total) = service
        .get_range(args.start, args.end, args.page, args.page_size)
        .await?;
    output::output(
        &ListResponse {
            entries,
            total,
            page: args.page,
            page_size: args.page_size,
        },
        format,
    )
}

pub async fn delete(
    args: &DeleteArgs,
    service: &MarqueeService,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let deleted = service.delete_for_date(args.date).await?;
    output::output(
        &DeleteResponse {
            date: args.date,
            deleted,
        },
        format,
    )
}
