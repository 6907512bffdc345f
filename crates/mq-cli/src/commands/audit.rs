//! `mq audit` - query the append-only audit trail.

use mq_db::repos::audit::AuditFilter;
use mq_db::service::MarqueeService;

use crate::cli::{AuditArgs, OutputFormat};
use crate::output;

pub async fn run(
    args: &AuditArgs,
    service: &MarqueeService,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let entries = service
        .query_audit(&AuditFilter {
            action: args.action,
            board: args.board,
            limit: args.limit,
            offset: args.offset,
        })
        .await?;
    output::output(&entries, format)
}
