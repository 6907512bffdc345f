//! `mq swap run` and `mq swap daemon`.

use std::sync::Arc;

use mq_config::MarqueeConfig;
use mq_db::service::MarqueeService;
use mq_swap::SwapScheduler;

use crate::cli::{OutputFormat, SwapCommands};
use crate::output;

pub async fn run(
    action: SwapCommands,
    service: Arc<MarqueeService>,
    config: &MarqueeConfig,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let scheduler = SwapScheduler::new(service, config.swap.clone());
    match action {
        SwapCommands::Run => {
            let outcome = scheduler.run_once().await?;
            output::output(&outcome, format)
        }
        SwapCommands::Daemon => {
            tracing::info!(
                timezone = %config.swap.timezone,
                hour = config.swap.hour,
                minute = config.swap.minute,
                "starting swap daemon"
            );
            scheduler.run().await;
            Ok(())
        }
    }
}
