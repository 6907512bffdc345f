//! `mq template` - reusable card template management.

use serde::Serialize;

use mq_db::repos::template::TemplateRequest;
use mq_db::service::MarqueeService;

use crate::cli::{OutputFormat, TemplateCommands};
use crate::commands::read_html;
use crate::output;

#[derive(Serialize)]
struct DeleteResponse {
    id: String,
    deleted: bool,
}

pub async fn run(
    action: TemplateCommands,
    service: &MarqueeService,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match action {
        TemplateCommands::Create {
            name,
            board,
            html_file,
            html,
            version,
        } => {
            let html = read_html(html_file.as_deref(), html.as_deref())?.ok_or_else(|| {
                anyhow::anyhow!("provide the template HTML via --html-file or --html")
            })?;
            let template = service
                .create_template(&TemplateRequest {
                    name,
                    board,
                    version,
                    html,
                })
                .await?;
            output::output(&template, format)
        }
        TemplateCommands::Show { id_or_name } => {
            let template = if id_or_name.starts_with("tpl-") {
                service.get_template(&id_or_name).await?
            } else {
                service
                    .get_template_by_name(&id_or_name)
                    .await?
                    .ok_or_else(|| anyhow::anyhow!("no template named '{id_or_name}'"))?
            };
            output::output(&template, format)
        }
        TemplateCommands::List { board } => {
            let templates = service.list_templates(board).await?;
            output::output(&templates, format)
        }
        TemplateCommands::Delete { id } => {
            let deleted = service.delete_template(&id).await?;
            output::output(&DeleteResponse { id, deleted }, format)
        }
    }
}
