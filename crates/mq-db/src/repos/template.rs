//! Card template repository. Templates are named, reusable HTML card
//! designs for the admin surface; they never participate in fallback.

use chrono::Utc;

use mq_core::entities::Template;
use mq_core::enums::{BoardType, WorkoutVersion};
use mq_core::ids::PREFIX_TEMPLATE;

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_datetime, parse_enum, parse_optional_enum};
use crate::service::MarqueeService;

const SELECT_COLS: &str = "id, name, board_type, version, html_content, created_at, updated_at";

fn row_to_template(row: &libsql::Row) -> Result<Template, DatabaseError> {
    Ok(Template {
        id: row.get(0)?,
        name: row.get(1)?,
        board: parse_enum(&row.get::<String>(2)?)?,
        version: parse_optional_enum(get_opt_string(row, 3)?.as_deref())?,
        html_content: row.get(4)?,
        created_at: parse_datetime(&row.get::<String>(5)?)?,
        updated_at: parse_datetime(&row.get::<String>(6)?)?,
    })
}

/// Input for creating (or replacing) a named template.
#[derive(Debug, Clone)]
pub struct TemplateRequest {
    pub name: String,
    pub board: BoardType,
    pub version: Option<WorkoutVersion>,
    pub html: String,
}

impl MarqueeService {
    /// Create a template, replacing any existing one with the same name.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the write fails.
    pub async fn create_template(&self, req: &TemplateRequest) -> Result<Template, DatabaseError> {
        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_TEMPLATE).await?;

        self.db()
            .conn()
            .execute(
                "INSERT INTO card_templates (id, name, board_type, version, html_content, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
                 ON CONFLICT (name) DO UPDATE SET
                   board_type = excluded.board_type,
                   version = excluded.version,
                   html_content = excluded.html_content,
                   updated_at = excluded.updated_at",
                libsql::params![
                    id.as_str(),
                    req.name.as_str(),
                    req.board.as_str(),
                    req.version.map(WorkoutVersion::as_str),
                    req.html.as_str(),
                    now.to_rfc3339(),
                    now.to_rfc3339()
                ],
            )
            .await?;

        self.get_template_by_name(&req.name)
            .await?
            .ok_or(DatabaseError::NoResult)
    }

    /// A template by ID.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if no template has the ID.
    pub async fn get_template(&self, id: &str) -> Result<Template, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM card_templates WHERE id = ?1"),
                [id],
            )
            .await?;
        match rows.next().await? {
            Some(row) => row_to_template(&row),
            None => Err(DatabaseError::NoResult),
        }
    }

    /// A template by unique name, if any.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn get_template_by_name(&self, name: &str) -> Result<Option<Template>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM card_templates WHERE name = ?1"),
                [name],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_template(&row)?)),
            None => Ok(None),
        }
    }

    /// All templates, optionally filtered to one board, ordered by name.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_templates(
        &self,
        board: Option<BoardType>,
    ) -> Result<Vec<Template>, DatabaseError> {
        let mut rows = match board {
            Some(board) => {
                self.db()
                    .conn()
                    .query(
                        &format!(
                            "SELECT {SELECT_COLS} FROM card_templates
                             WHERE board_type = ?1 ORDER BY name ASC"
                        ),
                        [board.as_str()],
                    )
                    .await?
            }
            None => {
                self.db()
                    .conn()
                    .query(
                        &format!("SELECT {SELECT_COLS} FROM card_templates ORDER BY name ASC"),
                        (),
                    )
                    .await?
            }
        };

        let mut templates = Vec::new();
        while let Some(row) = rows.next().await? {
            templates.push(row_to_template(&row)?);
        }
        Ok(templates)
    }

    /// Delete a template by ID. Returns whether a row was removed.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the delete fails.
    pub async fn delete_template(&self, id: &str) -> Result<bool, DatabaseError> {
        let deleted = self
            .db()
            .conn()
            .execute("DELETE FROM card_templates WHERE id = ?1", [id])
            .await?;
        Ok(deleted > 0)
    }
}
