//! Project persistence.
//!
//! Every operation runs in its own transaction on its own connection (see
//! [`DbConnection::in_transaction`]), and rows are turned into [`Project`]s by
//! the generic [`extract`] mapper.
//!
//! ```rust,no_run
//! use projects::db::{db::DbConnection, projects::ProjectDao};
//! use projects::libs::project::Project;
//!
//! let dao = ProjectDao::new(DbConnection::open("projects.db")?);
//! let saved = dao.insert_project(Project::new("Bookshelf", None, None, Some(3), None))?;
//! assert!(saved.project_id.is_some());
//! # Ok::<(), projects::db::error::DbError>(())
//! ```

use super::db::DbConnection;
use super::error::{DbError, Result};
use super::mapper::{assign, extract, param, Entity, Field, Param, SqlType};
use crate::libs::messages::Message;
use crate::libs::project::Project;
use crate::msg_debug;
use rusqlite::{params, params_from_iter, Transaction};

const INSERT_PROJECT: &str = "INSERT INTO project (project_name, estimated_hours, actual_hours, difficulty, notes) VALUES (?1, ?2, ?3, ?4, ?5)";
const SELECT_ALL_PROJECTS: &str = "SELECT * FROM project ORDER BY project_name COLLATE NOCASE, project_id";
const SELECT_PROJECT_BY_ID: &str = "SELECT * FROM project WHERE project_id = ?1";
const UPDATE_PROJECT: &str =
    "UPDATE project SET project_name = ?1, estimated_hours = ?2, actual_hours = ?3, difficulty = ?4, notes = ?5 WHERE project_id = ?6";
const DELETE_PROJECT: &str = "DELETE FROM project WHERE project_id = ?1";
const COUNT_PROJECTS: &str = "SELECT COUNT(*) FROM project";
const RESET_PROJECT_SEQUENCE: &str = "DELETE FROM sqlite_sequence WHERE name = 'project'";

impl Entity for Project {
    const ENTITY_NAME: &'static str = "Project";

    fn fields() -> Vec<Field<Self>> {
        vec![
            Field::new("projectId", SqlType::Integer, |p, v| assign(&mut p.project_id, v)),
            Field::new("projectName", SqlType::Text, |p, v| assign(&mut p.project_name, v)),
            Field::new("estimatedHours", SqlType::Decimal, |p, v| assign(&mut p.estimated_hours, v)),
            Field::new("actualHours", SqlType::Decimal, |p, v| assign(&mut p.actual_hours, v)),
            Field::new("difficulty", SqlType::Integer, |p, v| assign(&mut p.difficulty, v)),
            Field::new("notes", SqlType::Text, |p, v| assign(&mut p.notes, v)),
        ]
    }
}

/// The five mutable columns, in statement order.
fn column_params(project: &Project) -> Vec<Param> {
    vec![
        param(project.project_name.clone()),
        param(project.estimated_hours),
        param(project.actual_hours),
        param(project.difficulty),
        param(project.notes.clone()),
    ]
}

fn fetch_by_id(tx: &Transaction<'_>, project_id: i32) -> Result<Option<Project>> {
    msg_debug!(Message::DbStatement(SELECT_PROJECT_BY_ID.to_string()));
    let mut stmt = tx.prepare(SELECT_PROJECT_BY_ID)?;
    let mut rows = stmt.query(params![project_id])?;

    match rows.next()? {
        Some(row) => Ok(Some(extract(row)?)),
        None => Ok(None),
    }
}

#[derive(Debug, Clone)]
pub struct ProjectDao {
    db: DbConnection,
}

impl ProjectDao {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    /// Saves a new project and returns it with the generated id.
    ///
    /// The id is read back on the same connection as the insert. Any id
    /// already set on `project` is ignored and replaced.
    pub fn insert_project(&self, mut project: Project) -> Result<Project> {
        let project_id = self.db.in_transaction(|tx| {
            msg_debug!(Message::DbStatement(INSERT_PROJECT.to_string()));
            tx.execute(INSERT_PROJECT, params_from_iter(column_params(&project)))?;

            let rowid = tx.last_insert_rowid();
            i32::try_from(rowid).map_err(|_| DbError::KeyOutOfRange(rowid))
        })?;

        project.project_id = Some(project_id);
        Ok(project)
    }

    /// All projects, ordered by name (case-insensitive, ties by id).
    pub fn fetch_all_projects(&self) -> Result<Vec<Project>> {
        self.db.in_transaction(|tx| {
            msg_debug!(Message::DbStatement(SELECT_ALL_PROJECTS.to_string()));
            let mut stmt = tx.prepare(SELECT_ALL_PROJECTS)?;
            let mut rows = stmt.query([])?;

            let mut projects = Vec::new();
            while let Some(row) = rows.next()? {
                projects.push(extract(row)?);
            }

            Ok(projects)
        })
    }

    pub fn fetch_project_by_id(&self, project_id: i32) -> Result<Option<Project>> {
        self.db.in_transaction(|tx| fetch_by_id(tx, project_id))
    }

    /// Rewrites every mutable column. Returns whether a row matched the id.
    pub fn update_project(&self, project: &Project) -> Result<bool> {
        let project_id = project.project_id.ok_or(DbError::MissingId { entity: Project::ENTITY_NAME })?;

        self.db.in_transaction(|tx| {
            let mut values = column_params(project);
            values.push(param(Some(project_id)));

            msg_debug!(Message::DbStatement(UPDATE_PROJECT.to_string()));
            let updated = tx.execute(UPDATE_PROJECT, params_from_iter(values))?;
            Ok(updated > 0)
        })
    }

    /// Removes a project. Returns whether a row matched the id.
    ///
    /// When this leaves the table empty the id sequence is reset, so the
    /// next insert is assigned id 1 again.
    pub fn delete_project(&self, project_id: i32) -> Result<bool> {
        self.db.in_transaction(|tx| {
            msg_debug!(Message::DbStatement(DELETE_PROJECT.to_string()));
            let deleted = tx.execute(DELETE_PROJECT, params![project_id])? > 0;

            let remaining: i64 = tx.query_row(COUNT_PROJECTS, [], |row| row.get(0))?;
            if remaining == 0 {
                msg_debug!(Message::DbStatement(RESET_PROJECT_SEQUENCE.to_string()));
                tx.execute(RESET_PROJECT_SEQUENCE, [])?;
            }

            Ok(deleted)
        })
    }
}
