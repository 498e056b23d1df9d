//! Data-access layer.
//!
//! SQLite storage for projects, built from small pieces:
//!
//! - **Connections**: [`db::DbConnection`] opens one connection per operation
//!   and wraps it in a transaction.
//! - **Schema**: [`migrations`] versions the table layout.
//! - **Mapping**: [`mapper`] fills entities from rows by column name and binds
//!   typed parameters.
//! - **Projects**: [`projects::ProjectDao`] issues the insert, select, update
//!   and delete statements.
//!
//! ```rust,no_run
//! use projects::db::{db::DbConnection, projects::ProjectDao};
//!
//! let dao = ProjectDao::new(DbConnection::open("projects.db")?);
//! for project in dao.fetch_all_projects()? {
//!     println!("{}", project.name());
//! }
//! # Ok::<(), projects::db::error::DbError>(())
//! ```

/// Connection source and per-call transaction handling.
pub mod db;

/// Data-access error type.
pub mod error;

/// Row-to-entity mapping and parameter binding.
pub mod mapper;

/// Versioned schema migrations.
pub mod migrations;

/// CRUD statements for the `project` table.
pub mod projects;
