//! Core library modules.
//!
//! - **Domain**: the [`project::Project`] entity and the [`service`] layer
//! - **Infrastructure**: configuration, data storage location, logging
//! - **User interface**: input parsing, console tables, the message catalogue
//!
//! ```rust,no_run
//! use projects::db::{db::DbConnection, projects::ProjectDao};
//! use projects::libs::{project::Project, service::ProjectService};
//!
//! let service = ProjectService::new(ProjectDao::new(DbConnection::open("projects.db")?));
//! let project = service.add_project(Project::new("Birdhouse", None, None, Some(2), None))?;
//! service.delete_project(project.project_id.unwrap())?;
//! # Ok::<(), projects::libs::service::ServiceError>(())
//! ```

pub mod config;
pub mod data_storage;
pub mod input;
pub mod logging;
pub mod messages;
pub mod project;
pub mod service;
pub mod view;
