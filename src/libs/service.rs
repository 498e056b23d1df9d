use crate::db::error::DbError;
use crate::db::mapper::Entity;
use crate::db::projects::ProjectDao;
use crate::libs::project::Project;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Project with ID={0} does not exist.")]
    NotFound(i32),

    #[error(transparent)]
    Db(#[from] DbError),
}

pub type Result<T> = std::result::Result<T, ServiceError>;

/// Project operations used by the menu and the commands.
///
/// Adds existence checks on top of [`ProjectDao`]: unknown ids become
/// [`ServiceError::NotFound`], and update/delete look the project up before
/// writing.
#[derive(Debug, Clone)]
pub struct ProjectService {
    dao: ProjectDao,
}

impl ProjectService {
    pub fn new(dao: ProjectDao) -> Self {
        Self { dao }
    }

    pub fn add_project(&self, project: Project) -> Result<Project> {
        Ok(self.dao.insert_project(project)?)
    }

    pub fn fetch_all_projects(&self) -> Result<Vec<Project>> {
        Ok(self.dao.fetch_all_projects()?)
    }

    pub fn fetch_project_by_id(&self, project_id: i32) -> Result<Project> {
        self.dao.fetch_project_by_id(project_id)?.ok_or(ServiceError::NotFound(project_id))
    }

    pub fn update_project(&self, project: &Project) -> Result<bool> {
        let project_id = project.project_id.ok_or(DbError::MissingId { entity: Project::ENTITY_NAME })?;
        self.fetch_project_by_id(project_id)?;
        Ok(self.dao.update_project(project)?)
    }

    pub fn delete_project(&self, project_id: i32) -> Result<bool> {
        self.fetch_project_by_id(project_id)?;
        Ok(self.dao.delete_project(project_id)?)
    }
}
