//! Display implementation for application messages.
//!
//! Every user-facing string lives here, so wording stays consistent between
//! the interactive menu, the one-shot commands and log output.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === MENU MESSAGES ===
            Message::MenuHeader => "Selections (Esc or q to quit, Ctrl+C to abort):".to_string(),
            Message::MenuAddProject => "Add a project".to_string(),
            Message::MenuListProjects => "List projects".to_string(),
            Message::MenuSelectProject => "Select a project".to_string(),
            Message::MenuUpdateProject => "Update project details".to_string(),
            Message::MenuDeleteProject => "Delete a project".to_string(),
            Message::NoProjectChosen => "No project chosen".to_string(),
            Message::WorkingOn(overview) => format!("Working on: {}", overview),
            Message::ChooseProjectFirst => "Choose a project first".to_string(),
            Message::ActionFailed(error) => format!("Error: {} Try again", error),
            Message::Goodbye => "Bye!".to_string(),
            Message::CommandFailed(error) => format!("Error: {}", error),

            // === PROJECT MESSAGES ===
            Message::ProjectCreated(overview) => format!("Created: {}", overview),
            Message::ProjectUpdated => "Project updated successfully".to_string(),
            Message::ProjectDeleted(id) => format!("Project {} deleted", id),
            Message::ProjectSelected(name) => format!("Selected project '{}'", name),
            Message::ProjectsHeader => "Projects:".to_string(),
            Message::NoProjectsFound => "No projects found.".to_string(),
            Message::NothingToUpdate => "Nothing to update: no fields were given.".to_string(),
            Message::OperationCancelled => "Operation cancelled".to_string(),
            Message::ConfirmDeleteProject(id) => format!("Are you sure you want to delete project {}?", id),

            // === PROMPTS ===
            Message::PromptProjectName => "Enter project name".to_string(),
            Message::PromptEstimatedHours => "Enter estimated hours".to_string(),
            Message::PromptActualHours => "Enter actual hours".to_string(),
            Message::PromptDifficulty => "Enter difficulty (1-5)".to_string(),
            Message::PromptNotes => "Enter notes".to_string(),
            Message::PromptProjectId => "Enter project ID".to_string(),
            Message::PromptDatabasePath => "Enter the database file path".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigNotFound => "No saved configuration found".to_string(),
            Message::ConfigSaveError(error) => format!("Failed to save configuration: {}", error),
            Message::ConfigParseError(error) => format!("Failed to parse configuration: {}", error),
            Message::ConfigCurrentDatabase(path) => format!("Database: {}", path),

            // === DATABASE MESSAGES ===
            Message::DbOpened(path) => format!("Opened database at {}", path),
            Message::DbStatement(sql) => format!("SQL: {}", sql),
            Message::RollbackFailed(error) => format!("Transaction rollback failed: {}", error),
            Message::MigrationsFound(count) => format!("Found {} pending database migrations", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration v{} completed", version),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All database migrations completed successfully".to_string(),
            Message::DatabaseMissing(path) => format!("No database at {} yet; it is created on first use", path),
            Message::DatabaseVersion(version) => format!("Database schema version: {}", version),
            Message::DatabaseNeedsUpdate => "Database needs migration; it runs on the next command that opens it".to_string(),
            Message::DatabaseUpToDate => "Database is up to date".to_string(),
            Message::MigrationHistory => "Applied migrations:".to_string(),
            Message::NoMigrationsApplied => "No migrations have been applied yet".to_string(),
        };

        write!(f, "{}", text)
    }
}
