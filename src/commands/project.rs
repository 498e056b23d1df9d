//! One-shot project commands: `add`, `list`, `show`, `update`, `delete`.
//!
//! Values are validated by clap through the parsers in
//! [`crate::libs::input`], so malformed numbers never reach the service.

use crate::{
    libs::{
        input::{difficulty_arg, hours_arg, parse_id, parse_name},
        messages::Message,
        project::Project,
        service::ProjectService,
        view::View,
    },
    msg_bail_anyhow, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};
use rust_decimal::Decimal;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Project name
    #[arg(short, long, value_parser = parse_name)]
    name: String,
    /// Estimated hours, up to two decimal places
    #[arg(short, long, value_parser = hours_arg)]
    estimated_hours: Option<Decimal>,
    /// Actual hours, up to two decimal places
    #[arg(short, long, value_parser = hours_arg)]
    actual_hours: Option<Decimal>,
    /// Difficulty from 1 to 5
    #[arg(short, long, value_parser = difficulty_arg)]
    difficulty: Option<i32>,
    #[arg(long)]
    notes: Option<String>,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    #[arg(value_parser = parse_id)]
    id: i32,
    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// ID of the project to change
    #[arg(value_parser = parse_id)]
    id: i32,
    #[arg(short, long, value_parser = parse_name)]
    name: Option<String>,
    #[arg(short, long, value_parser = hours_arg)]
    estimated_hours: Option<Decimal>,
    #[arg(short, long, value_parser = hours_arg)]
    actual_hours: Option<Decimal>,
    #[arg(short, long, value_parser = difficulty_arg)]
    difficulty: Option<i32>,
    #[arg(long)]
    notes: Option<String>,
}

impl UpdateArgs {
    fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.estimated_hours.is_none()
            && self.actual_hours.is_none()
            && self.difficulty.is_none()
            && self.notes.is_none()
    }
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    #[arg(value_parser = parse_id)]
    id: i32,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub fn add(service: &ProjectService, args: AddArgs) -> Result<()> {
    let project = Project::new(
        &args.name,
        args.estimated_hours,
        args.actual_hours,
        args.difficulty,
        args.notes.as_deref(),
    );
    let created = service.add_project(project)?;

    msg_success!(Message::ProjectCreated(created.to_string()));
    Ok(())
}

pub fn list(service: &ProjectService, args: ListArgs) -> Result<()> {
    let projects = service.fetch_all_projects()?;

    if args.json {
        return View::json(&projects);
    }
    if projects.is_empty() {
        msg_info!(Message::NoProjectsFound);
        return Ok(());
    }

    msg_print!(Message::ProjectsHeader, true);
    View::projects(&projects)
}

pub fn show(service: &ProjectService, args: ShowArgs) -> Result<()> {
    let project = service.fetch_project_by_id(args.id)?;

    if args.json {
        View::json(&project)
    } else {
        View::project(&project)
    }
}

pub fn update(service: &ProjectService, args: UpdateArgs) -> Result<()> {
    if args.is_empty() {
        msg_bail_anyhow!(Message::NothingToUpdate);
    }

    let current = service.fetch_project_by_id(args.id)?;
    let updated = apply_changes(current, &args);
    service.update_project(&updated)?;

    msg_success!(Message::ProjectUpdated);
    View::project(&service.fetch_project_by_id(args.id)?)
}

pub fn delete(service: &ProjectService, args: DeleteArgs) -> Result<()> {
    // Fails with "does not exist" before asking anything.
    service.fetch_project_by_id(args.id)?;

    if !args.yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteProject(args.id).to_string())
            .default(false)
            .interact()?;

        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    service.delete_project(args.id)?;
    msg_success!(Message::ProjectDeleted(args.id));
    Ok(())
}

/// Overlays the flags that were given onto the stored project.
fn apply_changes(mut project: Project, args: &UpdateArgs) -> Project {
    if let Some(name) = &args.name {
        project.project_name = Some(name.clone());
    }
    if let Some(hours) = args.estimated_hours {
        project.estimated_hours = Some(hours);
    }
    if let Some(hours) = args.actual_hours {
        project.actual_hours = Some(hours);
    }
    if let Some(difficulty) = args.difficulty {
        project.difficulty = Some(difficulty);
    }
    if let Some(notes) = &args.notes {
        project.notes = Some(notes.clone());
    }
    project
}
