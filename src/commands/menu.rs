//! Interactive project menu.
//!
//! A loop over five actions with a banner showing the project currently
//! being worked on. The selection is owned by the loop and handed to each
//! action explicitly. Errors raised by an action are reported and the menu
//! is shown again.

use crate::{
    libs::{
        input::{self, InputError},
        messages::Message,
        project::Project,
        service::ProjectService,
        view::View,
    },
    msg_error, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    Add,
    List,
    Select,
    Update,
    Delete,
}

impl MenuAction {
    const ALL: [MenuAction; 5] = [
        MenuAction::Add,
        MenuAction::List,
        MenuAction::Select,
        MenuAction::Update,
        MenuAction::Delete,
    ];

    fn label(self) -> Message {
        match self {
            MenuAction::Add => Message::MenuAddProject,
            MenuAction::List => Message::MenuListProjects,
            MenuAction::Select => Message::MenuSelectProject,
            MenuAction::Update => Message::MenuUpdateProject,
            MenuAction::Delete => Message::MenuDeleteProject,
        }
    }
}

pub fn cmd(service: &ProjectService) -> Result<()> {
    let mut current: Option<Project> = None;
    let labels: Vec<String> = MenuAction::ALL.iter().map(|action| action.label().to_string()).collect();

    loop {
        match &current {
            Some(project) => msg_print!(Message::WorkingOn(project.to_string()), true),
            None => msg_print!(Message::NoProjectChosen, true),
        }

        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::MenuHeader.to_string())
            .items(&labels)
            .default(0)
            .interact_opt()?;

        let Some(action) = choice.and_then(|index| MenuAction::ALL.get(index).copied()) else {
            msg_print!(Message::Goodbye);
            return Ok(());
        };

        if let Err(e) = run_action(service, action, &mut current) {
            msg_error!(Message::ActionFailed(e.to_string()));
        }
    }
}

fn run_action(service: &ProjectService, action: MenuAction, current: &mut Option<Project>) -> Result<()> {
    match action {
        MenuAction::Add => create_project(service),
        MenuAction::List => list_projects(service),
        MenuAction::Select => select_project(service, current),
        MenuAction::Update => update_project_details(service, current),
        MenuAction::Delete => delete_project(service, current),
    }
}

/// Prompts until `parse` accepts the text. An empty answer falls back to
/// `default` when one is given.
fn prompt<T>(message: Message, default: Option<String>, parse: fn(&str) -> Result<T, InputError>) -> Result<T> {
    let theme = ColorfulTheme::default();
    let mut question = Input::<String>::with_theme(&theme)
        .with_prompt(message.to_string())
        .allow_empty(true)
        .validate_with(move |text: &String| -> Result<(), String> {
            parse(text).map(|_| ()).map_err(|e| e.to_string())
        });

    if let Some(default) = default {
        question = question.default(default);
    }

    let text = question.interact_text()?;
    Ok(parse(&text)?)
}

fn current_value<T: ToString>(value: &Option<T>) -> Option<String> {
    value.as_ref().map(ToString::to_string)
}

fn create_project(service: &ProjectService) -> Result<()> {
    let name = prompt(Message::PromptProjectName, None, input::parse_name)?;
    let estimated_hours = prompt(Message::PromptEstimatedHours, None, input::parse_hours)?;
    let actual_hours = prompt(Message::PromptActualHours, None, input::parse_hours)?;
    let difficulty = prompt(Message::PromptDifficulty, None, input::difficulty_arg)?;
    let notes = prompt(Message::PromptNotes, None, input::parse_notes)?;

    let project = Project::new(&name, estimated_hours, actual_hours, Some(difficulty), notes.as_deref());
    let created = service.add_project(project)?;

    msg_success!(Message::ProjectCreated(created.to_string()));
    Ok(())
}

fn list_projects(service: &ProjectService) -> Result<()> {
    let projects = service.fetch_all_projects()?;

    if projects.is_empty() {
        msg_info!(Message::NoProjectsFound);
        return Ok(());
    }

    msg_print!(Message::ProjectsHeader, true);
    View::project_names(&projects)?;
    Ok(())
}

fn select_project(service: &ProjectService, current: &mut Option<Project>) -> Result<()> {
    list_projects(service)?;

    *current = None;
    let project_id = prompt(Message::PromptProjectId, None, input::parse_id)?;
    let project = service.fetch_project_by_id(project_id)?;

    msg_success!(Message::ProjectSelected(project.name().to_string()));
    *current = Some(project);
    Ok(())
}

fn update_project_details(service: &ProjectService, current: &mut Option<Project>) -> Result<()> {
    let Some(project) = current.as_ref() else {
        msg_info!(Message::ChooseProjectFirst);
        return Ok(());
    };

    let name = prompt(Message::PromptProjectName, current_value(&project.project_name), input::parse_notes)?;
    let estimated_hours =
        prompt(Message::PromptEstimatedHours, current_value(&project.estimated_hours), input::parse_hours)?;
    let actual_hours = prompt(Message::PromptActualHours, current_value(&project.actual_hours), input::parse_hours)?;
    let difficulty = prompt(Message::PromptDifficulty, current_value(&project.difficulty), input::parse_difficulty)?;
    let notes = prompt(Message::PromptNotes, current_value(&project.notes), input::parse_notes)?;

    let updated = Project {
        project_id: project.project_id,
        project_name: name.or_else(|| project.project_name.clone()),
        estimated_hours: estimated_hours.or(project.estimated_hours),
        actual_hours: actual_hours.or(project.actual_hours),
        difficulty: difficulty.or(project.difficulty),
        notes: notes.or_else(|| project.notes.clone()),
    };

    service.update_project(&updated)?;
    msg_success!(Message::ProjectUpdated);

    if let Some(project_id) = updated.project_id {
        *current = Some(service.fetch_project_by_id(project_id)?);
    }
    Ok(())
}

fn delete_project(service: &ProjectService, current: &mut Option<Project>) -> Result<()> {
    let Some(project_id) = current.as_ref().and_then(|project| project.project_id) else {
        msg_info!(Message::ChooseProjectFirst);
        return Ok(());
    };

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmDeleteProject(project_id).to_string())
        .default(false)
        .interact()?;

    if !confirmed {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    service.delete_project(project_id)?;
    *current = None;

    msg_success!(Message::ProjectDeleted(project_id));
    Ok(())
}
