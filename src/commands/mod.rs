//! Command-line interface.
//!
//! Each subcommand lives in its own module with its argument struct and a
//! handler. Running `projects` without a subcommand opens the interactive
//! menu.

pub mod init;
pub mod menu;
pub mod migrations;
pub mod project;

use crate::{
    db::{db::DbConnection, projects::ProjectDao},
    libs::{config::Config, service::ProjectService},
};
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Open the interactive project menu")]
    Menu,
    #[command(about = "Add a project")]
    Add(project::AddArgs),
    #[command(about = "List all projects ordered by name")]
    List(project::ListArgs),
    #[command(about = "Show one project")]
    Show(project::ShowArgs),
    #[command(about = "Change fields of a project", arg_required_else_help = true)]
    Update(project::UpdateArgs),
    #[command(about = "Delete a project")]
    Delete(project::DeleteArgs),
    #[command(about = "Inspect database migrations")]
    Migrations(migrations::MigrationsArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    pub fn run() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Some(Commands::Init(args)) => init::cmd(args),
            Some(Commands::Menu) | None => menu::cmd(&project_service()?),
            Some(Commands::Add(args)) => project::add(&project_service()?, args),
            Some(Commands::List(args)) => project::list(&project_service()?, args),
            Some(Commands::Show(args)) => project::show(&project_service()?, args),
            Some(Commands::Update(args)) => project::update(&project_service()?, args),
            Some(Commands::Delete(args)) => project::delete(&project_service()?, args),
            Some(Commands::Migrations(args)) => migrations::cmd(args),
        }
    }
}

/// Opens the configured database and wires the service on top of it.
fn project_service() -> Result<ProjectService> {
    let path = Config::read()?.database_path()?;
    let db = DbConnection::open(path)?;
    Ok(ProjectService::new(ProjectDao::new(db)))
}
