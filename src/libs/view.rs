use super::project::Project;
use anyhow::Result;
use prettytable::{row, Table};
use std::fmt::Display;

fn cell<T: Display>(value: &Option<T>) -> String {
    value.as_ref().map(ToString::to_string).unwrap_or_default()
}

pub struct View {}

impl View {
    pub fn projects(projects: &[Project]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "EST. HOURS", "ACT. HOURS", "DIFFICULTY"]);
        for project in projects {
            table.add_row(row![
                cell(&project.project_id),
                project.name(),
                cell(&project.estimated_hours),
                cell(&project.actual_hours),
                cell(&project.difficulty)
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn project_names(projects: &[Project]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME"]);
        for project in projects {
            table.add_row(row![cell(&project.project_id), project.name()]);
        }
        table.printstd();

        Ok(())
    }

    pub fn project(project: &Project) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", cell(&project.project_id)]);
        table.add_row(row!["NAME", project.name()]);
        table.add_row(row!["EST. HOURS", cell(&project.estimated_hours)]);
        table.add_row(row!["ACT. HOURS", cell(&project.actual_hours)]);
        table.add_row(row!["DIFFICULTY", cell(&project.difficulty)]);
        table.add_row(row!["NOTES", cell(&project.notes)]);
        table.printstd();

        Ok(())
    }

    pub fn json<T: serde::Serialize + ?Sized>(value: &T) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }
}
