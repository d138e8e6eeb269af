use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use dialoguer::{theme::ColorfulTheme, Input, Select};

use crate::domain::STATUS_OPTIONS;

pub fn prompt_company(current: &str) -> Result<String> {
    Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Company")
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text()
        .context("Failed to read company")
}

/// Closed select over the known statuses, plus an empty choice so a draft
/// can still be submitted without one (and rejected by validation). The
/// filter criterion deliberately does not go through this prompt.
pub fn prompt_status(current: &str) -> Result<String> {
    let mut items = vec!["(select status)"];
    items.extend(STATUS_OPTIONS);

    let default = STATUS_OPTIONS
        .iter()
        .position(|s| *s == current)
        .map(|i| i + 1)
        .unwrap_or(0);

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Status")
        .items(&items)
        .default(default)
        .interact()
        .context("Failed to read status")?;

    if selection == 0 {
        Ok(String::new())
    } else {
        Ok(STATUS_OPTIONS[selection - 1].to_string())
    }
}

pub fn prompt_image_url(current: &str) -> Result<String> {
    Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Company logo URL")
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text()
        .context("Failed to read logo URL")
}

/// Mirrors a datetime-local control: empty, or exactly YYYY-MM-DDTHH:MM.
pub fn prompt_date(current: &str) -> Result<String> {
    Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Date (YYYY-MM-DDTHH:MM)")
        .with_initial_text(current)
        .allow_empty(true)
        .validate_with(|value: &String| -> Result<(), &str> {
            if value.is_empty() || NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M").is_ok() {
                Ok(())
            } else {
                Err("Expected format YYYY-MM-DDTHH:MM")
            }
        })
        .interact_text()
        .context("Failed to read date")
}

pub fn prompt_note(current: &str) -> Result<String> {
    Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Note")
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text()
        .context("Failed to read note")
}

pub enum DashboardAction {
    Add,
    Update,
    Delete,
    Quit,
}

pub fn prompt_dashboard_menu() -> Result<DashboardAction> {
    let options = ["Add entry", "Update entry", "Delete entry", "Quit"];

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Select action")
        .items(&options)
        .default(0)
        .interact()
        .context("Failed to read menu selection")?;

    match selection {
        0 => Ok(DashboardAction::Add),
        1 => Ok(DashboardAction::Update),
        2 => Ok(DashboardAction::Delete),
        _ => Ok(DashboardAction::Quit),
    }
}

pub fn prompt_entry_id(prompt: &str) -> Result<i64> {
    Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .interact_text()
        .context("Failed to read entry id")
}
