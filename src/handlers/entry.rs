use anyhow::Result;
use std::path::Path;

use crate::cli::input;
use crate::context::ApiContext;
use crate::controllers::DashboardController;
use crate::domain::{Entry, EntryRepository};

pub fn print_entry_card(entry: &Entry) {
    match entry.id {
        Some(id) => println!("[{}] {}", id, entry.company),
        None => println!("[-] {}", entry.company),
    }
    println!("    Status: {}", entry.status);
    if !entry.image_url.is_empty() {
        println!("    Logo:   {}", entry.image_url);
    }
    println!("    Note:   {}", entry.note);
    println!("    Date:   {}", entry.date);
}

pub fn print_entries(entries: &[Entry]) {
    if entries.is_empty() {
        println!("No entries found.");
        return;
    }

    for entry in entries {
        print_entry_card(entry);
        println!();
    }
}

/// Prompt all form fields in the order the creation form lays them out,
/// prefilled with the current draft values.
pub fn prompt_draft(current: &Entry) -> Result<Entry> {
    let mut draft = current.clone();
    draft.company = input::prompt_company(&current.company)?;
    draft.status = input::prompt_status(&current.status)?;
    draft.image_url = input::prompt_image_url(&current.image_url)?;
    draft.date = input::prompt_date(&current.date)?;
    draft.note = input::prompt_note(&current.note)?;
    Ok(draft)
}

fn submit_and_report<R: EntryRepository>(controller: &mut DashboardController<R>) -> Result<()> {
    if controller.submit() {
        if let Some(msg) = &controller.success {
            println!("✓ {}", msg);
        }
        // a failed refetch after a successful save still gets surfaced
        if let Some(msg) = &controller.error {
            println!("⚠ {}", msg);
        }
        Ok(())
    } else {
        let msg = controller
            .error
            .clone()
            .unwrap_or_else(|| "Failed to save entry. Please try again.".to_string());
        anyhow::bail!("{}", msg)
    }
}

pub fn handle_add(
    company: Option<String>,
    status: Option<String>,
    image_url: Option<String>,
    note: Option<String>,
    date: Option<String>,
    config_dir: &Path,
) -> Result<()> {
    let ctx = ApiContext::load(config_dir)?;
    let mut controller = DashboardController::new(ctx.repo);

    let interactive = company.is_none()
        && status.is_none()
        && image_url.is_none()
        && note.is_none()
        && date.is_none();

    controller.draft = if interactive {
        prompt_draft(&Entry::default())?
    } else {
        Entry::draft(
            company.unwrap_or_default(),
            status.unwrap_or_default(),
            image_url.unwrap_or_default(),
            note.unwrap_or_default(),
            date.unwrap_or_default(),
        )
    };

    submit_and_report(&mut controller)
}

pub fn handle_update(id: i64, config_dir: &Path) -> Result<()> {
    let ctx = ApiContext::load(config_dir)?;
    let mut controller = DashboardController::new(ctx.repo);

    controller.refresh();
    let existing = match controller.entry_by_id(id) {
        Some(entry) => entry.clone(),
        None => {
            if let Some(msg) = &controller.error {
                anyhow::bail!("{}", msg);
            }
            anyhow::bail!("Entry {} not found.", id)
        }
    };

    controller.start_update(existing.clone());
    controller.draft = prompt_draft(&existing)?;

    submit_and_report(&mut controller)
}

pub fn handle_rm(id: i64, config_dir: &Path) -> Result<()> {
    let ctx = ApiContext::load(config_dir)?;
    let mut controller = DashboardController::new(ctx.repo);

    if controller.delete(id) {
        println!("✓ Entry {} deleted.", id);
        if let Some(msg) = &controller.error {
            println!("⚠ {}", msg);
        }
        Ok(())
    } else {
        let msg = controller
            .error
            .clone()
            .unwrap_or_else(|| "Failed to delete entry. Please try again.".to_string());
        anyhow::bail!("{}", msg)
    }
}

pub fn handle_list(config_dir: &Path) -> Result<()> {
    let ctx = ApiContext::load(config_dir)?;
    let mut controller = DashboardController::new(ctx.repo);

    controller.refresh();
    if let Some(msg) = &controller.error {
        anyhow::bail!("{}", msg);
    }

    print_entries(&controller.entries);
    Ok(())
}

pub fn handle_show(id: i64, config_dir: &Path) -> Result<()> {
    let ctx = ApiContext::load(config_dir)?;

    let entry = ctx.repo.get(id)?;
    print_entry_card(&entry);
    Ok(())
}
