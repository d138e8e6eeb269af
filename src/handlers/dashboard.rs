use anyhow::Result;
use std::path::Path;

use crate::cli::input::{self, DashboardAction};
use crate::context::ApiContext;
use crate::controllers::DashboardController;
use crate::domain::Entry;
use crate::handlers::entry::{print_entries, prompt_draft};

/// Interactive dashboard loop: listing plus an action menu, re-rendered with
/// the controller's messages after each action.
pub fn handle_dashboard(config_dir: &Path) -> Result<()> {
    let ctx = ApiContext::load(config_dir)?;
    let mut controller = DashboardController::new(ctx.repo);

    println!("Entry Dashboard");
    println!("Manage your job hunting\n");

    controller.refresh();

    loop {
        if let Some(msg) = controller.error.take() {
            println!("⚠ {}", msg);
        }
        if let Some(msg) = controller.success.take() {
            println!("✓ {}", msg);
        }
        println!();

        print_entries(&controller.entries);

        match input::prompt_dashboard_menu()? {
            DashboardAction::Add => {
                controller.draft = prompt_draft(&Entry::default())?;
                controller.submit();
            }
            DashboardAction::Update => {
                let id = input::prompt_entry_id("Entry id to update")?;
                match controller.entry_by_id(id).cloned() {
                    Some(existing) => {
                        controller.start_update(existing.clone());
                        controller.draft = prompt_draft(&existing)?;
                        controller.submit();
                    }
                    None => println!("⚠ Entry {} not found.", id),
                }
            }
            DashboardAction::Delete => {
                let id = input::prompt_entry_id("Entry id to delete")?;
                controller.delete(id);
            }
            DashboardAction::Quit => break,
        }

        println!();
    }

    Ok(())
}
