mod cli;
mod config;
mod context;
mod controllers;
mod domain;
mod handlers;
mod infrastructure;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use config::get_config_dir;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config_dir = get_config_dir()?;

    match cli.command {
        None => {
            handlers::home::handle_home();
            Ok(())
        }
        Some(Commands::View {
            company,
            status,
            date,
        }) => handlers::view::handle_view(company, status, date, &config_dir),
        Some(Commands::List) => handlers::entry::handle_list(&config_dir),
        Some(Commands::Show { id }) => handlers::entry::handle_show(id, &config_dir),
        Some(Commands::Add {
            company,
            status,
            image_url,
            note,
            date,
        }) => handlers::entry::handle_add(company, status, image_url, note, date, &config_dir),
        Some(Commands::Update { id }) => handlers::entry::handle_update(id, &config_dir),
        Some(Commands::Rm { id }) => handlers::entry::handle_rm(id, &config_dir),
        Some(Commands::Dashboard) => handlers::dashboard::handle_dashboard(&config_dir),
        Some(Commands::Config { subcommand }) => {
            handlers::config::handle_config(subcommand, &config_dir)
        }
        Some(Commands::Completion { shell }) => handlers::completion::handle_completion(&shell),
    }
}
