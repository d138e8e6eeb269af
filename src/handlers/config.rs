use anyhow::Result;
use std::path::Path;

use crate::cli::ConfigCommands;
use crate::config::Config;

pub fn handle_config(subcommand: Option<ConfigCommands>, config_dir: &Path) -> Result<()> {
    let mut config = Config::load(config_dir)?;

    match subcommand {
        None => {
            println!("\nCurrent Configuration:");
            println!("  API Base URL: {}", config.api_base_url);
        }
        Some(ConfigCommands::ApiUrl { url }) => {
            config.api_base_url = url.trim_end_matches('/').to_string();
            config.save(config_dir)?;
            println!("✓ API base URL updated to: {}", config.api_base_url);
        }
    }

    Ok(())
}
