use anyhow::Result;
use std::path::Path;

use crate::config::Config;
use crate::infrastructure::ApiRepository;

/// Everything a handler needs to talk to the tracker service.
pub struct ApiContext {
    pub repo: ApiRepository,
}

impl ApiContext {
    pub fn load(config_dir: &Path) -> Result<Self> {
        let config = Config::load(config_dir)?;
        let repo = ApiRepository::new(config.api_base_url);

        Ok(Self { repo })
    }
}
