use std::path::PathBuf;

use anyhow::{Result, anyhow};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Clone, Debug, Default)]
pub struct AppConfig {
    pub roster_path: Option<PathBuf>,
    pub output: OutputFormat,
    pub log_filter: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let roster_path = lookup("HR_ROSTER_PATH")
            .map(|raw| raw.trim().to_string())
            .filter(|raw| !raw.is_empty())
            .map(PathBuf::from);

        let output = match lookup("HR_OUTPUT") {
            None => OutputFormat::default(),
            Some(raw) => match raw.trim().to_lowercase().as_str() {
                "" | "text" => OutputFormat::Text,
                "json" => OutputFormat::Json,
                other => return Err(anyhow!("HR_OUTPUT must be text or json, got {other}")),
            },
        };

        let log_filter = lookup("HR_LOG").filter(|raw| !raw.trim().is_empty());

        Ok(Self {
            roster_path,
            output,
            log_filter,
        })
    }
}
