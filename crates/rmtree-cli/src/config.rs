//! Runtime configuration resolved from the command line and environment

use std::path::PathBuf;

use rmtree_providers::LoadOptions;

use crate::args::Cli;
use crate::presentation::FormatOptions;

/// Device location of the metadata directory
pub const DEFAULT_SOURCE_PATH: &str = "/home/root/.local/share/remarkable/xochitl";

/// Environment variable overriding the default source directory
pub const SOURCE_PATH_ENV: &str = "RMTREE_PATH";

#[derive(Debug, Clone)]
pub struct Config {
    pub path: PathBuf,
    pub format: FormatOptions,
    pub max_depth: usize,
    pub load: LoadOptions,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Self {
        let env_path = std::env::var(SOURCE_PATH_ENV).ok();

        Self {
            path: resolve_source_path(cli.path.as_deref(), env_path.as_deref()),
            format: FormatOptions {
                enable_color: !cli.no_color,
                show_icons: cli.icons,
                show_labels: cli.labels,
                show_ids: cli.uuid,
                ..FormatOptions::default()
            },
            max_depth: cli.max_depth,
            load: LoadOptions::default(),
        }
    }
}

/// Positional argument first, then the environment, then the device default.
/// Empty values count as unset.
pub fn resolve_source_path(explicit: Option<&str>, env_value: Option<&str>) -> PathBuf {
    let raw = explicit
        .filter(|p| !p.is_empty())
        .or_else(|| env_value.filter(|p| !p.is_empty()))
        .unwrap_or(DEFAULT_SOURCE_PATH);
    expand_tilde(raw)
}

pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}
