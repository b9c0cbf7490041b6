//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
    value::Uncased,
};
use std::path::{Path, PathBuf};

/// Directory name under the user config dir
const APP_DIR: &str = "support-scout";

/// Project-level file names, checked in order
const PROJECT_CONFIG_FILES: [&str; 2] = ["scout.toml", ".scout.toml"];

/// Environment variables that override file settings, and the key each sets
pub const ENV_OVERRIDES: [(&str, &str); 3] = [
    ("TAVILY_API_URL", "search.api_url"),
    ("TAVILY_SEARCH_DEPTH", "search.depth"),
    ("TAVILY_MAX_RESULTS", "search.default_max_results"),
];

/// Config files that take part in a load
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigSources {
    /// `$XDG_CONFIG_HOME/support-scout/config.toml` (may not exist)
    pub global: Option<PathBuf>,
    /// `./scout.toml` or `./.scout.toml`, whichever exists first
    pub project: Option<PathBuf>,
    /// `--config <path>`
    pub explicit: Option<PathBuf>,
}

impl ConfigSources {
    /// Discover global and project files relative to the current directory
    pub fn discover(explicit: Option<&Path>) -> Self {
        Self {
            global: ConfigLoader::global_config_path(),
            project: ConfigLoader::project_config_path(),
            explicit: explicit.map(Path::to_path_buf),
        }
    }

    /// Human-readable listing, highest priority first
    pub fn describe(&self) -> String {
        let mut lines = vec!["Configuration sources (in priority order):".to_string()];

        let env_set: Vec<&str> = ENV_OVERRIDES
            .iter()
            .map(|(var, _)| *var)
            .filter(|var| std::env::var_os(var).is_some())
            .collect();
        if env_set.is_empty() {
            lines.push(format!(
                "  [     ] Env:      {}",
                ENV_OVERRIDES.map(|(var, _)| var).join(", ")
            ));
        } else {
            lines.push(format!("  [SET  ] Env:      {}", env_set.join(", ")));
        }

        if let Some(path) = &self.explicit {
            lines.push(format!("  {} Explicit: {}", marker(path), path.display()));
        }

        match &self.project {
            Some(path) => lines.push(format!("  [FOUND] Project:  {}", path.display())),
            None => lines.push(format!(
                "  [     ] Project:  ./{}",
                PROJECT_CONFIG_FILES.join(" or ./")
            )),
        }

        if let Some(path) = &self.global {
            lines.push(format!("  {} Global:   {}", marker(path), path.display()));
        }

        lines.push("  [FOUND] Default:  built-in defaults".to_string());
        lines.join("\n")
    }
}

fn marker(path: &Path) -> &'static str {
    if path.exists() { "[FOUND]" } else { "[     ]" }
}

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `TAVILY_API_URL`, `TAVILY_SEARCH_DEPTH`, `TAVILY_MAX_RESULTS`
    /// 2. Explicit config path (if provided; must exist)
    /// 3. Project root: `./scout.toml` or `./.scout.toml`
    /// 4. Global: `$XDG_CONFIG_HOME/support-scout/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        Self::load_from(&ConfigSources::discover(config_path))
    }

    /// Load from an explicit set of sources
    pub fn load_from(sources: &ConfigSources) -> Result<FileConfig, Box<figment::Error>> {
        if let Some(path) = &sources.explicit
            && !path.exists()
        {
            return Err(Box::new(figment::Error::from(format!(
                "config file not found: {}",
                path.display()
            ))));
        }

        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(path) = &sources.global
            && path.exists()
        {
            figment = figment.merge(Toml::file(path));
        }
        if let Some(path) = &sources.project {
            figment = figment.merge(Toml::file(path));
        }
        if let Some(path) = &sources.explicit {
            figment = figment.merge(Toml::file(path));
        }

        figment
            .merge(Self::env_overrides())
            .extract()
            .map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    ///
    /// Environment overrides still apply; they are not config files.
    pub fn load_defaults() -> Result<FileConfig, Box<figment::Error>> {
        Self::load_from(&ConfigSources::default())
    }

    fn env_overrides() -> Env {
        Env::raw()
            .only(&ENV_OVERRIDES.map(|(var, _)| var))
            .map(|key| {
                ENV_OVERRIDES
                    .iter()
                    .find(|(var, _)| key.as_str().eq_ignore_ascii_case(var))
                    .map(|(_, target)| Uncased::from(*target))
                    .unwrap_or_else(|| Uncased::from(key.as_str().to_string()))
            })
    }

    /// Get the global config file path
    ///
    /// Returns `$XDG_CONFIG_HOME/support-scout/config.toml` if set,
    /// otherwise the platform config directory equivalent.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_CONFIG_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }
}
