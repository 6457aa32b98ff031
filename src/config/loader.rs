//! Configuration loader - handles TOML config hierarchy

use super::{Config, Secret, ENV_PREFIX};
use crate::error::Error;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use toml::Table;

impl Config {
    /// Load only aliases from config (fast, for early argument expansion)
    /// Aliases from every file are combined, later files winning conflicts
    pub fn load_aliases_only() -> HashMap<String, String> {
        let mut aliases = HashMap::new();
        for path in Self::config_paths() {
            if let Ok(content) = std::fs::read_to_string(&path) {
                if let Ok(config) = toml::from_str::<Config>(&content) {
                    aliases.extend(config.aliases);
                }
            }
        }
        aliases
    }

    /// Load configuration with precedence:
    /// 1. CLI arguments (handled separately via with_cli_overrides)
    /// 2. Environment variables
    /// 3. ./mdspark.toml or ./.mdspark.toml (project local)
    /// 4. ~/mdspark.toml (home directory)
    /// 5. <config dir>/mdspark/config.toml (XDG config)
    /// 6. Defaults (hardcoded)
    pub fn load() -> Result<Self, Error> {
        let mut table = Table::new();
        for path in Self::config_paths() {
            let loaded = Self::load_from_file(&path)?;
            tracing::debug!(path = %path.display(), "loaded config file");
            merge(&mut table, loaded);
        }
        let config = Self::from_table(table)
            .map_err(|e| Error::Config(format!("invalid merged configuration: {}", e)))?;

        Ok(Self::apply_env_overrides(config, |key| std::env::var(key).ok()))
    }

    /// Existing config files, lowest precedence first
    fn config_paths() -> Vec<PathBuf> {
        [
            Self::find_xdg_config(),
            Self::find_home_config(),
            Self::find_local_config(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Find XDG config file
    /// On Linux: ~/.config/mdspark/config.toml
    /// On macOS: ~/Library/Application Support/mdspark/config.toml OR ~/.config/mdspark/config.toml
    /// On Windows: C:\Users\<user>\AppData\Roaming\mdspark\config.toml
    fn find_xdg_config() -> Option<PathBuf> {
        if let Some(config_dir) = dirs::config_dir() {
            let path = config_dir.join("mdspark").join("config.toml");
            if path.exists() {
                return Some(path);
            }
        }

        #[cfg(target_os = "macos")]
        {
            if let Some(home) = dirs::home_dir() {
                let path = home.join(".config").join("mdspark").join("config.toml");
                if path.exists() {
                    return Some(path);
                }
            }
        }

        None
    }

    /// Find home directory config
    fn find_home_config() -> Option<PathBuf> {
        let home = dirs::home_dir()?;
        let path = home.join("mdspark.toml");
        path.exists().then_some(path)
    }

    /// Find project local config
    fn find_local_config() -> Option<PathBuf> {
        let cwd = std::env::current_dir().ok()?;

        ["mdspark.toml", ".mdspark.toml"]
            .iter()
            .map(|name| cwd.join(name))
            .find(|path| path.exists())
    }

    /// Load a config file as a raw table, checking it against the schema on its own
    fn load_from_file(path: &Path) -> Result<Table, Error> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("cannot read {}: {}", path.display(), e)))?;
        let invalid = |e: toml::de::Error| Error::Config(format!("invalid {}: {}", path.display(), e));
        let table: Table = content.parse().map_err(invalid)?;
        Self::from_table(table.clone()).map_err(invalid)?;
        Ok(table)
    }

    fn from_table(table: Table) -> Result<Config, toml::de::Error> {
        toml::Value::Table(table).try_into()
    }

    /// Apply environment variable overrides, reading through `lookup`
    fn apply_env_overrides(mut config: Config, lookup: impl Fn(&str) -> Option<String>) -> Config {
        let var = |name: &str| lookup(&format!("{}_{}", ENV_PREFIX, name));

        // === Spark settings ===
        if let Some(val) = var("POST") {
            config.spark.post = parse_bool(&val);
        }
        if let Some(room) = var("ROOM_ID") {
            config.spark.room_id = Some(room);
        }
        if let Some(token) = var("TOKEN") {
            config.spark.token = Some(Secret::new(token));
        }
        if let Some(url) = var("BASE_URL") {
            config.spark.base_url = url;
        }

        // === Format / output settings ===
        if let Some(lang) = var("LANG") {
            config.format.language = lang;
        }
        if let Some(val) = var("COPY") {
            config.output.copy = parse_bool(&val);
        }

        // === Network settings ===
        if let Some(val) = var("TIMEOUT") {
            if let Ok(timeout) = val.parse() {
                config.network.timeout = timeout;
            }
        }
        if let Some(val) = var("SYSTEM_DNS") {
            config.network.system_dns = parse_bool(&val);
        }

        config
    }
}

/// Merge `overlay` into `base` key by key (overlay takes precedence)
/// Nested tables are merged recursively, so keys a file leaves out keep their lower value
fn merge(base: &mut Table, overlay: Table) {
    for (key, value) in overlay {
        match value {
            toml::Value::Table(nested) => match base.get_mut(&key) {
                Some(toml::Value::Table(existing)) => merge(existing, nested),
                _ => {
                    base.insert(key, toml::Value::Table(nested));
                }
            },
            value => {
                base.insert(key, value);
            }
        }
    }
}

/// Parse boolean from string (true/false/1/0/yes/no)
fn parse_bool(s: &str) -> bool {
    matches!(s.to_lowercase().as_str(), "true" | "1" | "yes" | "on")
}

impl Config {
    /// Load config from a TOML string (for testing)
    #[cfg(test)]
    pub fn from_toml(content: &str) -> Result<Config, toml::de::Error> {
        toml::from_str(content)
    }
}
