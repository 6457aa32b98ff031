//! Configuration module - handles loading and merging configs

mod defaults;
mod loader;

pub use defaults::*;

use crate::cli::Args;
use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub spark: SparkConfig,

    #[serde(default)]
    pub format: FormatConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub network: NetworkConfig,

    /// Command-line aliases (e.g., "demo" = "-t Demo --post")
    #[serde(default)]
    pub aliases: HashMap<String, String>,
}

/// Spark room posting settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SparkConfig {
    /// Post the snippet to the room after copying it
    #[serde(default)]
    pub post: bool,

    #[serde(default)]
    pub room_id: Option<String>,

    #[serde(default)]
    pub token: Option<Secret>,

    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// Snippet formatting settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatConfig {
    #[serde(default = "default_language")]
    pub language: String,
}

/// What happens to the snippet locally
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_true")]
    pub copy: bool,

    /// Render the snippet in the terminal instead of printing it raw
    #[serde(default)]
    pub preview: bool,

    /// Do not print the snippet at all
    #[serde(default)]
    pub quiet: bool,
}

/// HTTP client settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Use the OS resolver instead of the built-in Cloudflare resolver
    #[serde(default)]
    pub system_dns: bool,
}

/// A credential that never shows up in `Debug` or `Display` output
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(***)")
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("***")
    }
}

// Default value functions
fn default_base_url() -> String {
    DEFAULT_SPARK_BASE_URL.to_string()
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

fn default_true() -> bool {
    true
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT
}

impl Default for SparkConfig {
    fn default() -> Self {
        Self {
            post: false,
            room_id: None,
            token: None,
            base_url: default_base_url(),
        }
    }
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            copy: true,
            preview: false,
            quiet: false,
        }
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            timeout: default_timeout(),
            system_dns: false,
        }
    }
}

/// Room and token needed to post, checked together
#[derive(Debug, Clone)]
pub struct SparkCredentials {
    pub room_id: String,
    pub token: Secret,
}

impl Config {
    /// Apply CLI argument overrides (these take precedence over files and env)
    pub fn with_cli_overrides(mut self, args: &Args) -> Self {
        if let Some(post) = args.post {
            self.spark.post = post;
        }
        if let Some(ref room) = args.room {
            self.spark.room_id = Some(room.clone());
        }
        if let Some(ref lang) = args.lang {
            self.format.language = lang.clone();
        }
        if let Some(copy) = args.copy {
            self.output.copy = copy;
        }
        if args.preview {
            self.output.preview = true;
        }
        if args.quiet {
            self.output.quiet = true;
        }
        self
    }

    /// Messages endpoint derived from the configured base URL
    pub fn messages_url(&self) -> String {
        format!("{}/messages", self.spark.base_url.trim_end_matches('/'))
    }

    /// Room id and token, or a config error naming what is missing
    pub fn spark_credentials(&self) -> Result<SparkCredentials, Error> {
        let room_id = self
            .spark
            .room_id
            .clone()
            .filter(|r| !r.trim().is_empty());
        let token = self.spark.token.clone().filter(|t| !t.is_empty());

        match (room_id, token) {
            (Some(room_id), Some(token)) => Ok(SparkCredentials { room_id, token }),
            (None, Some(_)) => Err(Error::Config(format!(
                "posting is enabled but no room id is set (use -r, {}_ROOM_ID or [spark] room_id)",
                ENV_PREFIX
            ))),
            (Some(_), None) => Err(Error::Config(format!(
                "posting is enabled but no token is set (use {}_TOKEN or [spark] token)",
                ENV_PREFIX
            ))),
            (None, None) => Err(Error::Config(format!(
                "posting is enabled but neither room id nor token is set (see {}_ROOM_ID / {}_TOKEN)",
                ENV_PREFIX, ENV_PREFIX
            ))),
        }
    }
}

/// Example config printed by `--make-config`
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# mdspark configuration
# Looked up in ./mdspark.toml, ./.mdspark.toml, ~/mdspark.toml and
# <config dir>/mdspark/config.toml. Environment variables (MDSPARK_*) and
# command-line flags take precedence.

[spark]
# Post every snippet to the room (same as --post)
post = false
# room_id = "Y2lzY29zcGFyazovL3VzL1JPT00v..."
# Prefer MDSPARK_TOKEN over storing the token here
# token = "..."
base_url = "https://api.ciscospark.com/v1"

[format]
# Fence language tag
language = "python"

[output]
copy = true
preview = false
quiet = false

[network]
# Request timeout in seconds
timeout = 30
# Use the OS resolver instead of the built-in Cloudflare resolver
system_dns = false

[aliases]
# demo = "-t Demo --post"
"#;
