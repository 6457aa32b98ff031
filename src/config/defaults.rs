//! Default configuration values

/// Default Spark API base URL (messages are posted to `<base>/messages`)
pub const DEFAULT_SPARK_BASE_URL: &str = "https://api.ciscospark.com/v1";

/// Default fence language
pub const DEFAULT_LANGUAGE: &str = crate::snippet::DEFAULT_LANGUAGE;

/// Default timeout in seconds
pub const DEFAULT_TIMEOUT: u64 = 30;

/// Prefix for environment variable overrides
pub const ENV_PREFIX: &str = "MDSPARK";
