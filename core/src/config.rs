use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const ENV_PREFIX: &str = "CASE_SCAFFOLD_";

/// How the builder treats a scaffold file that is already on disk.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WritePolicy {
    /// Rewrite every file with its default content. Edits made since the
    /// previous run are lost.
    #[default]
    Overwrite,
    /// Leave any existing non-empty file untouched.
    #[serde(alias = "preserve")]
    PreserveExisting,
}

impl WritePolicy {
    pub fn parse(raw: &str) -> CoreResult<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "overwrite" => Ok(WritePolicy::Overwrite),
            "preserve" | "preserve_existing" => Ok(WritePolicy::PreserveExisting),
            other => Err(CoreError::Config(format!(
                "unknown write policy '{}' (expected overwrite|preserve)",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    pub fn parse(raw: &str) -> CoreResult<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(CoreError::Config(format!(
                "unknown log format '{}' (expected text|json)",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogConfig {
    /// `EnvFilter` directive, e.g. `warn` or `case_core=debug`.
    #[serde(default = "default_log_filter")]
    pub filter: String,
    #[serde(default)]
    pub format: LogFormat,
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            format: LogFormat::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScaffoldConfig {
    /// Directory the case root is created under.
    #[serde(default = "default_base_dir")]
    pub base_dir: PathBuf,
    #[serde(default)]
    pub write_policy: WritePolicy,
    #[serde(default)]
    pub log: LogConfig,
}

fn default_base_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            base_dir: default_base_dir(),
            write_policy: WritePolicy::default(),
            log: LogConfig::default(),
        }
    }
}

impl ScaffoldConfig {
    pub fn from_env() -> CoreResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from defaults overlaid with `CASE_SCAFFOLD_*` values
    /// returned by `lookup`. Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> CoreResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |suffix: &str| {
            lookup(&format!("{}{}", ENV_PREFIX, suffix)).filter(|v| !v.trim().is_empty())
        };

        let mut cfg = ScaffoldConfig::default();
        if let Some(v) = get("BASE_DIR") {
            cfg.base_dir = PathBuf::from(v);
        }
        if let Some(v) = get("WRITE_POLICY") {
            cfg.write_policy = WritePolicy::parse(&v)?;
        }
        if let Some(v) = get("LOG") {
            cfg.log.filter = v;
        }
        if let Some(v) = get("LOG_FORMAT") {
            cfg.log.format = LogFormat::parse(&v)?;
        }
        Ok(cfg)
    }
}
