//! Presentation settings for the `csdlreq` command line tool.

use anyhow::{Result, anyhow};
use std::env;
use std::str::FromStr;

pub const FORMAT_ENV: &str = "CSDLREQ_FORMAT";
pub const LOG_ENV: &str = "CSDLREQ_LOG";

const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(anyhow!("Unsupported output format: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub format: OutputFormat,
    pub verbose: bool,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            verbose: false,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Builds the configuration from command line flags, falling back to the
    /// environment for anything not given explicitly.
    pub fn resolve(format: Option<&str>, verbose: bool) -> Result<Self> {
        Self::resolve_with(format, verbose, |name| env::var(name).ok())
    }

    /// Same as [`Config::resolve`], reading fallbacks through `lookup`.
    pub fn resolve_with<F>(format: Option<&str>, verbose: bool, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let format = match format {
            Some(f) => f.parse()?,
            None => match lookup(FORMAT_ENV) {
                Some(f) => f
                    .parse()
                    .map_err(|e| anyhow!("Invalid {} value: {}", FORMAT_ENV, e))?,
                None => OutputFormat::default(),
            },
        };

        let log_filter = if verbose {
            "debug".to_string()
        } else {
            lookup(LOG_ENV).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
        };

        Ok(Self {
            format,
            verbose,
            log_filter,
        })
    }
}
