use crate::Result;
use crate::artifacts::ArtifactKind;
use camino::{Utf8Path, Utf8PathBuf};
use core::time::Duration;
use ohno::{IntoAppError, app_err};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use url::Url;

/// The default configuration TOML content, embedded from `default_config.toml`
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../../default_config.toml");

/// Name of the configuration file looked up in the workspace root
pub const CONFIG_FILE_NAME: &str = "quality-publish.toml";

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Which report files to analyze
    #[serde(default)]
    pub patterns: Patterns,

    /// Where to publish the results
    #[serde(default)]
    pub dashboard: Dashboard,
}

/// Comma-separated glob patterns, one entry per report kind
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Patterns {
    #[serde(default)]
    pub junit: String,
    #[serde(default)]
    pub findbugs: String,
    #[serde(default)]
    pub pmd: String,
    #[serde(default)]
    pub checkstyle: String,
    #[serde(default)]
    pub jacoco: String,
}

impl Patterns {
    #[must_use]
    pub fn get(&self, kind: ArtifactKind) -> &str {
        match kind {
            ArtifactKind::Junit => &self.junit,
            ArtifactKind::Findbugs => &self.findbugs,
            ArtifactKind::Pmd => &self.pmd,
            ArtifactKind::Checkstyle => &self.checkstyle,
            ArtifactKind::Jacoco => &self.jacoco,
        }
    }

    pub fn set(&mut self, kind: ArtifactKind, pattern: impl Into<String>) {
        let slot = match kind {
            ArtifactKind::Junit => &mut self.junit,
            ArtifactKind::Findbugs => &mut self.findbugs,
            ArtifactKind::Pmd => &mut self.pmd,
            ArtifactKind::Checkstyle => &mut self.checkstyle,
            ArtifactKind::Jacoco => &mut self.jacoco,
        };
        *slot = pattern.into();
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Dashboard {
    /// Root of the dashboard REST API
    #[serde(default = "default_dashboard_url")]
    pub url: String,

    /// Name of the CI instance as registered with the dashboard
    #[serde(default)]
    pub nice_name: String,

    /// Maximum time to wait for each dashboard request
    #[serde(default = "default_request_timeout", with = "humantime_serde")]
    pub request_timeout: Duration,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self {
            url: default_dashboard_url(),
            nice_name: String::new(),
            request_timeout: default_request_timeout(),
        }
    }
}

fn default_dashboard_url() -> String {
    "http://localhost:8080/api".to_string()
}

const fn default_request_timeout() -> Duration {
    Duration::from_secs(60)
}

impl Config {
    /// Load configuration from a file or use defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn load(workspace_root: &Utf8Path, config_path: Option<&Utf8PathBuf>) -> Result<Self> {
        let (final_path, text) = if let Some(path) = config_path {
            let text = fs::read_to_string(path).into_app_err_with(|| format!("reading quality-publish configuration file '{path}'"))?;
            (path.clone(), text)
        } else {
            let path = workspace_root.join(CONFIG_FILE_NAME);
            match fs::read_to_string(&path) {
                Ok(text) => (path, text),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    return Ok(Self::default());
                }
                Err(e) => return Err(e).into_app_err_with(|| format!("reading quality-publish configuration file '{path}'")),
            }
        };

        let config: Self = toml::from_str(&text).into_app_err_with(|| format!("parsing configuration file '{final_path}'"))?;
        config.validate()?;

        Ok(config)
    }

    /// Save the default configuration to a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub fn save_default(output_path: &Utf8Path) -> Result<()> {
        fs::write(output_path, DEFAULT_CONFIG_TOML).into_app_err_with(|| format!("writing default configuration to {output_path}"))?;
        Ok(())
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if the dashboard URL is not an absolute http(s) URL or the timeout is zero
    pub fn validate(&self) -> Result<()> {
        validate_dashboard_url(&self.dashboard.url)?;

        if self.dashboard.request_timeout.is_zero() {
            return Err(app_err!("dashboard.request_timeout must be greater than zero"));
        }

        Ok(())
    }
}

/// Check that `url` is an absolute http or https URL
pub fn validate_dashboard_url(url: &str) -> Result<()> {
    let parsed = Url::parse(url).into_app_err_with(|| format!("dashboard URL '{url}' is not a valid absolute URL"))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(app_err!("dashboard URL '{url}' must use http or https, got '{}'", parsed.scheme()));
    }

    Ok(())
}
