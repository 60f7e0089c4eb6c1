//! CLI configuration stored in `fitcheck.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "fitcheck.toml";

/// Report output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Markdown,
    Json,
}

/// Fitcheck configuration (TOML).
///
/// Missing fields default to the values below. Scoring thresholds are not
/// configurable.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct FitcheckConfig {
    /// Report format used when `--format` is not given.
    pub format: ReportFormat,

    pub share: ShareConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ShareConfig {
    /// Messaging deep-link base; the message goes into its `text` query parameter.
    pub base_url: String,

    /// Append the share link to text and markdown reports.
    pub include_link: bool,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            base_url: "https://wa.me/".to_string(),
            include_link: true,
        }
    }
}

impl FitcheckConfig {
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.share.base_url)
            .map_err(|err| anyhow!("share.base_url is not a valid url: {err}"))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(anyhow!("share.base_url must use http or https"));
        }
        if url.cannot_be_a_base() {
            return Err(anyhow!("share.base_url must be a base url"));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `FitcheckConfig::default()`.
pub fn load_config(path: &Path) -> Result<FitcheckConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "config missing, using defaults");
        let cfg = FitcheckConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: FitcheckConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("validate {}", path.display()))?;
    debug!(path = %path.display(), "config loaded");
    Ok(cfg)
}

/// Serialize config the way `fitcheck config` prints it.
pub fn render_config(cfg: &FitcheckConfig) -> Result<String> {
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    if !buf.ends_with('\n') {
        buf.push('\n');
    }
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::write_fixture;

    #[test]
    fn load_missing_returns_default() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cfg = load_config(&temp.path().join("missing.toml")).expect("load");
        assert_eq!(cfg, FitcheckConfig::default());
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = write_fixture(temp.path(), CONFIG_FILE, "format = \"markdown\"\n");
        let cfg = load_config(&path).expect("load");
        assert_eq!(cfg.format, ReportFormat::Markdown);
        assert_eq!(cfg.share, ShareConfig::default());
    }

    #[test]
    fn rejects_non_http_share_url() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = write_fixture(
            temp.path(),
            CONFIG_FILE,
            "[share]\nbase_url = \"mailto:someone@example.com\"\n",
        );
        let err = load_config(&path).expect_err("invalid");
        assert!(format!("{err:#}").contains("share.base_url"));
    }

    #[test]
    fn rejects_unknown_keys() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = write_fixture(temp.path(), CONFIG_FILE, "thresholds = 10\n");
        assert!(load_config(&path).is_err());
    }

    #[test]
    fn rendered_config_loads_back() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cfg = FitcheckConfig {
            format: ReportFormat::Json,
            share: ShareConfig {
                base_url: "https://example.com/send".to_string(),
                include_link: false,
            },
        };
        let path = write_fixture(temp.path(), CONFIG_FILE, &render_config(&cfg).expect("render"));
        assert_eq!(load_config(&path).expect("load"), cfg);
    }
}
