use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use dekadal_calendar::CalendarDate;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG: &str = "dekadal.toml";

/// Top-level dekadal configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct DekadalConfig {
    /// Output settings.
    #[serde(default)]
    pub output: OutputToml,

    /// Grouping settings.
    #[serde(default)]
    pub group: GroupToml,

    /// Clock settings.
    #[serde(default)]
    pub clock: ClockToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputToml {
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for OutputToml {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

fn default_format() -> String {
    "text".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GroupToml {
    #[serde(default = "default_group_key")]
    pub key: String,
}

impl Default for GroupToml {
    fn default() -> Self {
        Self {
            key: default_group_key(),
        }
    }
}

fn default_group_key() -> String {
    "end".to_string()
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ClockToml {
    /// Pins "today" for reproducible runs, as a quoted `YYYY-MM-DD` string.
    #[serde(default)]
    pub today: Option<CalendarDate>,
}

/// Loads the configuration.
///
/// An explicit `path` must exist. Without one, `./dekadal.toml` is read if
/// present and defaults are used otherwise.
pub fn load(path: Option<&Path>) -> Result<DekadalConfig> {
    let path: PathBuf = match path {
        Some(p) => p.to_path_buf(),
        None => {
            let fallback = PathBuf::from(DEFAULT_CONFIG);
            if !fallback.is_file() {
                tracing::debug!("no config file, using defaults");
                return Ok(DekadalConfig::default());
            }
            fallback
        }
    };
    let toml_str = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    let config: DekadalConfig = toml::from_str(&toml_str)
        .with_context(|| format!("failed to parse TOML config: {}", path.display()))?;
    tracing::debug!(path = %path.display(), "config loaded");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_toml_gives_defaults() {
        let config: DekadalConfig = toml::from_str("").unwrap();
        assert_eq!(config.output.format, "text");
        assert_eq!(config.group.key, "end");
        assert!(config.clock.today.is_none());
    }

    #[test]
    fn full_toml() {
        let config: DekadalConfig = toml::from_str(
            r#"
            [output]
            format = "json"

            [group]
            key = "start"

            [clock]
            today = "2014-01-15"
            "#,
        )
        .unwrap();
        assert_eq!(config.output.format, "json");
        assert_eq!(config.group.key, "start");
        assert_eq!(
            config.clock.today,
            Some(CalendarDate::new(2014, 1, 15).unwrap())
        );
    }

    #[test]
    fn unknown_fields_rejected() {
        assert!(toml::from_str::<DekadalConfig>("[output]\ncolour = true\n").is_err());
        assert!(toml::from_str::<DekadalConfig>("[plot]\n").is_err());
    }

    #[test]
    fn invalid_today_rejected() {
        assert!(toml::from_str::<DekadalConfig>("[clock]\ntoday = \"2014-02-30\"\n").is_err());
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("dekadal.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[group]\nkey = \"start\"").unwrap();
        let config = load(Some(&path)).unwrap();
        assert_eq!(config.group.key, "start");
        assert_eq!(config.output.format, "text");
    }

    #[test]
    fn load_missing_explicit_file_fails() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let err = load(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert!(err.to_string().contains("failed to read config file"));
    }
}
