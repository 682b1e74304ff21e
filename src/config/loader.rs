//! Configuration loading and resolution.
//!
//! Loading reads and parses the YAML file. Resolution layers command-line
//! flags (which already carry their environment fallbacks) over the file
//! and the built-in defaults, then validates the result.

use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::{debug, warn};

use crate::config::schema::SiteConfig;
use crate::content::DEFAULT_FETCH_TIMEOUT;
use crate::error::{ConfigError, Severity, ValidationIssue};

/// Default listen address.
pub const DEFAULT_BIND: &str = "127.0.0.1:3000";

/// Default docs directory.
pub const DEFAULT_DOCS_DIR: &str = "docs";

/// Default simulated contact submission delay.
pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_secs(1);

/// Default prefix for relative markdown targets.
pub const DEFAULT_ASSET_BASE: &str = "/docs/";

/// Limits applied while loading configuration.
#[derive(Debug, Clone)]
pub struct ConfigLimits {
    /// Maximum configuration file size in bytes.
    pub max_config_size: usize,
    /// Longest accepted contact submission delay.
    pub max_submit_delay: Duration,
}

impl Default for ConfigLimits {
    fn default() -> Self {
        Self {
            max_config_size: env_or("AACBOOK_MAX_CONFIG_SIZE", 1024 * 1024),
            max_submit_delay: Duration::from_secs(env_or("AACBOOK_MAX_SUBMIT_DELAY_SECS", 30)),
        }
    }
}

/// Where chapter markdown is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocsLocation {
    Dir(PathBuf),
    Url(String),
}

/// Values given on the command line. `None` means "not given".
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub bind: Option<String>,
    pub docs_dir: Option<PathBuf>,
    pub docs_url: Option<String>,
    pub slides: Option<PathBuf>,
    pub metrics_port: Option<u16>,
    pub submit_delay: Option<Duration>,
    pub fetch_timeout: Option<Duration>,
}

/// Fully resolved runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub bind: String,
    pub docs: DocsLocation,
    pub fetch_timeout: Duration,
    pub placeholders: bool,
    pub slides: Option<PathBuf>,
    pub submit_delay: Duration,
    pub asset_base: String,
    pub metrics_port: Option<u16>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            docs: DocsLocation::Dir(PathBuf::from(DEFAULT_DOCS_DIR)),
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
            placeholders: true,
            slides: None,
            submit_delay: DEFAULT_SUBMIT_DELAY,
            asset_base: DEFAULT_ASSET_BASE.to_string(),
            metrics_port: None,
        }
    }
}

/// Outcome of resolving configuration.
#[derive(Debug)]
pub struct LoadResult {
    pub settings: Settings,
    /// Non-fatal issues found during validation.
    pub warnings: Vec<ValidationIssue>,
}

/// Reads and parses a configuration file.
///
/// # Errors
///
/// Returns [`ConfigError::MissingFile`] if `path` does not exist,
/// [`ConfigError::InvalidValue`] if it exceeds the size limit, and
/// [`ConfigError::ParseError`] for malformed or empty YAML.
pub fn load_file(path: &Path, limits: &ConfigLimits) -> Result<SiteConfig, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ConfigError::MissingFile {
                path: path.to_path_buf(),
            }
        } else {
            ConfigError::ParseError {
                path: path.to_path_buf(),
                line: None,
                message: e.to_string(),
            }
        }
    })?;

    if raw.len() > limits.max_config_size {
        return Err(ConfigError::InvalidValue {
            field: "file size".to_string(),
            value: raw.len().to_string(),
            expected: format!("at most {} bytes", limits.max_config_size),
        });
    }

    parse_config(&raw, path)
}

/// Parses configuration YAML. `path` is only used in error messages.
///
/// # Errors
///
/// Returns [`ConfigError::ParseError`] for malformed or empty YAML.
pub fn parse_config(raw: &str, path: &Path) -> Result<SiteConfig, ConfigError> {
    if raw.trim().is_empty() {
        return Err(ConfigError::ParseError {
            path: path.to_path_buf(),
            line: None,
            message: "Configuration file is empty".to_string(),
        });
    }
    serde_yaml::from_str(raw).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        line: e.location().map(|l| l.line()),
        message: e.to_string(),
    })
}

/// Resolves settings from an optional config file and command-line values.
///
/// Precedence is flag (or its environment variable) over file over
/// default. When no slides file is configured and the docs directory
/// contains `slides.json`, that file is used.
///
/// # Errors
///
/// Returns [`ConfigError::ValidationError`] listing every error-severity
/// issue, or any error from [`load_file`].
pub fn resolve(
    config_path: Option<&Path>,
    overrides: &Overrides,
    limits: &ConfigLimits,
) -> Result<LoadResult, ConfigError> {
    let (file, origin) = match config_path {
        Some(path) => {
            debug!(path = %path.display(), "loading configuration file");
            (load_file(path, limits)?, path.display().to_string())
        }
        None => (SiteConfig::default(), "<cli>".to_string()),
    };

    let mut issues = Vec::new();
    let defaults = Settings::default();

    let bind = overrides
        .bind
        .clone()
        .or_else(|| file.server.bind.clone())
        .unwrap_or(defaults.bind);

    let docs = match (&overrides.docs_dir, &overrides.docs_url) {
        (Some(_), Some(_)) => {
            issues.push(error("docs", "--docs-dir and --docs-url are mutually exclusive"));
            defaults.docs
        }
        (Some(dir), None) => DocsLocation::Dir(dir.clone()),
        (None, Some(url)) => DocsLocation::Url(url.clone()),
        (None, None) => match (&file.docs.dir, &file.docs.url) {
            (Some(_), Some(_)) => {
                issues.push(error("docs", "set either docs.dir or docs.url, not both"));
                defaults.docs
            }
            (Some(dir), None) => DocsLocation::Dir(dir.clone()),
            (None, Some(url)) => DocsLocation::Url(url.clone()),
            (None, None) => defaults.docs,
        },
    };

    if let DocsLocation::Url(url) = &docs {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            issues.push(error("docs.url", "must start with http:// or https://"));
        }
    }

    let fetch_timeout = overrides.fetch_timeout.or_else(|| {
        parse_duration_field(file.docs.fetch_timeout.as_deref(), "docs.fetch_timeout", &mut issues)
    });
    let fetch_timeout = fetch_timeout.unwrap_or(defaults.fetch_timeout);
    if fetch_timeout.is_zero() {
        issues.push(error("docs.fetch_timeout", "must be greater than zero"));
    }

    let submit_delay = overrides.submit_delay.or_else(|| {
        parse_duration_field(file.contact.submit_delay.as_deref(), "contact.submit_delay", &mut issues)
    });
    let submit_delay = submit_delay.unwrap_or(defaults.submit_delay);
    if submit_delay > limits.max_submit_delay {
        issues.push(error(
            "contact.submit_delay",
            &format!(
                "must be at most {}",
                humantime::format_duration(limits.max_submit_delay)
            ),
        ));
    }

    let asset_base = file.render.asset_base.clone().unwrap_or(defaults.asset_base);
    if !asset_base.ends_with('/') {
        issues.push(error("render.asset_base", "must end with '/'"));
    }

    let slides = overrides
        .slides
        .clone()
        .or_else(|| file.slides.path.clone())
        .or_else(|| match &docs {
            DocsLocation::Dir(dir) => Some(dir.join("slides.json")).filter(|p| p.is_file()),
            DocsLocation::Url(_) => None,
        });
    if let Some(path) = &slides {
        if !path.is_file() {
            issues.push(warning(
                "slides.path",
                &format!("{} does not exist, the deck will be empty", path.display()),
            ));
        }
    }

    if let DocsLocation::Dir(dir) = &docs {
        if !dir.is_dir() {
            issues.push(warning(
                "docs.dir",
                &format!("{} is not a directory, chapters will show placeholders", dir.display()),
            ));
        }
    }

    let (errors, warnings): (Vec<_>, Vec<_>) = issues
        .into_iter()
        .partition(|issue| issue.severity == Severity::Error);

    if !errors.is_empty() {
        return Err(ConfigError::ValidationError {
            path: origin,
            errors,
        });
    }
    for issue in &warnings {
        warn!(path = %issue.path, "{}", issue.message);
    }

    Ok(LoadResult {
        settings: Settings {
            bind,
            docs,
            fetch_timeout,
            placeholders: file.docs.placeholders.unwrap_or(defaults.placeholders),
            slides,
            submit_delay,
            asset_base,
            metrics_port: overrides.metrics_port.or(file.server.metrics_port),
        },
        warnings,
    })
}

/// Parses a humantime duration flag value.
///
/// # Errors
///
/// Returns a message suitable for clap's `value_parser`.
pub fn parse_duration_arg(value: &str) -> Result<Duration, String> {
    humantime::parse_duration(value).map_err(|e| format!("invalid duration '{value}': {e}"))
}

fn parse_duration_field(
    value: Option<&str>,
    path: &str,
    issues: &mut Vec<ValidationIssue>,
) -> Option<Duration> {
    let value = value?;
    match humantime::parse_duration(value) {
        Ok(d) => Some(d),
        Err(e) => {
            issues.push(error(path, &format!("invalid duration '{value}': {e}")));
            None
        }
    }
}

fn error(path: &str, message: &str) -> ValidationIssue {
    ValidationIssue {
        path: path.to_string(),
        message: message.to_string(),
        severity: Severity::Error,
    }
}

fn warning(path: &str, message: &str) -> ValidationIssue {
    ValidationIssue {
        path: path.to_string(),
        message: message.to_string(),
        severity: Severity::Warning,
    }
}

/// Parses an environment variable with a default value.
fn env_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(dir: &Path, yaml: &str) -> PathBuf {
        let path = dir.join("aacbook.yaml");
        std::fs::write(&path, yaml).unwrap();
        path
    }

    #[test]
    fn defaults_without_file() {
        let result = resolve(None, &Overrides::default(), &ConfigLimits::default()).unwrap();
        let s = result.settings;
        assert_eq!(s.bind, DEFAULT_BIND);
        assert_eq!(s.docs, DocsLocation::Dir(PathBuf::from("docs")));
        assert_eq!(s.submit_delay, Duration::from_secs(1));
        assert_eq!(s.fetch_timeout, Duration::from_secs(10));
        assert_eq!(s.asset_base, "/docs/");
        assert!(s.placeholders);
    }

    #[test]
    fn file_values_are_used() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_config(
            tmp.path(),
            "server:\n  bind: 0.0.0.0:8080\ndocs:\n  url: https://book.example\n  fetch_timeout: 3s\n  placeholders: false\ncontact:\n  submit_delay: 250ms\n",
        );
        let s = resolve(Some(&path), &Overrides::default(), &ConfigLimits::default())
            .unwrap()
            .settings;
        assert_eq!(s.bind, "0.0.0.0:8080");
        assert_eq!(s.docs, DocsLocation::Url("https://book.example".to_string()));
        assert_eq!(s.fetch_timeout, Duration::from_secs(3));
        assert_eq!(s.submit_delay, Duration::from_millis(250));
        assert!(!s.placeholders);
    }

    #[test]
    fn flags_override_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_config(tmp.path(), "server:\n  bind: 0.0.0.0:8080\ndocs:\n  url: https://book.example\n");
        let overrides = Overrides {
            bind: Some("127.0.0.1:0".to_string()),
            docs_dir: Some(tmp.path().to_path_buf()),
            ..Overrides::default()
        };
        let s = resolve(Some(&path), &overrides, &ConfigLimits::default())
            .unwrap()
            .settings;
        assert_eq!(s.bind, "127.0.0.1:0");
        assert_eq!(s.docs, DocsLocation::Dir(tmp.path().to_path_buf()));
    }

    #[test]
    fn slides_default_to_docs_dir() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("slides.json"), "[]").unwrap();
        let overrides = Overrides {
            docs_dir: Some(tmp.path().to_path_buf()),
            ..Overrides::default()
        };
        let s = resolve(None, &overrides, &ConfigLimits::default())
            .unwrap()
            .settings;
        assert_eq!(s.slides, Some(tmp.path().join("slides.json")));
    }

    #[test]
    fn both_doc_locations_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_config(tmp.path(), "docs:\n  dir: docs\n  url: https://x.example\n");
        let err = resolve(Some(&path), &Overrides::default(), &ConfigLimits::default()).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError { ref errors, .. } if errors[0].path == "docs"));
    }

    #[test]
    fn bad_values_are_collected() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_config(
            tmp.path(),
            "docs:\n  url: ftp://x.example\ncontact:\n  submit_delay: soon\nrender:\n  asset_base: /assets\n",
        );
        let err = resolve(Some(&path), &Overrides::default(), &ConfigLimits::default()).unwrap_err();
        let ConfigError::ValidationError { errors, .. } = err else {
            panic!("expected validation error");
        };
        let paths: Vec<&str> = errors.iter().map(|i| i.path.as_str()).collect();
        assert!(paths.contains(&"docs.url"));
        assert!(paths.contains(&"contact.submit_delay"));
        assert!(paths.contains(&"render.asset_base"));
    }

    #[test]
    fn missing_slides_file_is_a_warning() {
        let tmp = tempfile::tempdir().unwrap();
        let overrides = Overrides {
            docs_dir: Some(tmp.path().to_path_buf()),
            slides: Some(tmp.path().join("nope.json")),
            ..Overrides::default()
        };
        let result = resolve(None, &overrides, &ConfigLimits::default()).unwrap();
        assert!(result.warnings.iter().any(|w| w.path == "slides.path"));
    }

    #[test]
    fn excessive_submit_delay_is_rejected() {
        let overrides = Overrides {
            submit_delay: Some(Duration::from_secs(3600)),
            ..Overrides::default()
        };
        assert!(resolve(None, &overrides, &ConfigLimits::default()).is_err());
    }

    #[test]
    fn missing_file_and_parse_errors() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("absent.yaml");
        assert!(matches!(
            load_file(&missing, &ConfigLimits::default()),
            Err(ConfigError::MissingFile { .. })
        ));
        let empty = write_config(tmp.path(), "   \n");
        assert!(matches!(
            load_file(&empty, &ConfigLimits::default()),
            Err(ConfigError::ParseError { .. })
        ));
        let unknown = write_config(tmp.path(), "servr:\n  bind: x\n");
        assert!(matches!(
            load_file(&unknown, &ConfigLimits::default()),
            Err(ConfigError::ParseError { .. })
        ));
    }

    #[test]
    fn oversized_file_is_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_config(tmp.path(), "server:\n  bind: 127.0.0.1:1\n");
        let limits = ConfigLimits {
            max_config_size: 4,
            ..ConfigLimits::default()
        };
        assert!(matches!(
            load_file(&path, &limits),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn duration_arg() {
        assert_eq!(parse_duration_arg("2s").unwrap(), Duration::from_secs(2));
        assert!(parse_duration_arg("later").is_err());
    }
}
