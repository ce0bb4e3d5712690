//! Loader configuration, read from TOML
//!
//! Every field has a default, so an empty document is a valid config.

use crate::errors::{GlError, GlResult};
use crate::logging::LogFormat;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::Level;

/// File name searched by `LoaderConfig::discover`
pub const CONFIG_FILE_NAME: &str = "glbind.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoaderConfig {
    #[serde(default)]
    pub loader: LoaderSettings,

    #[serde(default)]
    pub library: LibrarySettings,

    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoaderSettings {
    #[serde(default)]
    pub policy: LoadPolicy,

    /// Version whose core entries count as mandatory
    #[serde(default = "default_version")]
    pub require_version: GlVersion,

    #[serde(default)]
    pub error_check: ErrorCheck,

    /// Emit a trace event per native call
    #[serde(default = "default_false")]
    pub trace_calls: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LibrarySettings {
    /// Replaces the platform's default library names when non-empty
    #[serde(default)]
    pub paths: Vec<String>,

    /// Ask `glXGetProcAddressARB` / `wglGetProcAddress` before the plain symbol table
    #[serde(default = "default_true")]
    pub use_get_proc_address: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,
}

/// What `try_import` does about unresolved core entries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LoadPolicy {
    /// Record and log them, never fail
    #[default]
    Lenient,
    /// Fail with `GlError::MissingMandatory`
    RequireCore,
}

/// When the call surface consults `glGetError`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCheck {
    Never,
    /// After calls that populate an output parameter
    #[default]
    Outputs,
    /// After every call except `glGetError` itself
    Always,
}

/// `major.minor` API version
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GlVersion {
    pub major: u8,
    pub minor: u8,
}

impl GlVersion {
    pub const fn new(major: u8, minor: u8) -> Self {
        Self { major, minor }
    }
}

impl fmt::Display for GlVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl FromStr for GlVersion {
    type Err = GlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || GlError::Config(format!("invalid GL version `{}`, expected MAJOR.MINOR", s));
        let (major, minor) = s.trim().split_once('.').ok_or_else(invalid)?;
        Ok(Self {
            major: major.parse().map_err(|_| invalid())?,
            minor: minor.parse().map_err(|_| invalid())?,
        })
    }
}

impl TryFrom<String> for GlVersion {
    type Error = GlError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<GlVersion> for String {
    fn from(version: GlVersion) -> Self {
        version.to_string()
    }
}

impl Default for LoaderSettings {
    fn default() -> Self {
        Self {
            policy: LoadPolicy::Lenient,
            require_version: default_version(),
            error_check: ErrorCheck::Outputs,
            trace_calls: false,
        }
    }
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            paths: Vec::new(),
            use_get_proc_address: true,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::Compact,
        }
    }
}

fn default_true() -> bool { true }
fn default_false() -> bool { false }
fn default_level() -> String { "info".to_string() }
fn default_version() -> GlVersion { GlVersion::new(3, 3) }

impl LoaderConfig {
    pub fn from_file(path: impl AsRef<Path>) -> GlResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| GlError::Config(format!("failed to read {}: {}", path.display(), e)))?;

        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> GlResult<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| GlError::Config(format!("failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> GlResult<String> {
        toml::to_string_pretty(self)
            .map_err(|e| GlError::Config(format!("failed to serialize config: {}", e)))
    }

    pub fn validate(&self) -> GlResult<()> {
        Level::from_str(&self.logging.level).map_err(|_| {
            GlError::Config(format!("unknown log level `{}`", self.logging.level))
        })?;
        if self.library.paths.iter().any(|p| p.trim().is_empty()) {
            return Err(GlError::Config("library paths must not be empty".into()));
        }
        Ok(())
    }

    /// Find `glbind.toml` in the current directory or its parents
    pub fn discover() -> Self {
        std::env::current_dir()
            .ok()
            .and_then(|dir| Self::discover_from(&dir))
            .map(|(_, config)| config)
            .unwrap_or_default()
    }

    /// Walk up from `start`; files that fail to load are skipped
    pub fn discover_from(start: &Path) -> Option<(PathBuf, Self)> {
        let mut current = Some(start.to_path_buf());

        while let Some(dir) = current {
            let candidate = dir.join(CONFIG_FILE_NAME);
            if candidate.is_file() {
                match Self::from_file(&candidate) {
                    Ok(config) => return Some((candidate, config)),
                    Err(e) => tracing::warn!(path = %candidate.display(), error = %e, "ignoring config file"),
                }
            }
            current = dir.parent().map(Path::to_path_buf);
        }

        None
    }
}
