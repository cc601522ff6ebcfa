//! Configuration file loading with precedence handling.

use crate::image::ImageSize;
use crate::layout::LayoutTheme;
use crate::source::DEFAULT_DOCUMENT;
use crate::view_state::{ViewportDimensions, ZoomBounds};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable naming an alternate config file.
pub const CONFIG_ENV: &str = "MDCANVAS_CONFIG";

/// Environment variable overriding the document path.
pub const DOCUMENT_ENV: &str = "MDCANVAS_DOCUMENT";

/// Viewport width used when nothing else is configured.
pub const DEFAULT_VIEWPORT_WIDTH: u32 = 1280;

/// Viewport height used when nothing else is configured.
pub const DEFAULT_VIEWPORT_HEIGHT: u32 = 800;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file path is empty or cannot be resolved.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// Failed to read config file (permission issues, not a file).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A value parsed but is out of range.
    #[error("Invalid value for {key}: {reason}")]
    InvalidValue {
        /// Offending key.
        key: String,
        /// Why it was rejected.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/mdcanvas/config.toml`:
///
/// ```toml
/// document = "docs/guide.md"
/// viewport_width = 1000
/// zoom_max = 3.0
///
/// [theme]
/// bullet = "-"
///
/// [images."logo.png"]
/// width = 1400
/// height = 600
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Markdown document to load.
    #[serde(default)]
    pub document: Option<PathBuf>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Viewport width in pixels.
    #[serde(default)]
    pub viewport_width: Option<u32>,

    /// Viewport height in pixels.
    #[serde(default)]
    pub viewport_height: Option<u32>,

    /// Lower zoom bound.
    #[serde(default)]
    pub zoom_min: Option<f64>,

    /// Upper zoom bound.
    #[serde(default)]
    pub zoom_max: Option<f64>,

    /// Zoom change per unit of wheel delta.
    #[serde(default)]
    pub zoom_step: Option<f64>,

    /// Palette and bullet overrides.
    #[serde(default)]
    pub theme: Option<ThemeSection>,

    /// Natural sizes for image URLs, keyed by URL.
    #[serde(default)]
    pub images: HashMap<String, ImageSize>,
}

/// `[theme]` section. Unset keys keep the default palette.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ThemeSection {
    /// List bullet glyph.
    #[serde(default)]
    pub bullet: Option<String>,
    /// Body text color.
    #[serde(default)]
    pub text_color: Option<String>,
    /// Heading color.
    #[serde(default)]
    pub heading_color: Option<String>,
    /// Code color.
    #[serde(default)]
    pub code_color: Option<String>,
}

impl ThemeSection {
    fn apply(self, mut theme: LayoutTheme) -> LayoutTheme {
        if let Some(bullet) = self.bullet {
            theme.bullet = bullet;
        }
        if let Some(color) = self.text_color {
            theme.text_color = color;
        }
        if let Some(color) = self.heading_color {
            theme.heading_color = color;
        }
        if let Some(color) = self.code_color {
            theme.code_color = color;
        }
        theme
    }
}

/// Resolved configuration after applying precedence rules.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Markdown document to load.
    pub document: PathBuf,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Initial viewport size.
    pub viewport: ViewportDimensions,
    /// Zoom range and step.
    pub zoom_bounds: ZoomBounds,
    /// Palette and bullet glyph.
    pub theme: LayoutTheme,
    /// Natural sizes known to the static image resolver.
    pub images: HashMap<String, ImageSize>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            document: PathBuf::from(DEFAULT_DOCUMENT),
            log_file_path: default_log_path(),
            viewport: ViewportDimensions::new(DEFAULT_VIEWPORT_WIDTH, DEFAULT_VIEWPORT_HEIGHT),
            zoom_bounds: ZoomBounds::default(),
            theme: LayoutTheme::default(),
            images: HashMap::new(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/mdcanvas/mdcanvas.log` on Linux, or the platform
/// state directory elsewhere. Falls back to the current directory.
pub fn default_log_path() -> PathBuf {
    match dirs::state_dir() {
        Some(state_dir) => state_dir.join("mdcanvas").join("mdcanvas.log"),
        None => PathBuf::from("mdcanvas.log"),
    }
}

/// Resolve default config file path (`~/.config/mdcanvas/config.toml` on Linux).
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("mdcanvas").join("config.toml"))
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if the file doesn't exist.
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `MDCANVAS_CONFIG` environment variable
/// 3. Default path `~/.config/mdcanvas/config.toml`
///
/// # Errors
///
/// Returns error if `MDCANVAS_CONFIG` is set but empty, or if a config file
/// exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Some(env_path) = std::env::var_os(CONFIG_ENV) {
        if env_path.is_empty() {
            return Err(ConfigError::InvalidPath(format!("{CONFIG_ENV} is empty")));
        }
        return load_config_file(PathBuf::from(env_path));
    }

    match default_config_path() {
        Some(default_path) => load_config_file(default_path),
        None => Ok(None),
    }
}

/// Merge config file into defaults to create resolved config.
///
/// # Errors
///
/// Returns `InvalidValue` if the zoom keys describe an empty or non-positive
/// range.
pub fn merge_config(config_file: Option<ConfigFile>) -> Result<ResolvedConfig, ConfigError> {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return Ok(defaults);
    };

    let zoom_bounds = ZoomBounds::new(
        config.zoom_min.unwrap_or(defaults.zoom_bounds.min()),
        config.zoom_max.unwrap_or(defaults.zoom_bounds.max()),
        config.zoom_step.unwrap_or(defaults.zoom_bounds.step()),
    )
    .map_err(|e| ConfigError::InvalidValue {
        key: "zoom_min/zoom_max/zoom_step".to_string(),
        reason: e.to_string(),
    })?;

    let theme = match config.theme {
        Some(section) => section.apply(defaults.theme),
        None => defaults.theme,
    };

    Ok(ResolvedConfig {
        document: config.document.unwrap_or(defaults.document),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        viewport: ViewportDimensions::new(
            config.viewport_width.unwrap_or(defaults.viewport.width),
            config.viewport_height.unwrap_or(defaults.viewport.height),
        ),
        zoom_bounds,
        theme,
        images: config.images,
    })
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `MDCANVAS_DOCUMENT`: Override document path
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Some(document) = std::env::var_os(DOCUMENT_ENV) {
        if !document.is_empty() {
            config.document = PathBuf::from(document);
        }
    }

    config
}

/// Values explicitly set on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    /// Positional document path.
    pub document: Option<PathBuf>,
    /// `--width`.
    pub width: Option<u32>,
    /// `--height`.
    pub height: Option<u32>,
}

/// Apply CLI argument overrides to resolved config.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(mut config: ResolvedConfig, cli: CliOverrides) -> ResolvedConfig {
    if let Some(document) = cli.document {
        config.document = document;
    }
    if let Some(width) = cli.width {
        config.viewport.width = width;
    }
    if let Some(height) = cli.height {
        config.viewport.height = height;
    }

    config
}

/// Run the whole precedence chain.
///
/// # Errors
///
/// Propagates load and merge errors.
pub fn resolve(
    config_path: Option<PathBuf>,
    cli: CliOverrides,
) -> Result<ResolvedConfig, ConfigError> {
    let file = load_config_with_precedence(config_path)?;
    let merged = merge_config(file)?;
    Ok(apply_cli_overrides(apply_env_overrides(merged), cli))
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
