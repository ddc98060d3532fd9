//! JSON configuration file.
//!
//! Read from %APPDATA%/Compositing/config.json, or from the path in the
//! `COMPOSITING_CONFIG` environment variable. The file is optional and never
//! written back; every field falls back to its default.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::model::constants::*;
use crate::model::{Color, ImageSource};
use crate::render::{SceneStyle, SurfaceKind, SurfaceOptions};
use crate::{clamp, parse_hex_color};

/// Environment variable overriding the configuration path.
pub const CONFIG_ENV_VAR: &str = "COMPOSITING_CONFIG";

/// Top-level window settings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: i32,
    pub height: i32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: TOP_LEVEL_CLASS_NAME.to_string(),
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

/// Embedded child window settings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ChildConfig {
    pub enabled: bool,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub image_number: u32,
}

impl Default for ChildConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            x: DEFAULT_CHILD_OFFSET,
            y: DEFAULT_CHILD_OFFSET,
            width: DEFAULT_CHILD_SIZE,
            height: DEFAULT_CHILD_SIZE,
            image_number: DEFAULT_CHILD_IMAGE,
        }
    }
}

/// Circle drawn by the top-level window.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct CircleConfig {
    /// `#RRGGBB` or `#RRGGBBAA`; unset means the default sea green.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub margin: f32,
}

impl Default for CircleConfig {
    fn default() -> Self {
        Self {
            color: None,
            margin: DEFAULT_CIRCLE_MARGIN,
        }
    }
}

/// Status text drawn by the top-level window.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct TextConfig {
    pub font_family: String,
    pub font_size: f32,
    /// Empty means no status text.
    pub message: String,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            font_size: DEFAULT_FONT_SIZE,
            message: String::new(),
        }
    }
}

/// Built-in image used by the top-level window.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ImageConfig {
    pub number: u32,
    /// Load `number` at start-up instead of waiting for a dropped file.
    pub preload_builtin: bool,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            number: DEFAULT_TOP_LEVEL_IMAGE,
            preload_builtin: false,
        }
    }
}

/// Complete application configuration.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub child: ChildConfig,
    pub circle: CircleConfig,
    pub text: TextConfig,
    pub image: ImageConfig,
}

impl AppConfig {
    /// Clamps all values to valid ranges.
    pub fn validate(&mut self) {
        self.window.width = self
            .window
            .width
            .clamp(MIN_WINDOW_DIMENSION, MAX_WINDOW_DIMENSION);
        self.window.height = self
            .window
            .height
            .clamp(MIN_WINDOW_DIMENSION, MAX_WINDOW_DIMENSION);
        if self.window.title.trim().is_empty() {
            self.window.title = TOP_LEVEL_CLASS_NAME.to_string();
        }

        self.child.width = self.child.width.clamp(1, MAX_WINDOW_DIMENSION);
        self.child.height = self.child.height.clamp(1, MAX_WINDOW_DIMENSION);
        self.child.x = self.child.x.clamp(0, MAX_WINDOW_DIMENSION);
        self.child.y = self.child.y.clamp(0, MAX_WINDOW_DIMENSION);
        self.child.image_number = self.child.image_number.clamp(1, MAX_IMAGE_NUMBER);
        self.image.number = self.image.number.clamp(1, MAX_IMAGE_NUMBER);

        if let Some(color) = &self.circle.color {
            if parse_hex_color(color).is_none() {
                log::warn!("Ignoring invalid circle color {:?}", color);
                self.circle.color = None;
            }
        }
        self.circle.margin = clamp(self.circle.margin as f64, 0.0, MAX_WINDOW_DIMENSION as f64) as f32;

        self.text.font_size =
            clamp(self.text.font_size as f64, MIN_FONT_SIZE as f64, MAX_FONT_SIZE as f64) as f32;
        if self.text.font_family.trim().is_empty() {
            self.text.font_family = DEFAULT_FONT_FAMILY.to_string();
        }
    }

    /// Circle colour, falling back to the default for unparsable values.
    pub fn circle_color(&self) -> Color {
        self.circle
            .color
            .as_deref()
            .and_then(parse_hex_color)
            .unwrap_or(DEFAULT_CIRCLE_COLOR)
    }

    /// Options for the top-level surface.
    pub fn top_level_options(&self) -> SurfaceOptions {
        let image = self
            .image
            .preload_builtin
            .then_some(ImageSource::Resource(self.image.number));

        SurfaceOptions {
            kind: SurfaceKind::TopLevel,
            image,
            style: SceneStyle {
                circle_color: self.circle_color(),
                circle_margin: self.circle.margin,
                status_text: self.text.message.clone(),
                text_color: TEXT_COLOR,
            },
        }
    }

    /// Options for the child surface.
    pub fn child_options(&self) -> SurfaceOptions {
        SurfaceOptions {
            kind: SurfaceKind::Child,
            image: Some(ImageSource::Resource(self.child.image_number)),
            style: SceneStyle::default(),
        }
    }
}

/// Configuration file path: `$COMPOSITING_CONFIG`, else
/// %APPDATA%/Compositing/config.json
pub fn config_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
        return PathBuf::from(path);
    }
    let appdata = std::env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(appdata)
        .join(TOP_LEVEL_CLASS_NAME)
        .join("config.json")
}

/// Parse and validate a configuration document.
pub fn parse_config(contents: &str) -> Result<AppConfig, ConfigError> {
    let mut config: AppConfig = serde_json::from_str(contents)?;
    config.validate();
    Ok(config)
}

/// Load the configuration at `path`. A missing file yields the defaults.
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    match fs::read_to_string(path) {
        Ok(contents) => parse_config(&contents),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(AppConfig::default()),
        Err(e) => Err(e.into()),
    }
}

/// Load the configuration, returning defaults if it is missing or invalid.
pub fn load_config() -> AppConfig {
    let path = config_path();
    match load_config_from(&path) {
        Ok(config) => {
            log::debug!("Configuration loaded from {}", path.display());
            config
        }
        Err(e) => {
            log::warn!("{} ({}); using defaults", e, path.display());
            AppConfig::default()
        }
    }
}
