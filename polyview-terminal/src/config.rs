//! Viewer configuration: TOML file with CLI overrides applied on top
use std::fs;
use std::path::{Path, PathBuf};

use crossterm::style::Color;
use log::debug;
use polyview_core::ShapeKind;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Colours the `c` key cycles through, in order
pub const PALETTE: [Color; 7] = [
    Color::Red,
    Color::Green,
    Color::Blue,
    Color::Yellow,
    Color::Magenta,
    Color::Cyan,
    Color::White,
];

/// Errors that can occur while loading or resolving configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("unknown color: {0}")]
    Color(String),

    #[error(transparent)]
    Shape(#[from] polyview_core::Error),

    #[error("invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Configuration as written in the TOML file. Missing keys take defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewerConfig {
    /// Shape shown at startup
    pub shape: String,
    /// Fill faces with `face_color`
    pub fill_faces: bool,
    /// Draw edges in `mark_color` instead of the face/default colour
    pub mark_edges: bool,
    pub face_color: String,
    pub mark_color: String,
    /// Rotation (degrees) per terminal cell dragged
    pub degrees_per_cell: i32,
    /// Upper bound on redraws per second
    pub fps: u32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            shape: ShapeKind::Cube.name().to_string(),
            fill_faces: false,
            mark_edges: false,
            face_color: "red".to_string(),
            mark_color: "black".to_string(),
            degrees_per_cell: 4,
            fps: 30,
        }
    }
}

impl ViewerConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Validate and convert into the typed settings the viewer runs with
    pub fn resolve(&self) -> Result<Settings, ConfigError> {
        if !(1..=360).contains(&self.degrees_per_cell) {
            return Err(ConfigError::Invalid {
                field: "degrees_per_cell",
                reason: format!("must be between 1 and 360, got {}", self.degrees_per_cell),
            });
        }
        if !(1..=240).contains(&self.fps) {
            return Err(ConfigError::Invalid {
                field: "fps",
                reason: format!("must be between 1 and 240, got {}", self.fps),
            });
        }

        Ok(Settings {
            shape: self.shape.parse()?,
            fill_faces: self.fill_faces,
            mark_edges: self.mark_edges,
            face_color: parse_color(&self.face_color)?,
            mark_color: parse_color(&self.mark_color)?,
            degrees_per_cell: self.degrees_per_cell,
            fps: self.fps,
        })
    }
}

/// Validated viewer settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub shape: ShapeKind,
    pub fill_faces: bool,
    pub mark_edges: bool,
    pub face_color: Color,
    pub mark_color: Color,
    pub degrees_per_cell: i32,
    pub fps: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            shape: ShapeKind::Cube,
            fill_faces: false,
            mark_edges: false,
            face_color: Color::Red,
            mark_color: Color::Black,
            degrees_per_cell: 4,
            fps: 30,
        }
    }
}

/// Parse a colour name such as `red` or `dark_grey`
pub fn parse_color(name: &str) -> Result<Color, ConfigError> {
    Color::try_from(name.trim()).map_err(|_| ConfigError::Color(name.to_string()))
}

/// Parse a `WxH` viewport size, e.g. `80x24`
pub fn parse_dimensions(text: &str) -> Result<(u16, u16), ConfigError> {
    let invalid = |reason: String| ConfigError::Invalid {
        field: "once",
        reason,
    };
    let (w, h) = text
        .split_once(['x', 'X', '×'])
        .ok_or_else(|| invalid(format!("expected WxH, got {text:?}")))?;
    let width: u16 = w
        .trim()
        .parse()
        .map_err(|e| invalid(format!("bad width {w:?}: {e}")))?;
    let height: u16 = h
        .trim()
        .parse()
        .map_err(|e| invalid(format!("bad height {h:?}: {e}")))?;
    if width == 0 || height == 0 {
        return Err(invalid(format!(
            "dimensions must be positive, got {width}x{height}"
        )));
    }
    Ok((width, height))
}
