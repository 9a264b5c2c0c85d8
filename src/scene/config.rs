//! Scene configuration loading and saving
//!
//! Uses RON (Rusty Object Notation) for human-readable config files.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::output::OutputFormat;
use crate::rasterizer::ColorPreset;

/// Error type for scene config loading
#[derive(Debug)]
pub enum SceneError {
    IoError(std::io::Error),
    ParseError(ron::error::SpannedError),
    SerializeError(ron::Error),
    InvalidConfig(String),
}

impl From<std::io::Error> for SceneError {
    fn from(e: std::io::Error) -> Self {
        SceneError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for SceneError {
    fn from(e: ron::error::SpannedError) -> Self {
        SceneError::ParseError(e)
    }
}

impl From<ron::Error> for SceneError {
    fn from(e: ron::Error) -> Self {
        SceneError::SerializeError(e)
    }
}

impl std::fmt::Display for SceneError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SceneError::IoError(e) => write!(f, "IO error: {}", e),
            SceneError::ParseError(e) => write!(f, "Parse error: {}", e),
            SceneError::SerializeError(e) => write!(f, "Serialize error: {}", e),
            SceneError::InvalidConfig(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for SceneError {}

/// How each cube face is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RenderStyle {
    #[default]
    Wireframe,
    Filled,
}

/// Settings for the spinning-cube demo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Output resolution in pixels
    pub width: usize,
    pub height: usize,
    /// Number of frames to render
    pub frames: u32,
    pub output_dir: PathBuf,
    pub file_prefix: String,
    pub format: OutputFormat,
    pub style: RenderStyle,
    pub background: ColorPreset,
    /// Cube edge length in world units
    pub cube_size: f32,
    /// Near / far clip distances
    pub near: f32,
    pub far: f32,
    /// Vertical field of view
    pub fov_degrees: f32,
    /// Camera distance oscillates between `orbit_offset` and `2 * orbit_radius + orbit_offset`
    pub orbit_radius: f32,
    pub orbit_offset: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 1024,
            frames: 360,
            output_dir: PathBuf::from("frames"),
            file_prefix: "frame_".to_string(),
            format: OutputFormat::Ppm,
            style: RenderStyle::Wireframe,
            background: ColorPreset::Black,
            cube_size: 500.0,
            near: 0.1,
            far: 1024.0,
            fov_degrees: 45.0,
            orbit_radius: 1000.0,
            orbit_offset: 500.0,
        }
    }
}

impl SceneConfig {
    /// Reject settings that cannot produce an image
    pub fn validate(&self) -> Result<(), SceneError> {
        if self.width == 0 || self.height == 0 {
            return Err(SceneError::InvalidConfig(format!(
                "resolution must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if !(self.near > 0.0 && self.far > self.near) {
            return Err(SceneError::InvalidConfig(format!(
                "need 0 < near < far, got near={} far={}",
                self.near, self.far
            )));
        }
        if !(self.fov_degrees > 0.0 && self.fov_degrees < 180.0) {
            return Err(SceneError::InvalidConfig(format!(
                "fov_degrees must be in (0, 180), got {}",
                self.fov_degrees
            )));
        }
        Ok(())
    }
}

/// Load a scene config from a RON file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SceneConfig, SceneError> {
    let contents = fs::read_to_string(path)?;
    load_config_from_str(&contents)
}

/// Save a scene config to a RON file
pub fn save_config<P: AsRef<Path>>(config: &SceneConfig, path: P) -> Result<(), SceneError> {
    let pretty = ron::ser::PrettyConfig::new()
        .depth_limit(2)
        .indentor("  ".to_string());

    let contents = ron::ser::to_string_pretty(config, pretty)?;
    fs::write(path, contents)?;
    Ok(())
}

/// Load a scene config from a RON string
pub fn load_config_from_str(s: &str) -> Result<SceneConfig, SceneError> {
    let config: SceneConfig = ron::from_str(s)?;
    config.validate()?;
    Ok(config)
}
