//! Built-in settings for the window and the initial scene.
//!
//! There are no command-line flags or config files; [`Config::default`] is
//! what the binary runs with.

use crate::colors;
use crate::error::{Result, VoxelError};
use crate::math::vec4::Vec4;
use crate::transform::Transformation;

pub const WINDOW_TITLE: &str = "Voxel";
pub const WINDOW_WIDTH: u32 = 640;
pub const WINDOW_HEIGHT: u32 = 480;
pub const VOXEL_COUNT: usize = 3;
pub const INITIAL_LENGTH: i32 = 50;

/// Amount added per key press.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Steps {
    pub translation: f64,
    /// Degrees.
    pub rotation: f64,
    pub scale: f64,
}

impl Default for Steps {
    fn default() -> Self {
        Self {
            translation: 10.0,
            rotation: 1.0,
            scale: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub voxel_count: usize,
    pub initial_length: i32,
    pub initial_pose: Transformation,
    pub steps: Steps,
    pub background: u32,
    pub foreground: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: WINDOW_TITLE.to_string(),
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            voxel_count: VOXEL_COUNT,
            initial_length: INITIAL_LENGTH,
            // Scaled up to be visible, placed near the top-left corner.
            initial_pose: Transformation::new(
                Vec4::direction(50.0, 50.0, 50.0),
                Vec4::ZERO,
                Vec4::direction(50.0, 50.0, 50.0),
            ),
            steps: Steps::default(),
            background: colors::BACKGROUND,
            foreground: colors::FOREGROUND,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.voxel_count == 0 {
            return Err(VoxelError::EmptyScene);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!((config.width, config.height), (640, 480));
        assert_eq!(config.voxel_count, 3);
    }

    #[test]
    fn empty_scene_is_rejected() {
        let config = Config {
            voxel_count: 0,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(VoxelError::EmptyScene)));
    }
}
