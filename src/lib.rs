//! Interactive wireframe cubes on a CPU-rendered 2D surface.
//!
//! Each [`Voxel`] is a unit cube posed by a [`Transformation`] (scale,
//! Euler rotation in degrees, translation). When a pose changes the voxel
//! is marked dirty, and on the next frame its world-space vertices are
//! rebuilt from the local template by homogeneous 4x4 matrix products and
//! drawn as 12 stepped lines. SDL2 is used only for the window, input
//! events and presenting the pixel buffer.
//!
//! # Quick Start
//!
//! ```ignore
//! use voxel::prelude::*;
//!
//! let config = Config::default();
//! let mut scene = Scene::from_config(&config)?;
//! let mut window = Window::new(&config)?;
//! voxel::driver::run(&mut scene, &mut window)?;
//! ```

pub mod colors;
pub mod config;
pub mod driver;
pub mod error;
pub mod input;
pub mod math;
pub mod pipeline;
pub mod render;
pub mod scene;
pub mod transform;
pub mod voxel;
pub mod window;

// Re-export commonly needed types at crate root for convenience
pub use config::Config;
pub use error::{Result, VoxelError};
pub use scene::Scene;
pub use transform::Transformation;
pub use voxel::Voxel;

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use voxel::prelude::*;
/// ```
pub mod prelude {
    // Scene & input
    pub use crate::config::{Config, Steps};
    pub use crate::driver::EventSource;
    pub use crate::input::{InputEvent, Key, Keymap};
    pub use crate::scene::Scene;

    // Objects
    pub use crate::transform::{PoseField, Transformation};
    pub use crate::voxel::{Status, Voxel};

    // Math
    pub use crate::math::mat4::Mat4;
    pub use crate::math::vec4::Vec4;

    // Rendering
    pub use crate::render::{Renderer, Surface};

    // Window
    pub use crate::window::Window;
}
