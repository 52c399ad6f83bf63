//! Transformation descriptor for voxels.
//!
//! A [`Transformation`] holds the *absolute* pose of one voxel as three
//! [`Vec4`]s: scale, rotation (Euler angles in degrees) and translation.
//! Editing it never touches geometry; the pipeline rebuilds vertices from
//! scratch whenever the voxel is marked dirty.

use crate::math::{mat4::Mat4, vec4::Vec4};

/// One scalar slot of a [`Transformation`] that input can adjust.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoseField {
    TranslationX,
    TranslationY,
    TranslationZ,
    RotationX,
    RotationY,
    RotationZ,
    /// x, y and z scale together.
    UniformScale,
}

/// Scale, rotation (degrees) and translation of a voxel.
///
/// Mutating methods return `&mut Self` for chaining:
///
/// ```ignore
/// transformation
///     .translate_x(10.0)
///     .rotate_y(1.0)
///     .scale_uniform_by(-1.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transformation {
    scale: Vec4,
    rotation: Vec4,
    translation: Vec4,
}

impl Default for Transformation {
    fn default() -> Self {
        Self {
            scale: Vec4::direction(1.0, 1.0, 1.0),
            rotation: Vec4::ZERO,
            translation: Vec4::ZERO,
        }
    }
}

impl Transformation {
    pub fn new(scale: Vec4, rotation: Vec4, translation: Vec4) -> Self {
        Self {
            scale,
            rotation,
            translation,
        }
    }

    // ============ Accessors ============

    pub fn scale(&self) -> Vec4 {
        self.scale
    }

    /// Euler angles in degrees.
    pub fn rotation(&self) -> Vec4 {
        self.rotation
    }

    pub fn translation(&self) -> Vec4 {
        self.translation
    }

    pub fn set_scale(&mut self, scale: Vec4) -> &mut Self {
        self.scale = scale;
        self
    }

    pub fn set_rotation(&mut self, rotation: Vec4) -> &mut Self {
        self.rotation = rotation;
        self
    }

    pub fn set_translation(&mut self, translation: Vec4) -> &mut Self {
        self.translation = translation;
        self
    }

    // ============ Edits ============

    pub fn translate_x(&mut self, dx: f64) -> &mut Self {
        self.translation.x += dx;
        self
    }

    pub fn translate_y(&mut self, dy: f64) -> &mut Self {
        self.translation.y += dy;
        self
    }

    pub fn translate_z(&mut self, dz: f64) -> &mut Self {
        self.translation.z += dz;
        self
    }

    pub fn rotate_x(&mut self, degrees: f64) -> &mut Self {
        self.rotation.x += degrees;
        self
    }

    pub fn rotate_y(&mut self, degrees: f64) -> &mut Self {
        self.rotation.y += degrees;
        self
    }

    pub fn rotate_z(&mut self, degrees: f64) -> &mut Self {
        self.rotation.z += degrees;
        self
    }

    /// Adds `delta` to the x, y and z scale. No clamping: scale may reach
    /// zero or go negative.
    pub fn scale_uniform_by(&mut self, delta: f64) -> &mut Self {
        self.scale.x += delta;
        self.scale.y += delta;
        self.scale.z += delta;
        self
    }

    /// Adds `delta` to the slot named by `field`.
    pub fn adjust(&mut self, field: PoseField, delta: f64) -> &mut Self {
        match field {
            PoseField::TranslationX => self.translate_x(delta),
            PoseField::TranslationY => self.translate_y(delta),
            PoseField::TranslationZ => self.translate_z(delta),
            PoseField::RotationX => self.rotate_x(delta),
            PoseField::RotationY => self.rotate_y(delta),
            PoseField::RotationZ => self.rotate_z(delta),
            PoseField::UniformScale => self.scale_uniform_by(delta),
        }
    }

    // ============ Matrix Generation ============

    pub fn scale_matrix(&self) -> Mat4 {
        Mat4::scale_matrix(self.scale)
    }

    pub fn rotation_matrix(&self) -> Mat4 {
        Mat4::rotation_matrix(self.rotation)
    }

    pub fn translation_matrix(&self) -> Mat4 {
        Mat4::translation_matrix(self.translation)
    }

    /// Generate the combined model matrix.
    ///
    /// Order: Translation * Rotation * Scale
    /// (scale applied first, then rotation, then translation)
    pub fn to_matrix(&self) -> Mat4 {
        self.translation_matrix() * self.rotation_matrix() * self.scale_matrix()
    }
}
