//! Wireframe cube ("voxel") objects.
//!
//! A [`Voxel`] keeps two 4-vertex faces as [`Mat4`]s whose columns are
//! homogeneous vertices, the [`Transformation`] that places it in the world
//! and a [`Status`] tag telling whether the cached world-space vertices
//! still match that transformation.

use std::fmt;

use crate::math::{mat4::Mat4, vec4::Vec4};
use crate::transform::{PoseField, Transformation};

/// Local-space front face (z = -1), vertices in winding order.
pub const FRONT_TEMPLATE: Mat4 = Mat4::from_columns([
    Vec4::point(-1.0, -1.0, -1.0),
    Vec4::point(1.0, -1.0, -1.0),
    Vec4::point(1.0, 1.0, -1.0),
    Vec4::point(-1.0, 1.0, -1.0),
]);

/// Local-space back face (z = +1), vertex i sits behind front vertex i.
pub const BACK_TEMPLATE: Mat4 = Mat4::from_columns([
    Vec4::point(-1.0, -1.0, 1.0),
    Vec4::point(1.0, -1.0, 1.0),
    Vec4::point(1.0, 1.0, 1.0),
    Vec4::point(-1.0, 1.0, 1.0),
]);

pub const N_EDGES: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    /// World-space vertices match the transformation.
    Clean,
    /// Transformation changed since the vertices were last derived.
    #[default]
    Dirty,
}

/// Front and back faces, one vertex per column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertices {
    pub front: Mat4,
    pub back: Mat4,
}

impl Vertices {
    /// The canonical unit cube in local space.
    pub const fn local() -> Self {
        Self {
            front: FRONT_TEMPLATE,
            back: BACK_TEMPLATE,
        }
    }

    /// The 12 cube edges: front loop, back loop, then front[i] to back[i].
    pub fn edges(&self) -> [(Vec4, Vec4); N_EDGES] {
        let f = self.front.columns();
        let b = self.back.columns();
        [
            (f[0], f[1]),
            (f[1], f[2]),
            (f[2], f[3]),
            (f[3], f[0]),
            (b[0], b[1]),
            (b[1], b[2]),
            (b[2], b[3]),
            (b[3], b[0]),
            (f[0], b[0]),
            (f[1], b[1]),
            (f[2], b[2]),
            (f[3], b[3]),
        ]
    }
}

impl Default for Vertices {
    fn default() -> Self {
        Self {
            front: Mat4::ZERO,
            back: Mat4::ZERO,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Voxel {
    length: i32,
    vertices: Vertices,
    transformation: Transformation,
    status: Status,
}

impl Voxel {
    /// Creates a voxel whose vertices have not been derived yet.
    pub fn new(length: i32, transformation: Transformation) -> Self {
        Self {
            length,
            vertices: Vertices::default(),
            transformation,
            status: Status::Dirty,
        }
    }

    /// Informational edge length, follows uniform scale edits.
    pub fn length(&self) -> i32 {
        self.length
    }

    pub fn vertices(&self) -> &Vertices {
        &self.vertices
    }

    pub(crate) fn vertices_mut(&mut self) -> &mut Vertices {
        &mut self.vertices
    }

    pub fn transformation(&self) -> &Transformation {
        &self.transformation
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_dirty(&self) -> bool {
        self.status == Status::Dirty
    }

    pub fn mark_dirty(&mut self) {
        self.status = Status::Dirty;
    }

    pub(crate) fn mark_clean(&mut self) {
        self.status = Status::Clean;
    }

    /// Adds `delta` to one transformation slot and marks the voxel dirty.
    ///
    /// Uniform scale edits are mirrored into [`Voxel::length`].
    pub fn edit(&mut self, field: PoseField, delta: f64) {
        self.transformation.adjust(field, delta);
        if field == PoseField::UniformScale {
            self.length += delta as i32;
        }
        self.mark_dirty();
    }
}

impl fmt::Display for Voxel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "LENGTH")?;
        writeln!(f, "{}", self.length)?;
        writeln!(f, "FRONT VERTICES")?;
        writeln!(f, "{}", self.vertices.front)?;
        writeln!(f, "BACK VERTICES")?;
        writeln!(f, "{}", self.vertices.back)?;
        writeln!(f, "SCALE")?;
        writeln!(f, "{}", self.transformation.scale())?;
        writeln!(f, "ROTATION")?;
        writeln!(f, "{}", self.transformation.rotation())?;
        writeln!(f, "TRANSLATION")?;
        write!(f, "{}", self.transformation.translation())
    }
}
