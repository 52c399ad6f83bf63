//! Local-to-world derivation of voxel vertices.
//!
//! World-space vertices are always rebuilt from the local template:
//!
//! 1. reset both faces to [`Vertices::local`]
//! 2. left-multiply by the scale matrix
//! 3. left-multiply by the rotation matrix (`Y * (X * Z)`)
//! 4. left-multiply by the translation matrix
//! 5. mark the voxel clean
//!
//! Translation must come last so it is neither scaled nor rotated. Because
//! every derivation starts from the template, deriving twice from the same
//! transformation yields the same vertices.

use crate::math::mat4::Mat4;
use crate::voxel::{Vertices, Voxel};

/// Overwrites the voxel's vertices with the local-space unit cube.
pub fn reset_vertices(voxel: &mut Voxel) {
    *voxel.vertices_mut() = Vertices::local();
}

/// Left-multiplies both faces by `matrix`.
pub fn apply_matrix(voxel: &mut Voxel, matrix: Mat4) {
    let vertices = voxel.vertices_mut();
    vertices.front = matrix * vertices.front;
    vertices.back = matrix * vertices.back;
}

pub fn scale_voxel(voxel: &mut Voxel) {
    let scale = voxel.transformation().scale_matrix();
    apply_matrix(voxel, scale);
}

pub fn rotate_voxel(voxel: &mut Voxel) {
    let rotation = voxel.transformation().rotation_matrix();
    apply_matrix(voxel, rotation);
}

pub fn translate_voxel(voxel: &mut Voxel) {
    let translation = voxel.transformation().translation_matrix();
    apply_matrix(voxel, translation);
}

/// Rebuilds world-space vertices from the transformation and clears the
/// dirty flag, whatever the current status.
pub fn transform_voxel(voxel: &mut Voxel) {
    reset_vertices(voxel);
    scale_voxel(voxel);
    rotate_voxel(voxel);
    translate_voxel(voxel);
    voxel.mark_clean();
}

/// Re-derives the voxel only if it is dirty. Returns whether it did.
pub fn refresh(voxel: &mut Voxel) -> bool {
    if !voxel.is_dirty() {
        return false;
    }
    transform_voxel(voxel);
    log::debug!(
        "re-derived voxel at translation ({}, {}, {})",
        voxel.transformation().translation().x,
        voxel.transformation().translation().y,
        voxel.transformation().translation().z
    );
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::vec4::Vec4;
    use crate::transform::{PoseField, Transformation};
    use crate::voxel::Status;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn voxel_with(scale: f64, rotation: Vec4, translation: Vec4) -> Voxel {
        Voxel::new(
            scale as i32,
            Transformation::new(Vec4::direction(scale, scale, scale), rotation, translation),
        )
    }

    fn initial_voxel() -> Voxel {
        voxel_with(50.0, Vec4::ZERO, Vec4::direction(50.0, 50.0, 50.0))
    }

    #[test]
    fn initial_pose_spans_zero_to_hundred() {
        let mut voxel = initial_voxel();
        transform_voxel(&mut voxel);

        let front = voxel.vertices().front;
        assert_relative_eq!(front.column(0), Vec4::point(0.0, 0.0, 0.0));
        assert_relative_eq!(front.column(2), Vec4::point(100.0, 100.0, 0.0));
        let back = voxel.vertices().back;
        assert_relative_eq!(back.column(3), Vec4::point(0.0, 100.0, 100.0));
        assert_eq!(voxel.status(), Status::Clean);
    }

    #[test]
    fn derivation_is_idempotent() {
        let mut voxel = voxel_with(
            30.0,
            Vec4::direction(15.0, 40.0, -70.0),
            Vec4::direction(120.0, 80.0, 5.0),
        );
        transform_voxel(&mut voxel);
        let first = *voxel.vertices();

        voxel.mark_dirty();
        assert!(refresh(&mut voxel));
        assert_eq!(*voxel.vertices(), first);
    }

    #[test]
    fn derivation_ignores_previous_world_vertices() {
        let mut voxel = initial_voxel();
        transform_voxel(&mut voxel);
        let expected = *voxel.vertices();

        // Scribble over the cache; the next derivation starts from the template.
        apply_matrix(&mut voxel, Mat4::scale_matrix(Vec4::direction(7.0, 7.0, 7.0)));
        transform_voxel(&mut voxel);
        assert_eq!(*voxel.vertices(), expected);
    }

    #[test]
    fn refresh_skips_clean_voxels() {
        let mut voxel = initial_voxel();
        assert!(refresh(&mut voxel));
        let derived = *voxel.vertices();

        apply_matrix(&mut voxel, Mat4::identity() * 2.0);
        assert!(!refresh(&mut voxel));
        assert_ne!(*voxel.vertices(), derived);
    }

    #[test]
    fn scale_rotate_translate_order_is_load_bearing() {
        let mut canonical = voxel_with(
            20.0,
            Vec4::direction(30.0, 45.0, 60.0),
            Vec4::direction(100.0, 200.0, 0.0),
        );
        let mut swapped = canonical.clone();

        transform_voxel(&mut canonical);

        reset_vertices(&mut swapped);
        translate_voxel(&mut swapped);
        rotate_voxel(&mut swapped);
        scale_voxel(&mut swapped);

        let a = canonical.vertices().front.column(0);
        let b = swapped.vertices().front.column(0);
        assert!((a - b).magnitude() > 1.0);
    }

    #[test]
    fn pipeline_matches_composed_model_matrix() {
        let mut voxel = voxel_with(
            12.0,
            Vec4::direction(10.0, 20.0, 30.0),
            Vec4::direction(300.0, 150.0, -40.0),
        );
        transform_voxel(&mut voxel);

        let model = voxel.transformation().to_matrix();
        let expected = model * Vertices::local().front;
        assert_abs_diff_eq!(voxel.vertices().front, expected, epsilon = 1e-9);
    }

    #[test]
    fn y_rotation_moves_x_axis_vertex_onto_z() {
        let mut voxel = voxel_with(1.0, Vec4::direction(0.0, 90.0, 0.0), Vec4::ZERO);
        transform_voxel(&mut voxel);

        // Local (1,-1,-1) under Y(90): x' = c*x - s*z = 1, z' = s*x + c*z = 1.
        let v = voxel.vertices().front.column(1);
        assert_abs_diff_eq!(v, Vec4::point(1.0, -1.0, 1.0), epsilon = 1e-12);
    }

    #[test]
    fn zero_scale_collapses_to_translation() {
        let mut voxel = initial_voxel();
        for _ in 0..50 {
            voxel.edit(PoseField::UniformScale, -1.0);
        }
        transform_voxel(&mut voxel);
        for col in voxel.vertices().front.columns() {
            assert_relative_eq!(*col, Vec4::point(50.0, 50.0, 50.0));
        }
    }
}
