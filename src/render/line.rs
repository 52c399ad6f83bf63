//! Line rasterization by unit steps along the segment direction.
//!
//! For a segment U -> V the direction `V - U` is normalized (spatial length
//! only, see [`Vec4::magnitude`]) and the point `U + i * D` is plotted for
//! every integer `i` with `i < |V - U|`. Only x and y are used for plotting;
//! z and w are dropped. Coordinates are truncated toward zero.
//!
//! The start pixel is always plotted. The last plotted point lies less than
//! one unit before V, so V itself is only plotted when a step lands on it.

use super::Surface;
use crate::math::vec4::Vec4;
use crate::voxel::Voxel;

/// Plots the segment from `u` to `v` and returns how many points were
/// plotted. Segments with no spatial length plot nothing.
pub fn draw_line<S: Surface + ?Sized>(surface: &mut S, u: Vec4, v: Vec4, color: u32) -> usize {
    let line = v - u;
    let direction = match line.normalize() {
        Ok(direction) => direction,
        Err(_) => {
            log::trace!("skipping zero-length segment at ({}, {})", u.x, u.y);
            return 0;
        }
    };

    let steps = line.magnitude().ceil() as usize;
    for i in 0..steps {
        let t = i as f64;
        surface.plot(
            (u.x + t * direction.x) as i32,
            (u.y + t * direction.y) as i32,
            color,
        );
    }
    steps
}

/// Draws the 12 edges of a voxel's current world-space vertices.
pub fn draw_voxel<S: Surface + ?Sized>(surface: &mut S, voxel: &Voxel, color: u32) -> usize {
    voxel
        .vertices()
        .edges()
        .iter()
        .map(|&(u, v)| draw_line(surface, u, v, color))
        .sum()
}
