//! Presentation surface and wireframe drawing.
//!
//! The core never talks to the window directly. It issues one
//! [`Surface::clear`], any number of [`Surface::plot`] calls and one
//! [`Surface::present`] per frame against whatever implements [`Surface`].

mod line;
mod renderer;

pub use line::{draw_line, draw_voxel};
pub use renderer::Renderer;

use crate::error::Result;

/// Something pixels can be plotted onto and shown.
pub trait Surface {
    /// Fill the whole surface with `color`.
    fn clear(&mut self, color: u32);

    /// Plot one pixel. Coordinates outside the surface are ignored.
    fn plot(&mut self, x: i32, y: i32, color: u32);

    /// Show everything plotted since the last clear.
    fn present(&mut self) -> Result<()>;
}
