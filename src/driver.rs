//! The frame loop.
//!
//! One frame polls at most one event, applies it, then renders the scene.
//! [`run`] repeats that until the scene stops running. Both are generic
//! over a platform that is an event source and a surface at once, so the
//! loop runs the same way against the SDL window and against in-memory
//! fakes.

use crate::error::Result;
use crate::input::InputEvent;
use crate::render::Surface;
use crate::scene::Scene;

/// Supplies input events, one per poll.
pub trait EventSource {
    /// Returns the next pending event, or `None` without blocking if there
    /// is none.
    fn poll_event(&mut self) -> Option<InputEvent>;
}

/// Polls and applies one event, then renders one frame.
///
/// The frame is rendered even when the event stopped the scene.
pub fn run_frame<P>(scene: &mut Scene, platform: &mut P) -> Result<()>
where
    P: EventSource + Surface + ?Sized,
{
    if let Some(event) = platform.poll_event() {
        scene.handle_event(event);
    }
    scene.render(platform)
}

/// Runs frames until the scene stops. Returns the number of frames drawn.
pub fn run<P>(scene: &mut Scene, platform: &mut P) -> Result<u64>
where
    P: EventSource + Surface + ?Sized,
{
    let mut frames = 0;
    while scene.is_running() {
        run_frame(scene, platform)?;
        frames += 1;
    }
    log::debug!("stopped after {} frames", frames);
    Ok(frames)
}
