//! SDL2 window: the event source and presentation surface of the binary.
//!
//! Pixels are plotted into a CPU [`Renderer`] and uploaded to a streaming
//! texture on present.

use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::PixelFormatEnum;
use sdl2::rect::Rect;

use crate::config::Config;
use crate::driver::EventSource;
use crate::error::{Result, VoxelError};
use crate::input::{InputEvent, Key};
use crate::render::{Renderer, Surface};

fn platform<E: std::fmt::Display>(e: E) -> VoxelError {
    VoxelError::Platform(e.to_string())
}

/// Maps an SDL keycode onto the keys the scene understands.
fn map_keycode(keycode: Keycode) -> Option<Key> {
    let key = match keycode {
        Keycode::Left => Key::Left,
        Keycode::Right => Key::Right,
        Keycode::W => Key::W,
        Keycode::A => Key::A,
        Keycode::S => Key::S,
        Keycode::D => Key::D,
        Keycode::U => Key::U,
        Keycode::J => Key::J,
        Keycode::Y => Key::Y,
        Keycode::I => Key::I,
        Keycode::H => Key::H,
        Keycode::K => Key::K,
        Keycode::R => Key::R,
        Keycode::T => Key::T,
        _ => return None,
    };
    Some(key)
}

pub struct Window {
    renderer: Renderer,
    canvas: sdl2::render::Canvas<sdl2::video::Window>,
    // Declared before `texture_creator` so it is dropped first.
    texture: sdl2::render::Texture<'static>,
    #[allow(dead_code)]
    texture_creator: Box<sdl2::render::TextureCreator<sdl2::video::WindowContext>>,
    event_pump: sdl2::EventPump,
    width: u32,
    height: u32,
}

impl Window {
    pub fn new(config: &Config) -> Result<Self> {
        let (width, height) = (config.width, config.height);
        let sdl_context = sdl2::init()?;
        let video_subsystem = sdl_context.video()?;

        let window = video_subsystem
            .window(&config.title, width, height)
            .position_centered()
            .build()
            .map_err(platform)?;

        let canvas = window
            .into_canvas()
            .accelerated()
            .present_vsync()
            .build()
            .map_err(platform)?;
        let texture_creator = Box::new(canvas.texture_creator());
        let event_pump = sdl_context.event_pump()?;

        // SAFETY: texture_creator is heap-allocated and lives as long as Window.
        // We ensure texture is dropped before texture_creator by struct field order.
        let texture_creator_ref: &'static sdl2::render::TextureCreator<sdl2::video::WindowContext> =
            unsafe { &*(texture_creator.as_ref() as *const _) };
        let texture = texture_creator_ref
            .create_texture_streaming(PixelFormatEnum::ARGB8888, width, height)
            .map_err(platform)?;

        log::info!("opened {}x{} window \"{}\"", width, height, config.title);

        Ok(Self {
            renderer: Renderer::new(width, height),
            canvas,
            texture,
            texture_creator,
            event_pump,
            width,
            height,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

impl EventSource for Window {
    /// Takes at most one SDL event. Events with no meaning to the scene
    /// count as an empty poll.
    fn poll_event(&mut self) -> Option<InputEvent> {
        match self.event_pump.poll_event()? {
            Event::Quit { .. }
            | Event::KeyDown {
                keycode: Some(Keycode::Escape),
                ..
            } => Some(InputEvent::Quit),
            Event::KeyDown {
                keycode: Some(keycode),
                repeat,
                ..
            } => map_keycode(keycode).map(|key| InputEvent::KeyDown { key, repeat }),
            _ => None,
        }
    }
}

impl Surface for Window {
    fn clear(&mut self, color: u32) {
        self.renderer.clear(color);
    }

    fn plot(&mut self, x: i32, y: i32, color: u32) {
        self.renderer.set_pixel(x, y, color);
    }

    fn present(&mut self) -> Result<()> {
        self.texture
            .update(None, self.renderer.as_bytes(), (self.width * 4) as usize)
            .map_err(platform)?;

        self.canvas.clear();
        self.canvas
            .copy(&self.texture, None, Some(Rect::new(0, 0, self.width, self.height)))?;
        self.canvas.present();
        Ok(())
    }
}
