//! Scene state: the voxels, which one is selected, and whether to keep going.

use crate::config::Config;
use crate::error::{Result, VoxelError};
use crate::input::{Action, InputEvent, Keymap, Selection};
use crate::pipeline;
use crate::render::{self, Surface};
use crate::transform::PoseField;
use crate::voxel::Voxel;

pub struct Scene {
    running: bool,
    voxels: Vec<Voxel>,
    selected: usize,
    keymap: Keymap,
    background: u32,
    foreground: u32,
}

impl Scene {
    /// Builds a scene of `voxels` with voxel 0 selected.
    pub fn new(
        voxels: Vec<Voxel>,
        keymap: Keymap,
        background: u32,
        foreground: u32,
    ) -> Result<Self> {
        if voxels.is_empty() {
            return Err(VoxelError::EmptyScene);
        }
        Ok(Self {
            running: true,
            voxels,
            selected: 0,
            keymap,
            background,
            foreground,
        })
    }

    /// Creates `config.voxel_count` voxels, all in the initial pose.
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;
        let voxels = (0..config.voxel_count)
            .map(|_| Voxel::new(config.initial_length, config.initial_pose))
            .collect();
        Self::new(
            voxels,
            Keymap::with_steps(&config.steps),
            config.background,
            config.foreground,
        )
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn voxel_count(&self) -> usize {
        self.voxels.len()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn voxels(&self) -> &[Voxel] {
        &self.voxels
    }

    pub fn voxel(&self, index: usize) -> Result<&Voxel> {
        let count = self.voxels.len();
        self.voxels
            .get(index)
            .ok_or(VoxelError::VoxelIndex { index, count })
    }

    pub fn voxel_mut(&mut self, index: usize) -> Result<&mut Voxel> {
        let count = self.voxels.len();
        self.voxels
            .get_mut(index)
            .ok_or(VoxelError::VoxelIndex { index, count })
    }

    pub fn selected_voxel(&self) -> &Voxel {
        &self.voxels[self.selected]
    }

    /// Moves the selection, wrapping around the voxel count.
    pub fn select(&mut self, selection: Selection) {
        let count = self.voxels.len();
        self.selected = match selection {
            Selection::Previous => (self.selected + count - 1) % count,
            Selection::Next => (self.selected + 1) % count,
        };
        log::info!("voxel {} selected", self.selected);
    }

    /// Applies one input event.
    ///
    /// Selection keys ignore auto-repeat; pose edits apply on every
    /// key-down, repeats included, to the selected voxel only.
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::Quit => {
                log::debug!("quit requested");
                self.stop();
            }
            InputEvent::KeyDown { key, repeat } => match self.keymap.action(key) {
                Some(Action::Select(selection)) => {
                    if !repeat {
                        self.select(selection);
                    }
                }
                Some(Action::Edit(edit)) => {
                    let index = self.selected;
                    let voxel = &mut self.voxels[index];
                    voxel.edit(edit.field, edit.step);
                    if edit.field == PoseField::UniformScale {
                        log::info!("voxel {} length {}", index, voxel.length());
                    }
                }
                None => log::trace!("no binding for {:?}", key),
            },
        }
    }

    /// Re-derives every dirty voxel. Returns how many were re-derived.
    pub fn update(&mut self) -> usize {
        self.voxels
            .iter_mut()
            .map(pipeline::refresh)
            .filter(|&derived| derived)
            .count()
    }

    /// Draws one frame: clear, re-derive dirty voxels, draw every voxel,
    /// present.
    pub fn render<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Result<()> {
        surface.clear(self.background);
        self.update();
        for voxel in &self.voxels {
            render::draw_voxel(surface, voxel, self.foreground);
        }
        surface.present()
    }
}
