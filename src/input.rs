//! Platform-independent input events and key bindings.
//!
//! The window translates its native events into [`InputEvent`]s. A
//! [`Keymap`] then turns a key into either a selection change or a
//! [`PoseEdit`]: the transformation slot to change and by how much.

use std::collections::HashMap;

use crate::config::Steps;
use crate::transform::PoseField;

/// Keys the scene reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    W,
    A,
    S,
    D,
    U,
    J,
    Y,
    I,
    H,
    K,
    R,
    T,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    /// `repeat` is set for key-down events produced by auto-repeat.
    KeyDown { key: Key, repeat: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Previous,
    Next,
}

/// Add `step` to `field` of the selected voxel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoseEdit {
    pub field: PoseField,
    pub step: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    Select(Selection),
    Edit(PoseEdit),
}

/// Lookup table from [`Key`] to [`Action`].
#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: HashMap<Key, Action>,
}

impl Keymap {
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// The standard layout:
    ///
    /// | keys    | action                      |
    /// |---------|-----------------------------|
    /// | ← / →   | previous / next voxel       |
    /// | A / D   | translate x - / +           |
    /// | W / S   | translate y - / +           |
    /// | U / J   | rotate x - / +              |
    /// | Y / I   | rotate y - / +              |
    /// | H / K   | rotate z - / +              |
    /// | R / T   | uniform scale and length - / + |
    pub fn with_steps(steps: &Steps) -> Self {
        let mut keymap = Self::empty();
        keymap
            .bind(Key::Left, Action::Select(Selection::Previous))
            .bind(Key::Right, Action::Select(Selection::Next))
            .bind_edit(Key::A, PoseField::TranslationX, -steps.translation)
            .bind_edit(Key::D, PoseField::TranslationX, steps.translation)
            .bind_edit(Key::W, PoseField::TranslationY, -steps.translation)
            .bind_edit(Key::S, PoseField::TranslationY, steps.translation)
            .bind_edit(Key::U, PoseField::RotationX, -steps.rotation)
            .bind_edit(Key::J, PoseField::RotationX, steps.rotation)
            .bind_edit(Key::Y, PoseField::RotationY, -steps.rotation)
            .bind_edit(Key::I, PoseField::RotationY, steps.rotation)
            .bind_edit(Key::H, PoseField::RotationZ, -steps.rotation)
            .bind_edit(Key::K, PoseField::RotationZ, steps.rotation)
            .bind_edit(Key::R, PoseField::UniformScale, -steps.scale)
            .bind_edit(Key::T, PoseField::UniformScale, steps.scale);
        keymap
    }

    /// Binds `key`, replacing any earlier binding.
    pub fn bind(&mut self, key: Key, action: Action) -> &mut Self {
        self.bindings.insert(key, action);
        self
    }

    pub fn bind_edit(&mut self, key: Key, field: PoseField, step: f64) -> &mut Self {
        self.bind(key, Action::Edit(PoseEdit { field, step }))
    }

    pub fn action(&self, key: Key) -> Option<Action> {
        self.bindings.get(&key).copied()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl Default for Keymap {
    fn default() -> Self {
        Self::with_steps(&Steps::default())
    }
}
