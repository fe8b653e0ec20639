//! Input Intents
//!
//! What the simulation wants to know about the player's hands, with the
//! device stripped away. A platform adapter translates key and mouse events
//! into [`InputAction`]s and folds them into a [`TickInput`]; the simulation
//! reads one `TickInput` per tick.
//!
//! Held state (movement keys) persists until released. Edge intents (jump,
//! primary, toggle, select, rotate) and the look delta are consumed by the
//! tick that reads them; call [`TickInput::clear_edges`] afterwards.

use glam::Vec2;

/// Directional movement keys currently held.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MovementKeys {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

impl MovementKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if any movement key is pressed.
    pub fn any_pressed(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }

    /// Net (right, forward) axis values in `-1.0..=1.0`.
    ///
    /// Opposing keys cancel out.
    pub fn axes(&self) -> (f32, f32) {
        let right = if self.right { 1.0 } else { 0.0 } - if self.left { 1.0 } else { 0.0 };
        let forward =
            if self.forward { 1.0 } else { 0.0 } - if self.backward { 1.0 } else { 0.0 };
        (right, forward)
    }
}

/// Movement keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementKey {
    Forward,
    Backward,
    Left,
    Right,
}

/// Discrete input event from a device adapter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputAction {
    /// Movement key pressed/released
    Movement(MovementKey, bool),
    /// Jump requested
    Jump,
    /// Primary button: fire in play mode, place the ghost in build mode
    Primary,
    /// Toggle build mode
    ToggleBuildMode,
    /// Select build archetype by toolbar slot (0 = wall, 1 = floor, 2 = ramp, 3 = cone)
    SelectArchetype(usize),
    /// Rotate the build ghost by a quarter turn
    RotateGhost,
    /// Raw look delta in pixels (x right, y down)
    Look(f32, f32),
}

/// Everything the simulation consumes in one tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    pub movement: MovementKeys,
    pub jump: bool,
    pub primary: bool,
    pub toggle_build: bool,
    /// Requested archetype slot; the last request in a tick wins
    pub select: Option<usize>,
    pub rotate: bool,
    /// Accumulated look delta in pixels
    pub look_delta: Vec2,
}

impl TickInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one device event into this tick's intents.
    pub fn apply(&mut self, action: InputAction) {
        match action {
            InputAction::Movement(key, pressed) => match key {
                MovementKey::Forward => self.movement.forward = pressed,
                MovementKey::Backward => self.movement.backward = pressed,
                MovementKey::Left => self.movement.left = pressed,
                MovementKey::Right => self.movement.right = pressed,
            },
            InputAction::Jump => self.jump = true,
            InputAction::Primary => self.primary = true,
            InputAction::ToggleBuildMode => self.toggle_build = !self.toggle_build,
            InputAction::SelectArchetype(slot) => self.select = Some(slot),
            InputAction::RotateGhost => self.rotate = true,
            InputAction::Look(dx, dy) => self.look_delta += Vec2::new(dx, dy),
        }
    }

    /// Reset one-shot intents and the look delta, keeping held movement keys.
    pub fn clear_edges(&mut self) {
        *self = Self {
            movement: self.movement,
            ..Self::default()
        };
    }

    /// True if any one-shot intent is pending.
    pub fn has_edges(&self) -> bool {
        self.jump
            || self.primary
            || self.toggle_build
            || self.select.is_some()
            || self.rotate
            || self.look_delta != Vec2::ZERO
    }
}
