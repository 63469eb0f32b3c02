//! Pointer input for the dock.
//!
//! The magnification effect only ever consumes the pointer: its position
//! drives the bell falloff and the primary button drives item activation in
//! the caller. Keyboard and scroll input stay with the host application.

use crate::layout::Vec2;

/// Pointer state for the current frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerState {
    /// Current pointer X position.
    pub x: f32,
    /// Current pointer Y position.
    pub y: f32,
    /// Pointer X position last frame.
    pub prev_x: f32,
    /// Pointer Y position last frame.
    pub prev_y: f32,
    /// Primary button went down this frame.
    pressed: bool,
    /// Primary button went up this frame.
    released: bool,
    /// Primary button is currently held.
    down: bool,
}

impl PointerState {
    /// Creates a new empty pointer state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Begins a new frame, clearing per-frame edge state.
    pub fn begin_frame(&mut self) {
        self.prev_x = self.x;
        self.prev_y = self.y;
        self.pressed = false;
        self.released = false;
    }

    /// Updates the pointer position.
    pub fn set_pos(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Records a primary button press.
    pub fn press(&mut self) {
        if !self.down {
            self.pressed = true;
        }
        self.down = true;
    }

    /// Records a primary button release.
    pub fn release(&mut self) {
        if self.down {
            self.released = true;
        }
        self.down = false;
    }

    /// Returns the pointer position as a vector.
    #[must_use]
    pub const fn pos(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Returns true if the primary button was pressed this frame.
    #[must_use]
    pub const fn clicked(&self) -> bool {
        self.pressed
    }

    /// Returns true if the primary button was released this frame.
    #[must_use]
    pub const fn button_released(&self) -> bool {
        self.released
    }

    /// Returns true if the primary button is currently held.
    #[must_use]
    pub const fn is_down(&self) -> bool {
        self.down
    }

    /// Returns the pointer movement since last frame.
    #[must_use]
    pub fn delta(&self) -> Vec2 {
        Vec2::new(self.x - self.prev_x, self.y - self.prev_y)
    }
}
