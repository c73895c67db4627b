//! Player input intent
//!
//! Host event handlers write here; the tick reads it. Nothing in this module
//! touches the paddles directly.

/// Discrete paddle keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value; anything but the arrows is ignored
    pub fn from_dom_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(Key::Up),
            "ArrowDown" => Some(Key::Down),
            _ => None,
        }
    }
}

/// Latest known player intent
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputIntent {
    /// Up key held
    pub up: bool,
    /// Down key held
    pub down: bool,
    /// Field-space y the paddle should center on, set by the latest pointer
    /// move and consumed by the next tick
    pub pointer_target: Option<f32>,
}

impl InputIntent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: Key) {
        self.set_key(key, true);
    }

    pub fn key_up(&mut self, key: Key) {
        self.set_key(key, false);
    }

    fn set_key(&mut self, key: Key, held: bool) {
        match key {
            Key::Up => self.up = held,
            Key::Down => self.down = held,
        }
    }

    /// Pointer moved to field-space `y`
    pub fn pointer_move(&mut self, y: f32) {
        self.pointer_target = Some(y);
    }

    /// Pointer left the play field; a move not yet applied is dropped
    pub fn pointer_leave(&mut self) {
        self.pointer_target = None;
    }

    /// Take the pending pointer target, if any
    pub fn take_pointer_target(&mut self) -> Option<f32> {
        self.pointer_target.take()
    }

    /// Vertical sign of the held key for hit spin; up wins when both are held
    pub fn kick_sign(&self) -> Option<f32> {
        if self.up {
            Some(-1.0)
        } else if self.down {
            Some(1.0)
        } else {
            None
        }
    }

    /// Release everything (the page lost focus, so key-ups may never arrive)
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Convert a client-space pointer y into field coordinates
///
/// The canvas may be displayed at a different CSS size than its drawing
/// buffer, so the offset inside the element is rescaled by
/// `field_height / rect_height`.
pub fn pointer_to_field_y(client_y: f32, rect_top: f32, rect_height: f32, field_height: f32) -> f32 {
    let offset = client_y - rect_top;
    if rect_height > 0.0 {
        offset * (field_height / rect_height)
    } else {
        offset
    }
}
