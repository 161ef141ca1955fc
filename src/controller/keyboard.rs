//! Keyboard paddle control
//!
//! Arrow keys or W/S move the paddle a fixed step per frame while held.

use super::PaddleController;
use crate::error::ControllerError;
use crate::settings::Config;
use crate::sim::GameState;

/// Keys the game cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Other,
}

impl Key {
    /// Map a key name ("ArrowUp", "w", ...) to a game key
    pub fn from_name(name: &str) -> Self {
        match name {
            "ArrowUp" | "Up" | "w" | "W" => Key::Up,
            "ArrowDown" | "Down" | "s" | "S" => Key::Down,
            _ => Key::Other,
        }
    }
}

/// A discrete key transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    Pressed(Key),
    Released(Key),
}

impl KeyEvent {
    /// Parse a text line such as `press ArrowUp` or `release s`
    pub fn from_line(line: &str) -> Option<Self> {
        let mut words = line.split_whitespace();
        let (action, name) = (words.next()?, words.next()?);
        if words.next().is_some() {
            return None;
        }
        let key = Key::from_name(name);
        match action {
            "press" => Some(KeyEvent::Pressed(key)),
            "release" => Some(KeyEvent::Released(key)),
            _ => None,
        }
    }
}

/// Paddle controller driven by held keys
#[derive(Debug, Clone)]
pub struct KeyboardController {
    up_held: bool,
    down_held: bool,
    /// Pixels per frame
    step: i32,
}

impl KeyboardController {
    pub fn new(config: &Config) -> Self {
        Self {
            up_held: false,
            down_held: false,
            step: config.paddle_speed,
        }
    }

    /// Update held state from a single key transition
    pub fn handle_event(&mut self, event: KeyEvent) {
        match event {
            KeyEvent::Pressed(Key::Up) => self.up_held = true,
            KeyEvent::Released(Key::Up) => self.up_held = false,
            KeyEvent::Pressed(Key::Down) => self.down_held = true,
            KeyEvent::Released(Key::Down) => self.down_held = false,
            KeyEvent::Pressed(Key::Other) | KeyEvent::Released(Key::Other) => {}
        }
    }

    /// Consume this frame's queued key transitions in order
    pub fn handle_events<I: IntoIterator<Item = KeyEvent>>(&mut self, events: I) {
        for event in events {
            self.handle_event(event);
        }
    }

    pub fn up_held(&self) -> bool {
        self.up_held
    }

    pub fn down_held(&self) -> bool {
        self.down_held
    }
}

impl PaddleController for KeyboardController {
    fn target(&mut self, state: &GameState) -> Result<Option<i32>, ControllerError> {
        let y = state.paddle_y();
        // Up is toward smaller Y; both or neither held means stay put
        Ok(match (self.up_held, self.down_held) {
            (true, false) => Some(y - self.step),
            (false, true) => Some(y + self.step),
            _ => None,
        })
    }
}
