//! Keyboard mapping
//!
//! Arrow keys and WASD both steer the leader.

use std::collections::HashSet;

use crate::sim::{Direction, TickInput};

/// Keys the demo reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    W,
    A,
    S,
    D,
    Escape,
}

impl Key {
    /// Movement direction bound to this key, if any
    pub fn direction(self) -> Option<Direction> {
        match self {
            Key::ArrowUp | Key::W => Some(Direction::Up),
            Key::ArrowDown | Key::S => Some(Direction::Down),
            Key::ArrowLeft | Key::A => Some(Direction::Left),
            Key::ArrowRight | Key::D => Some(Direction::Right),
            Key::Escape => None,
        }
    }

    /// Parse a host key name ("ArrowUp", "KeyW", "w", ...)
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "arrowup" | "up" => Some(Key::ArrowUp),
            "arrowdown" | "down" => Some(Key::ArrowDown),
            "arrowleft" | "left" => Some(Key::ArrowLeft),
            "arrowright" | "right" => Some(Key::ArrowRight),
            "keyw" | "w" => Some(Key::W),
            "keya" | "a" => Some(Key::A),
            "keys" | "s" => Some(Key::S),
            "keyd" | "d" => Some(Key::D),
            "escape" | "esc" => Some(Key::Escape),
            _ => None,
        }
    }
}

/// Level-triggered key state, updated from host key events
#[derive(Debug, Clone, Default)]
pub struct KeyState {
    held: HashSet<Key>,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: Key) {
        self.held.insert(key);
    }

    pub fn key_up(&mut self, key: Key) {
        self.held.remove(&key);
    }

    /// Drop all held keys (e.g. on focus loss)
    pub fn release_all(&mut self) {
        self.held.clear();
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    pub fn quit_requested(&self) -> bool {
        self.is_held(Key::Escape)
    }

    /// Directions held right now
    pub fn tick_input(&self) -> TickInput {
        let mut input = TickInput::default();
        for direction in self.held.iter().filter_map(|k| k.direction()) {
            input.press(direction);
        }
        input
    }
}
