//! Keyboard input
//!
//! Scenes receive discrete key presses; gameplay additionally samples which
//! buttons are held once per frame through an `InputSource`.

use std::collections::HashMap;

use crate::sim::TickInput;

/// Logical gameplay buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Left,
    Right,
    Fire,
}

/// Keys the game reacts to, independent of the terminal backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Left,
    Right,
    Space,
    Enter,
    Escape,
    Other,
}

impl Key {
    /// Buttons this key drives while held
    pub fn button(&self) -> Option<Button> {
        match self {
            Key::Left | Key::Char('a') | Key::Char('A') => Some(Button::Left),
            Key::Right | Key::Char('d') | Key::Char('D') => Some(Button::Right),
            Key::Space => Some(Button::Fire),
            _ => None,
        }
    }
}

/// Anything that can report held buttons
pub trait InputSource {
    fn is_pressed(&self, button: Button) -> bool;
}

impl TickInput {
    /// Sample the held buttons for this frame
    pub fn sample<I: InputSource + ?Sized>(source: &I) -> Self {
        Self {
            left: source.is_pressed(Button::Left),
            right: source.is_pressed(Button::Right),
            fire: source.is_pressed(Button::Fire),
        }
    }
}

/// Frames a key stays held after its last press or repeat
///
/// Terminals without key-release events only report presses and OS key
/// repeats, so a key counts as held until it has been silent this long.
pub const HOLD_WINDOW: u64 = 4;

/// Tracks held keys from press, repeat and release events
#[derive(Debug, Clone, Default)]
pub struct KeyTracker {
    last_seen: HashMap<Key, u64>,
    frame: u64,
}

impl KeyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new frame; keys silent for longer than `HOLD_WINDOW` expire
    pub fn begin_frame(&mut self) {
        self.frame += 1;
        let frame = self.frame;
        self.last_seen
            .retain(|_, &mut last| frame.saturating_sub(last) <= HOLD_WINDOW);
    }

    /// Record a press or repeat
    pub fn press(&mut self, key: Key) {
        self.last_seen.insert(key, self.frame);
    }

    pub fn release(&mut self, key: Key) {
        self.last_seen.remove(&key);
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.last_seen
            .get(&key)
            .is_some_and(|&last| self.frame.saturating_sub(last) <= HOLD_WINDOW)
    }

    pub fn clear(&mut self) {
        self.last_seen.clear();
    }
}

impl InputSource for KeyTracker {
    fn is_pressed(&self, button: Button) -> bool {
        self.last_seen
            .keys()
            .any(|key| key.button() == Some(button) && self.is_held(*key))
    }
}

/// Fixed set of held buttons
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldButtons {
    pub left: bool,
    pub right: bool,
    pub fire: bool,
}

impl InputSource for HeldButtons {
    fn is_pressed(&self, button: Button) -> bool {
        match button {
            Button::Left => self.left,
            Button::Right => self.right,
            Button::Fire => self.fire,
        }
    }
}
