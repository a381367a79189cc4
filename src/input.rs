//! Polled keyboard state
//!
//! Host key events land here through [`Keyboard::press`] and
//! [`Keyboard::release`]; the simulation only ever asks
//! [`Keyboard::is_down`]. State is last-writer-wins per key with no
//! debouncing or event queueing: a held key simply reads as down on every
//! frame until its release arrives.

use std::collections::HashMap;

/// The three logical game keys. The bootstrap maps host key codes onto
/// these; the simulation never sees raw events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Fire,
}

/// Key-state map fed by host key-down/key-up events.
#[derive(Debug, Default)]
pub struct Keyboard {
    held: HashMap<Key, bool>,
}

impl Keyboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        self.held.insert(key, true);
    }

    pub fn release(&mut self, key: Key) {
        self.held.insert(key, false);
    }

    pub fn is_down(&self, key: Key) -> bool {
        self.held.get(&key).copied().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_start_up() {
        let keyboard = Keyboard::new();
        assert!(!keyboard.is_down(Key::Left));
        assert!(!keyboard.is_down(Key::Right));
        assert!(!keyboard.is_down(Key::Fire));
    }

    #[test]
    fn test_press_then_release() {
        let mut keyboard = Keyboard::new();
        keyboard.press(Key::Fire);
        assert!(keyboard.is_down(Key::Fire));
        keyboard.release(Key::Fire);
        assert!(!keyboard.is_down(Key::Fire));
    }

    #[test]
    fn test_last_writer_wins() {
        // Auto-repeat delivers extra key-downs for a held key; they are
        // harmless rewrites of the same state.
        let mut keyboard = Keyboard::new();
        keyboard.press(Key::Left);
        keyboard.press(Key::Left);
        assert!(keyboard.is_down(Key::Left));
        keyboard.release(Key::Left);
        assert!(!keyboard.is_down(Key::Left));
    }

    #[test]
    fn test_keys_are_independent() {
        let mut keyboard = Keyboard::new();
        keyboard.press(Key::Left);
        keyboard.press(Key::Fire);
        keyboard.release(Key::Left);
        assert!(!keyboard.is_down(Key::Left));
        assert!(keyboard.is_down(Key::Fire));
    }
}
