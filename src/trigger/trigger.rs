//! Event dispatch over a wired board and sound bank.

use std::collections::{HashMap, HashSet};

use thiserror::Error;

use crate::board::board::Board;
use crate::events::Event;
use crate::sound::sound::Sound;

/// Errors detected while pairing caps with sound slots.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WireError {
    /// Two caps carry the same key code; the pairing would be ambiguous.
    #[error("key code {0} appears on more than one cap")]
    DuplicateCap(u32),
    /// Two sound slots carry the same key code.
    #[error("key code {0} appears on more than one sound slot")]
    DuplicateSound(u32),
}

/// Dispatches input events to the paired cap and sound slot.
///
/// Generic over the [`Sound`] seam so tests can substitute a recording fake
/// for the rodio-backed slot.
pub struct KeyTrigger<S: Sound> {
    pub board: Board,
    pub sounds: Vec<S>,
    /// key code to (cap index, sound index); built once, never rescanned.
    pairs: HashMap<u32, (usize, usize)>,
}

impl<S: Sound> KeyTrigger<S> {
    /// Pair every cap with the sound slot sharing its key code.
    ///
    /// A duplicate code on either side is an error: the pairing must be 1:1
    /// for every code the trigger reacts to. A code present on only one side
    /// is left unpaired; events carrying it fall through to the
    /// ignore-unmapped path, same as a code nothing carries at all.
    pub fn wire(board: Board, sounds: Vec<(u32, S)>) -> Result<Self, WireError> {
        let mut caps_by_code = HashMap::new();
        for (i, cap) in board.caps.iter().enumerate() {
            if caps_by_code.insert(cap.key_code, i).is_some() {
                return Err(WireError::DuplicateCap(cap.key_code));
            }
        }

        let mut pairs = HashMap::new();
        let mut seen = HashSet::new();
        let mut slots = Vec::with_capacity(sounds.len());
        for (i, (key_code, sound)) in sounds.into_iter().enumerate() {
            if !seen.insert(key_code) {
                return Err(WireError::DuplicateSound(key_code));
            }
            if let Some(&cap) = caps_by_code.get(&key_code) {
                pairs.insert(key_code, (cap, i));
            }
            slots.push(sound);
        }

        Ok(Self {
            board,
            sounds: slots,
            pairs,
        })
    }

    /// Route one event to its handler.
    pub fn dispatch(&mut self, event: &Event) {
        match *event {
            Event::KeyDown { key_code } => self.play_sound(key_code),
            Event::KeyUp => self.board.release_all(),
            Event::Click { key } => self.click(key),
            Event::TransitionEnd { key, .. } => self.remove_transition(key),
        }
    }

    /// Key-down entry point: rewind and play the sound paired with
    /// `key_code` and apply the playing state to its cap. A code with no
    /// pair is ignored; not logged, not surfaced.
    pub fn play_sound(&mut self, key_code: u32) {
        let Some(&(cap, sound)) = self.pairs.get(&key_code) else {
            return;
        };
        self.sounds[sound].rewind();
        self.sounds[sound].play();
        self.board.press(cap);
    }

    /// Click entry point: a click plays whatever the cap itself is keyed to,
    /// exactly as if that code had come in on a key-down.
    pub fn click(&mut self, key: usize) {
        let key_code = self.board.caps[key].key_code;
        self.play_sound(key_code);
    }

    /// Transition-end entry point: clear the playing state of the target
    /// cap. Unconditional; the finished property name is not inspected.
    pub fn remove_transition(&mut self, key: usize) {
        self.board.release(key);
    }
}
