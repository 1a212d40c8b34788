//! Physical-key translation and the board layout.
//!
//! Key codes follow the DOM convention (A=65 .. Z=90) so the trigger's
//! lookup table matches what a browser would deliver in
//! `KeyboardEvent.keyCode`. Letters outside the layout still translate to
//! their real codes; the trigger ignores them like any other unmapped code.

use minifb::Key;

/// One playable key: its code, the letter on the cap, and the pitch it plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyDef {
    /// DOM-convention key code; pairs the cap with its sound slot.
    pub key_code: u32,
    /// Letter drawn on the cap.
    pub label: char,
    /// MIDI note number (69 = A4 = 440 Hz).
    pub midi: u8,
}

/// Home-row layout: A S D F G H J K L play one diatonic octave plus a step,
/// C4 through D5.
pub const KEY_LAYOUT: [KeyDef; 9] = [
    KeyDef { key_code: 65, label: 'A', midi: 60 }, // C4
    KeyDef { key_code: 83, label: 'S', midi: 62 }, // D4
    KeyDef { key_code: 68, label: 'D', midi: 64 }, // E4
    KeyDef { key_code: 70, label: 'F', midi: 65 }, // F4
    KeyDef { key_code: 71, label: 'G', midi: 67 }, // G4
    KeyDef { key_code: 72, label: 'H', midi: 69 }, // A4
    KeyDef { key_code: 74, label: 'J', midi: 71 }, // B4
    KeyDef { key_code: 75, label: 'K', midi: 72 }, // C5
    KeyDef { key_code: 76, label: 'L', midi: 74 }, // D5
];

/// Translate a window key to its DOM key code. Letters only.
pub fn key_code(key: Key) -> Option<u32> {
    let code = match key {
        Key::A => 65,
        Key::B => 66,
        Key::C => 67,
        Key::D => 68,
        Key::E => 69,
        Key::F => 70,
        Key::G => 71,
        Key::H => 72,
        Key::I => 73,
        Key::J => 74,
        Key::K => 75,
        Key::L => 76,
        Key::M => 77,
        Key::N => 78,
        Key::O => 79,
        Key::P => 80,
        Key::Q => 81,
        Key::R => 82,
        Key::S => 83,
        Key::T => 84,
        Key::U => 85,
        Key::V => 86,
        Key::W => 87,
        Key::X => 88,
        Key::Y => 89,
        Key::Z => 90,
        _ => return None,
    };
    Some(code)
}
