//! Fixed clip generator.
//!
//! Gives each sound slot something to play without shipping audio assets:
//! a handful of decaying harmonics at the key's equal-temperament pitch.
//! The generator is deliberately not a configurable surface; one clip per
//! key, synthesized once at startup.

use std::f32::consts::TAU;

/// Output sample rate for every generated clip.
pub const SAMPLE_RATE: u32 = 44_100;

/// Clip length in samples (one second).
pub const CLIP_LEN: usize = SAMPLE_RATE as usize;

/// Relative strength of the fundamental and the first few overtones.
const HARMONICS: [f32; 4] = [1.0, 0.5, 0.25, 0.12];

/// Exponential amplitude decay rate, per second.
const DECAY: f32 = 5.0;

/// Attack ramp length in samples, so a clip does not start with a click.
const ATTACK: usize = 128;

/// Equal-temperament frequency of a MIDI note number (69 = A4 = 440 Hz).
pub fn frequency(midi: u8) -> f32 {
    440.0 * ((midi as f32 - 69.0) / 12.0).exp2()
}

/// Synthesize the clip for one key: harmonics at [`frequency`]`(midi)`
/// under an exponential decay, with a short linear attack. Mono,
/// [`SAMPLE_RATE`] Hz, samples normalized into [-1, 1].
pub fn tone(midi: u8) -> Vec<f32> {
    let base = frequency(midi);
    let gain: f32 = HARMONICS.iter().sum();
    (0..CLIP_LEN)
        .map(|n| {
            let t = n as f32 / SAMPLE_RATE as f32;
            let mut s = 0.0;
            for (k, strength) in HARMONICS.iter().enumerate() {
                s += strength * (TAU * base * (k + 1) as f32 * t).sin();
            }
            let attack = if n < ATTACK {
                n as f32 / ATTACK as f32
            } else {
                1.0
            };
            s / gain * attack * (-DECAY * t).exp()
        })
        .collect()
}
