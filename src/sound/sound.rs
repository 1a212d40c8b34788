//! Sound slots backed by rodio.
//!
//! Each slot owns one clip and one [`Sink`], mirroring an audio element that
//! is rewound and replayed in place: distinct slots overlap freely, and
//! re-triggering a slot restarts its clip from sample zero. Playback is fire
//! and forget; nothing here tracks when a clip finishes, and playback
//! failures after startup are not surfaced.

use log::debug;
use rodio::buffer::SamplesBuffer;
use rodio::{OutputStreamHandle, Sink};
use thiserror::Error;

use crate::keymap::KeyDef;
use crate::sound::synth;

/// Errors building the sound bank.
#[derive(Debug, Error)]
pub enum SoundError {
    /// The output device refused a playback sink.
    #[error("failed to open a playback sink: {0}")]
    Sink(#[from] rodio::PlayError),
}

/// Playback capabilities of one sound slot: seek back to the start, and
/// start playing. Nothing else; the caller does not own or observe the
/// playback lifecycle.
pub trait Sound {
    /// Seek back to the start of the clip.
    fn rewind(&mut self);
    /// Start (or restart) playback from the current position.
    fn play(&mut self);
}

/// A clip plus the sink that plays it.
pub struct ClipSound {
    sink: Sink,
    sample_rate: u32,
    samples: Vec<f32>,
}

impl ClipSound {
    /// Build a slot for one clip on the given output.
    pub fn new(
        handle: &OutputStreamHandle,
        sample_rate: u32,
        samples: Vec<f32>,
    ) -> Result<Self, SoundError> {
        Ok(Self {
            sink: Sink::try_new(handle)?,
            sample_rate,
            samples,
        })
    }
}

impl Sound for ClipSound {
    fn rewind(&mut self) {
        // Emptying the sink is the seek: whatever was queued is dropped, so
        // the next append starts at sample zero.
        self.sink.stop();
    }

    fn play(&mut self) {
        self.sink
            .append(SamplesBuffer::new(1, self.sample_rate, self.samples.clone()));
        self.sink.play();
    }
}

/// Build one slot per layout entry, tagged with the key code that pairs it
/// to its cap.
pub fn load_bank(
    handle: &OutputStreamHandle,
    layout: &[KeyDef],
) -> Result<Vec<(u32, ClipSound)>, SoundError> {
    let mut bank = Vec::with_capacity(layout.len());
    for def in layout {
        let samples = synth::tone(def.midi);
        debug!(
            "clip for code {} ({}): {:.2} Hz, {} samples",
            def.key_code,
            def.label,
            synth::frequency(def.midi),
            samples.len()
        );
        bank.push((
            def.key_code,
            ClipSound::new(handle, synth::SAMPLE_RATE, samples)?,
        ));
    }
    Ok(bank)
}
