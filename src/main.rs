//! Desktop virtual piano entry point.
//!
//! Opens the board window, wires caps to sound slots, and runs the event
//! loop: poll input, dispatch, advance press transitions, render, present.

use std::time::Instant;

use ansi_term::Colour::Yellow;
use anyhow::Context;
use log::info;
use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};
use rodio::OutputStream;

use celesta::board::board::{Board, HEIGHT, WIDTH};
use celesta::events::Event;
use celesta::keymap::{self, KEY_LAYOUT};
use celesta::sound::sound;
use celesta::trigger::trigger::KeyTrigger;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    print_legend();

    // The stream must outlive every sink; dropping it silences the bank.
    let (_stream, handle) =
        OutputStream::try_default().context("no default audio output device")?;
    let bank = sound::load_bank(&handle, &KEY_LAYOUT).context("building the sound bank")?;
    let board = Board::new(&KEY_LAYOUT);
    let mut trigger = KeyTrigger::wire(board, bank).context("pairing caps with sound slots")?;

    let mut window = Window::new("Celesta", WIDTH, HEIGHT, WindowOptions::default())
        .context("creating the board window")?;
    window.set_target_fps(60);

    info!("board up: {} keys", KEY_LAYOUT.len());

    let mut last_frame = Instant::now();
    let mut mouse_was_down = false;

    while window.is_open() && !window.is_key_down(Key::Escape) {
        let now = Instant::now();
        let dt = now - last_frame;
        last_frame = now;

        // Key-down, with auto-repeat: a held key keeps re-triggering its
        // clip, the way held keys repeat on the host.
        for key in window.get_keys_pressed(KeyRepeat::Yes) {
            if let Some(key_code) = keymap::key_code(key) {
                trigger.dispatch(&Event::KeyDown { key_code });
            }
        }

        // Any release resets the whole board.
        for _key in window.get_keys_released() {
            trigger.dispatch(&Event::KeyUp);
        }

        // Click edge: play the cap under the pointer, if any.
        let mouse_down = window.get_mouse_down(MouseButton::Left);
        if mouse_down && !mouse_was_down {
            if let Some((x, y)) = window.get_mouse_pos(MouseMode::Discard) {
                if let Some(key) = trigger.board.key_at(x as usize, y as usize) {
                    trigger.dispatch(&Event::Click { key });
                }
            }
        }
        mouse_was_down = mouse_down;

        // Completed press transitions feed back in as events.
        for event in trigger.board.tick(dt) {
            trigger.dispatch(&event);
        }

        trigger.board.render();
        window
            .update_with_buffer(trigger.board.framebuffer(), WIDTH, HEIGHT)
            .context("presenting the framebuffer")?;
    }

    Ok(())
}

/// Print which physical key plays which note.
fn print_legend() {
    println!(
        "{}",
        Yellow.bold().paint("celesta: press to play, Esc quits")
    );
    for def in &KEY_LAYOUT {
        println!(
            "  {}  {}",
            Yellow.paint(def.label.to_string()),
            note_name(def.midi)
        );
    }
}

/// Note name for a MIDI number, piano style (60 = C4).
fn note_name(midi: u8) -> String {
    const NAMES: [&str; 12] = [
        "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
    ];
    let octave = midi as i32 / 12 - 1;
    format!("{}{}", NAMES[(midi % 12) as usize], octave)
}
