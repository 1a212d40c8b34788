//! Celesta: a desktop virtual piano written in Rust.
//!
//! Nine home-row keys (A S D F G H J K L) are paired with nine on-screen key
//! caps and nine sound slots by a shared numeric key code, following the DOM
//! [`keyCode`](https://developer.mozilla.org/en-US/docs/Web/API/KeyboardEvent/keyCode)
//! convention (A=65 .. Z=90). Pressing a key, or clicking its cap, rewinds
//! and plays the paired clip and applies a transient playing state to the
//! cap. Releasing any key clears every cap; a press transition that runs to
//! completion clears its own cap.
//!
//! ## Modules
//!
//! - **board** – key caps: playing state, press transition clock, hit
//!   testing, framebuffer rendering
//! - **events** – the event vocabulary the trigger dispatches on
//! - **keymap** – physical-key translation and the board layout
//! - **sound** – sound slots: the {rewind, play} seam, rodio-backed clips,
//!   tone synthesis
//! - **trigger** – key-code to (cap, sound) pairing and event dispatch

pub mod board;
pub mod events;
pub mod keymap;
pub mod sound;
pub mod trigger;
