//! The key trigger: pairing and dispatch.
//!
//! - **trigger** – builds the key-code to (cap, sound) pairing once at
//!   wiring time, then routes events: key-down and click rewind and play the
//!   paired clip and apply the playing state, key-up resets every cap,
//!   transition-end clears its target cap.

pub mod trigger;

#[cfg(test)]
mod tests;
