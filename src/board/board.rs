//! Key cap board: playing state, press transitions, and rendering.
//!
//! One row of ivory caps on a dark backdrop, drawn into a 0xRRGGBB
//! framebuffer the window presents each frame. A cap in the playing state
//! grows toward 110 % over the press transition and carries a gold border.
//! When a transition runs to completion the board reports it as an event;
//! what to do about it is the dispatcher's decision, not the board's.

use std::time::Duration;

use crate::events::{self, Event};
use crate::keymap::KeyDef;

/// Framebuffer width in pixels.
pub const WIDTH: usize = 940;
/// Framebuffer height in pixels.
pub const HEIGHT: usize = 320;

/// How long the press transition runs before it completes.
pub const PRESS_TRANSITION: Duration = Duration::from_millis(70);

/// Extra size a playing cap grows to across the transition (scale 1.1).
const PRESS_SCALE: f32 = 0.1;

/// Idle cap geometry. Nine caps with gaps fit the framebuffer with enough
/// margin that a fully grown cap never touches its neighbour or the edge.
const CAP_WIDTH: usize = 92;
const CAP_HEIGHT: usize = 240;
const CAP_GAP: usize = 10;
const MARGIN_X: usize = 16;
const MARGIN_Y: usize = 40;
const BORDER_PX: usize = 4;

const BACKDROP: u32 = 0x101014;
const CAP_FILL: u32 = 0xF5F1E6;
const CAP_FILL_PLAYING: u32 = 0xFFF3C4;
const CAP_BORDER: u32 = 0x2A2A2E;
const CAP_BORDER_PLAYING: u32 = 0xFFC600;
const LABEL_COLOR: u32 = 0x2A2A2E;

/// One key cap: identity attribute plus transient visual state.
#[derive(Debug)]
pub struct KeyCap {
    /// Identity attribute pairing this cap with its sound slot.
    pub key_code: u32,
    /// Letter drawn on the cap.
    pub label: char,
    /// Transient "currently depicted as pressed" flag.
    pub playing: bool,
    /// Elapsed time in the running press transition; `None` when idle.
    transition: Option<Duration>,
}

/// The board: every cap plus the framebuffer they render into.
pub struct Board {
    pub caps: Vec<KeyCap>,
    framebuffer: Vec<u32>,
}

impl Board {
    /// Build one idle cap per layout entry.
    pub fn new(layout: &[KeyDef]) -> Self {
        let caps = layout
            .iter()
            .map(|def| KeyCap {
                key_code: def.key_code,
                label: def.label,
                playing: false,
                transition: None,
            })
            .collect();
        Self {
            caps,
            framebuffer: vec![BACKDROP; WIDTH * HEIGHT],
        }
    }

    /// Apply the playing state to cap `key` and start its press transition.
    /// Re-applying a state that is already present changes nothing: the
    /// running transition keeps its clock.
    pub fn press(&mut self, key: usize) {
        let cap = &mut self.caps[key];
        if !cap.playing {
            cap.playing = true;
            cap.transition = Some(Duration::ZERO);
        }
    }

    /// Clear the playing state on cap `key`. Any running transition is
    /// cancelled with it; a cancelled transition never completes and never
    /// reports an event.
    pub fn release(&mut self, key: usize) {
        let cap = &mut self.caps[key];
        cap.playing = false;
        cap.transition = None;
    }

    /// Clear the playing state on every cap. The broad reset behind the
    /// global key release: one release wipes the whole board.
    pub fn release_all(&mut self) {
        for cap in &mut self.caps {
            cap.playing = false;
            cap.transition = None;
        }
    }

    /// Advance every running press transition by `dt` and report the ones
    /// that completed this tick. Each transition completes at most once.
    /// The playing state itself is left alone; clearing it belongs to the
    /// transition-end handler.
    pub fn tick(&mut self, dt: Duration) -> Vec<Event> {
        let mut done = Vec::new();
        for (i, cap) in self.caps.iter_mut().enumerate() {
            if let Some(elapsed) = cap.transition {
                let elapsed = elapsed + dt;
                if elapsed >= PRESS_TRANSITION {
                    cap.transition = None;
                    done.push(Event::TransitionEnd {
                        key: i,
                        property: events::TRANSFORM,
                    });
                } else {
                    cap.transition = Some(elapsed);
                }
            }
        }
        done
    }

    /// Idle-geometry rectangle of cap `i`: (x, y, w, h).
    fn cap_rect(i: usize) -> (usize, usize, usize, usize) {
        (
            MARGIN_X + i * (CAP_WIDTH + CAP_GAP),
            MARGIN_Y,
            CAP_WIDTH,
            CAP_HEIGHT,
        )
    }

    /// Which cap, if any, the point lands on. Gaps and the backdrop miss.
    /// Hit testing uses the idle geometry; the press growth is cosmetic.
    pub fn key_at(&self, x: usize, y: usize) -> Option<usize> {
        (0..self.caps.len()).find(|&i| {
            let (cx, cy, w, h) = Self::cap_rect(i);
            x >= cx && x < cx + w && y >= cy && y < cy + h
        })
    }

    /// Redraw the backdrop and every cap into the framebuffer.
    pub fn render(&mut self) {
        self.framebuffer.fill(BACKDROP);
        for i in 0..self.caps.len() {
            self.render_cap(i);
        }
    }

    /// The finished frame, row-major 0xRRGGBB, [`WIDTH`] x [`HEIGHT`].
    pub fn framebuffer(&self) -> &[u32] {
        &self.framebuffer
    }

    fn render_cap(&mut self, i: usize) {
        let cap = &self.caps[i];
        let (playing, label) = (cap.playing, cap.label);

        // Growth across the transition. A cap whose transition already
        // completed holds full size until the playing state is cleared.
        let progress = match (cap.playing, cap.transition) {
            (false, _) => 0.0f32,
            (true, None) => 1.0,
            (true, Some(elapsed)) => {
                (elapsed.as_secs_f32() / PRESS_TRANSITION.as_secs_f32()).min(1.0)
            }
        };

        let (x, y, w, h) = Self::cap_rect(i);
        let grow_x = (w as f32 * PRESS_SCALE * 0.5 * progress) as usize;
        let grow_y = (h as f32 * PRESS_SCALE * 0.5 * progress) as usize;
        let (x, y) = (x - grow_x, y - grow_y);
        let (w, h) = (w + 2 * grow_x, h + 2 * grow_y);

        let (border, fill) = if playing {
            (CAP_BORDER_PLAYING, CAP_FILL_PLAYING)
        } else {
            (CAP_BORDER, CAP_FILL)
        };

        self.fill_rect(x, y, w, h, border);
        self.fill_rect(
            x + BORDER_PX,
            y + BORDER_PX,
            w - 2 * BORDER_PX,
            h - 2 * BORDER_PX,
            fill,
        );
        self.draw_label(label, x + w / 2, y + h / 2);
    }

    fn fill_rect(&mut self, x: usize, y: usize, w: usize, h: usize, color: u32) {
        for row in y..(y + h).min(HEIGHT) {
            let line = &mut self.framebuffer[row * WIDTH..(row + 1) * WIDTH];
            for px in &mut line[x..(x + w).min(WIDTH)] {
                *px = color;
            }
        }
    }

    /// Draw the cap letter centered on (cx, cy), scaled up from the 5x7
    /// glyph rows.
    fn draw_label(&mut self, label: char, cx: usize, cy: usize) {
        const SCALE: usize = 4;
        let Some(rows) = glyph(label) else { return };
        let x0 = cx - (5 * SCALE) / 2;
        let y0 = cy - (7 * SCALE) / 2;
        for (ry, bits) in rows.iter().enumerate() {
            for rx in 0..5 {
                if bits & (0x10 >> rx) != 0 {
                    self.fill_rect(x0 + rx * SCALE, y0 + ry * SCALE, SCALE, SCALE, LABEL_COLOR);
                }
            }
        }
    }
}

/// 5x7 glyphs for the cap letters, one row per byte, bit 4 leftmost.
/// Only the letters the layout uses are covered; anything else draws blank.
fn glyph(label: char) -> Option<[u8; 7]> {
    let rows = match label {
        'A' => [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'S' => [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E],
        'D' => [0x1E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1E],
        'F' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10],
        'G' => [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0E],
        'H' => [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'J' => [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C],
        'K' => [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11],
        'L' => [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F],
        _ => return None,
    };
    Some(rows)
}
