//! Input events consumed by the key trigger.
//!
//! The vocabulary mirrors the event contract a browser piano consumes:
//! keydown carrying a numeric
//! [`keyCode`](https://developer.mozilla.org/en-US/docs/Web/API/KeyboardEvent/keyCode),
//! keyup carrying nothing useful, click on a key cap, and
//! [`transitionend`](https://developer.mozilla.org/en-US/docs/Web/API/Element/transitionend_event)
//! on a key cap. The host loop translates polled window state into these
//! before dispatch.

/// Property name reported by a completed press transition.
pub const TRANSFORM: &str = "transform";

/// One input event, already translated into the form the trigger routes on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A key went down (or auto-repeated), carrying its DOM-convention code.
    KeyDown { key_code: u32 },
    /// A key was released. The code is deliberately absent: a release resets
    /// every cap, not just the released one.
    KeyUp,
    /// The pointer clicked the cap at this board index.
    Click { key: usize },
    /// A press transition ran to completion on the cap at this board index.
    TransitionEnd { key: usize, property: &'static str },
}
