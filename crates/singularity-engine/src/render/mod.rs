//! Frame encoding.
//!
//! One render pass per frame: clear to the configured color, then let the
//! caller activate a program and draw into a [`FramePass`]. The same path
//! serves the window surface and the [`OffscreenTarget`].

mod offscreen;
mod pass;

pub use offscreen::{OffscreenTarget, Snapshot};
pub use pass::{encode_frame, FramePass};
