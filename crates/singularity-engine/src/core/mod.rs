//! Contract between the window runtime and the application.
//!
//! The runtime owns the window and the GPU context; the application owns its
//! GPU resources and is told when the context appears, when to draw, and
//! when the context is about to go away.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::FrameCtx;
