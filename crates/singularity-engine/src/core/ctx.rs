use winit::window::Window;

use crate::config::ClearColor;
use crate::device::{Gpu, GpuContext, SurfaceErrorAction};
use crate::render::{encode_frame, FramePass};

use super::app::AppControl;

/// Per-frame context passed to [`App::on_frame`](super::App::on_frame).
///
/// Lifetimes:
/// - `'a` is the duration of the callback invocation
/// - `'w` is the window-borrow lifetime carried by `Gpu<'w>`
pub struct FrameCtx<'a, 'w> {
    pub window: &'a Window,
    pub gpu: &'a mut Gpu<'w>,
}

impl<'a, 'w> FrameCtx<'a, 'w> {
    pub fn context(&self) -> &GpuContext {
        self.gpu.context()
    }

    /// Clears the surface to `clear`, runs `draw`, then presents.
    ///
    /// Surface errors skip the frame; an unrecoverable one returns
    /// [`AppControl::Exit`].
    pub fn render<F>(&mut self, clear: ClearColor, draw: F) -> AppControl
    where
        F: FnOnce(&mut FramePass<'_>),
    {
        let mut frame = match self.gpu.begin_frame() {
            Ok(f) => f,
            Err(err) => {
                log::warn!("failed to acquire surface texture: {err}");
                return match self.gpu.handle_surface_error(err) {
                    SurfaceErrorAction::Fatal => AppControl::Exit,
                    SurfaceErrorAction::Reconfigured | SurfaceErrorAction::SkipFrame => {
                        AppControl::Continue
                    }
                };
            }
        };

        encode_frame(&mut frame.encoder, &frame.view, clear, draw);

        self.window.pre_present_notify();
        self.gpu.submit(frame);

        AppControl::Continue
    }
}
