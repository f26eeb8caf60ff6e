use crate::config::ClearColor;
use crate::device::ResourceId;
use crate::shader::ShaderProgram;

/// A render pass plus the program currently active in it.
///
/// Binding state (program, vertex buffers) lives only as long as the pass.
pub struct FramePass<'p> {
    pass: wgpu::RenderPass<'p>,
    active_program: Option<ResourceId>,
}

impl<'p> FramePass<'p> {
    fn new(pass: wgpu::RenderPass<'p>) -> Self {
        Self {
            pass,
            active_program: None,
        }
    }

    /// Makes `program` the target of subsequent draws.
    pub fn use_program(&mut self, program: &ShaderProgram) {
        self.pass.set_pipeline(program.pipeline());
        self.active_program = Some(program.id());
    }

    pub fn active_program(&self) -> Option<ResourceId> {
        self.active_program
    }

    pub(crate) fn raw(&mut self) -> &mut wgpu::RenderPass<'p> {
        &mut self.pass
    }
}

/// Records one pass into `encoder` that clears `view` to `clear` and then
/// runs `draw`.
pub fn encode_frame<F>(
    encoder: &mut wgpu::CommandEncoder,
    view: &wgpu::TextureView,
    clear: ClearColor,
    draw: F,
) where
    F: FnOnce(&mut FramePass<'_>),
{
    let pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
        label: Some("singularity frame pass"),
        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
            view,
            resolve_target: None,
            ops: wgpu::Operations {
                load: wgpu::LoadOp::Clear(clear.to_wgpu()),
                store: wgpu::StoreOp::Store,
            },
            depth_slice: None,
        })],
        depth_stencil_attachment: None,
        timestamp_writes: None,
        occlusion_query_set: None,
        multiview_mask: None,
    });

    let mut frame_pass = FramePass::new(pass);
    draw(&mut frame_pass);
}
