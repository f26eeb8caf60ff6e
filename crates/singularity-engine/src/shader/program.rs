use crate::device::scope::capture_validation;
use crate::device::{GpuContext, ResourceHandle, ResourceId, ResourceKind};

use super::diagnostic::DiagnosticLog;
use super::{ShaderError, ShaderSources, ShaderStage};

/// A linked vertex + fragment program, ready to be activated in a pass.
///
/// Compiled stage modules are not retained; only the pipeline is.
pub struct ShaderProgram {
    pipeline: wgpu::RenderPipeline,
    target_format: wgpu::TextureFormat,
    handle: ResourceHandle,
}

impl ShaderProgram {
    /// Compiles both stages and links them into a render pipeline.
    ///
    /// `vertex_layouts` describes the vertex buffers the program reads and
    /// `target_format` is the color format it renders into. Each stage file
    /// must contain exactly one entry point for its stage.
    ///
    /// Both stages are always compiled so every compile diagnostic is logged;
    /// the vertex stage's error is returned first. Stage modules are dropped
    /// before returning on every path.
    pub fn build(
        ctx: &GpuContext,
        sources: &ShaderSources,
        vertex_layouts: &[wgpu::VertexBufferLayout<'_>],
        target_format: wgpu::TextureFormat,
    ) -> Result<Self, ShaderError> {
        let vertex = compile_stage(ctx, ShaderStage::Vertex, &sources.vertex);
        let fragment = compile_stage(ctx, ShaderStage::Fragment, &sources.fragment);
        let (vertex, fragment) = (vertex?, fragment?);

        let (pipeline, link_error) = capture_validation(ctx.device(), |device| {
            device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some("singularity program"),
                layout: None,

                vertex: wgpu::VertexState {
                    module: &vertex,
                    entry_point: None,
                    compilation_options: Default::default(),
                    buffers: vertex_layouts,
                },

                fragment: Some(wgpu::FragmentState {
                    module: &fragment,
                    entry_point: None,
                    compilation_options: Default::default(),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: target_format,
                        blend: Some(wgpu::BlendState::REPLACE),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                }),

                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::TriangleList,
                    strip_index_format: None,
                    front_face: wgpu::FrontFace::Ccw,
                    cull_mode: None,
                    polygon_mode: wgpu::PolygonMode::Fill,
                    unclipped_depth: false,
                    conservative: false,
                },

                depth_stencil: None,
                multisample: wgpu::MultisampleState::default(),
                multiview_mask: None,
                cache: None,
            })
        });

        drop(vertex);
        drop(fragment);

        if let Some(err) = link_error {
            let mut log = DiagnosticLog::new();
            log.push_line(&err.to_string());
            let log = log.finish();
            log::error!("shader program link failed:\n{log}");
            return Err(ShaderError::Link { log });
        }

        let handle = ctx.ledger().register(ResourceKind::Program);
        log::debug!("shader program {:?} linked for {target_format:?}", handle.id());

        Ok(Self {
            pipeline,
            target_format,
            handle,
        })
    }

    pub fn id(&self) -> ResourceId {
        self.handle.id()
    }

    /// Color format the program was linked against.
    pub fn target_format(&self) -> wgpu::TextureFormat {
        self.target_format
    }

    pub(crate) fn pipeline(&self) -> &wgpu::RenderPipeline {
        &self.pipeline
    }
}

/// Compiles one stage. The error log comes from this module's own
/// compilation messages, falling back to the scope's validation error.
fn compile_stage(
    ctx: &GpuContext,
    stage: ShaderStage,
    source: &str,
) -> Result<wgpu::ShaderModule, ShaderError> {
    let (module, scope_error) = capture_validation(ctx.device(), |device| {
        device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(stage.label()),
            source: wgpu::ShaderSource::Wgsl(source.into()),
        })
    });

    let info = pollster::block_on(module.get_compilation_info());

    let mut log = DiagnosticLog::new();
    for message in info
        .messages
        .iter()
        .filter(|m| matches!(m.message_type, wgpu::CompilationMessageType::Error))
    {
        log.push_compilation_message(message);
    }
    if log.is_empty() {
        if let Some(err) = scope_error {
            log.push_line(&err.to_string());
        }
    }

    if log.is_empty() {
        return Ok(module);
    }

    let log = log.finish();
    log::error!("{stage} shader compilation failed:\n{log}");
    Err(ShaderError::Compile { stage, log })
}
