use std::process::ExitCode;

use anyhow::{Context, Result};

use singularity_engine::config::{ClearColor, ShaderPaths, WindowConfig};
use singularity_engine::core::{App, AppControl, FrameCtx};
use singularity_engine::device::{Gpu, GpuInit};
use singularity_engine::logging::{init_logging, LoggingConfig};
use singularity_engine::mesh::StaticMesh;
use singularity_engine::shader::{ShaderProgram, ShaderSources};
use singularity_engine::window::Runtime;

/// Draws the triangle every frame.
///
/// GPU resources are created in `on_init`, once the context exists, and
/// released in `on_teardown`, before it is destroyed.
#[derive(Default)]
struct TriangleApp {
    clear: ClearColor,
    shader_paths: ShaderPaths,
    program: Option<ShaderProgram>,
    mesh: Option<StaticMesh>,
}

impl App for TriangleApp {
    fn on_init(&mut self, gpu: &Gpu<'_>) -> Result<()> {
        let ctx = gpu.context();

        let sources = ShaderSources::from_files(&self.shader_paths)?;
        let program = ShaderProgram::build(
            ctx,
            &sources,
            &[StaticMesh::layout()],
            gpu.surface_format(),
        )?;
        let mesh = StaticMesh::triangle(ctx).context("failed to create triangle mesh")?;

        self.program = Some(program);
        self.mesh = Some(mesh);
        Ok(())
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let (Some(program), Some(mesh)) = (&self.program, &self.mesh) else {
            return AppControl::Continue;
        };

        ctx.render(self.clear, |pass| {
            pass.use_program(program);
            mesh.draw(pass);
        })
    }

    fn on_teardown(&mut self) {
        self.mesh = None;
        self.program = None;
        log::info!("triangle demo resources released");
    }
}

fn main() -> ExitCode {
    init_logging(LoggingConfig::default());

    match Runtime::run(WindowConfig::default(), GpuInit::default(), TriangleApp::default()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
