use wgpu::util::DeviceExt;

use crate::device::scope::capture_allocation;
use crate::device::{GpuContext, GpuError, ResourceHandle, ResourceId, ResourceKind};
use crate::render::FramePass;

use super::{Vertex, TRIANGLE_VERTICES};

/// Describes how the bytes of a mesh's vertex buffer map to shader inputs.
///
/// Derived from [`Vertex::layout`], so it always agrees with the buffer's
/// stride and offsets.
#[derive(Debug)]
pub struct VertexArray {
    layout: wgpu::VertexBufferLayout<'static>,
    handle: ResourceHandle,
}

impl VertexArray {
    fn new(ctx: &GpuContext) -> Self {
        Self {
            layout: Vertex::layout(),
            handle: ctx.ledger().register(ResourceKind::VertexArray),
        }
    }

    pub fn id(&self) -> ResourceId {
        self.handle.id()
    }

    pub fn layout(&self) -> &wgpu::VertexBufferLayout<'static> {
        &self.layout
    }
}

/// Immutable GPU geometry: created once, drawn many times, dropped once.
///
/// Invariant: `vertex_array` and `vertex_buffer` are created together in the
/// constructor and released together in `Drop`.
pub struct StaticMesh {
    label: &'static str,
    vertices: Vec<Vertex>,
    vertex_array: VertexArray,
    vertex_buffer: wgpu::Buffer,
    buffer_handle: ResourceHandle,
}

impl StaticMesh {
    /// The fixed three-vertex triangle.
    pub fn triangle(ctx: &GpuContext) -> Result<Self, GpuError> {
        Self::new(ctx, "singularity triangle", &TRIANGLE_VERTICES)
    }

    /// Uploads `vertices` into a new vertex buffer.
    ///
    /// The buffer is created without `COPY_DST`: its contents cannot change
    /// after this call.
    pub fn new(ctx: &GpuContext, label: &'static str, vertices: &[Vertex]) -> Result<Self, GpuError> {
        if vertices.is_empty() {
            return Err(GpuError::EmptyVertexList { label });
        }

        let (vertex_buffer, errors) = capture_allocation(ctx.device(), |device| {
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(label),
                contents: bytemuck::cast_slice(vertices),
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_SRC,
            })
        });

        if errors.out_of_memory.is_some() {
            vertex_buffer.destroy();
            return Err(GpuError::OutOfMemory { label });
        }
        if let Some(err) = errors.validation {
            vertex_buffer.destroy();
            return Err(GpuError::Validation {
                label,
                message: err.to_string(),
            });
        }

        let mesh = Self {
            label,
            vertices: vertices.to_vec(),
            vertex_array: VertexArray::new(ctx),
            vertex_buffer,
            buffer_handle: ctx.ledger().register(ResourceKind::VertexBuffer),
        };

        log::info!(
            "{label} created: {} vertices, vertex array {:?}, buffer {:?}",
            mesh.vertices.len(),
            mesh.vertex_array.id(),
            mesh.buffer_handle.id(),
        );

        Ok(mesh)
    }

    /// Draws every vertex as a triangle list with the pass's active program.
    ///
    /// Program selection is the caller's job. Without an active program the
    /// draw is skipped: nothing is rasterized and no device error is raised.
    pub fn draw(&self, pass: &mut FramePass<'_>) {
        if pass.active_program().is_none() {
            log::debug!("{}: draw skipped, no program active", self.label);
            return;
        }

        let raw = pass.raw();
        raw.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        raw.draw(0..self.vertex_count(), 0..1);
    }

    /// Layout to link a program against.
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        Vertex::layout()
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }

    pub fn vertex_array(&self) -> &VertexArray {
        &self.vertex_array
    }

    pub fn buffer(&self) -> &wgpu::Buffer {
        &self.vertex_buffer
    }

    pub fn buffer_id(&self) -> ResourceId {
        self.buffer_handle.id()
    }
}

impl Drop for StaticMesh {
    fn drop(&mut self) {
        // Both ledger handles drop right after this, with the fields.
        self.vertex_buffer.destroy();
        log::debug!("{} destroyed", self.label);
    }
}
