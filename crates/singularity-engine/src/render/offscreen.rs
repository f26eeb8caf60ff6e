use anyhow::{ensure, Result};

use crate::config::ClearColor;
use crate::device::GpuContext;

use super::{encode_frame, FramePass};

/// A window-less color target that can be read back to the CPU.
///
/// Uses a linear `Rgba8Unorm` format so cleared pixels equal
/// [`ClearColor::to_unorm8`] exactly.
pub struct OffscreenTarget {
    texture: wgpu::Texture,
    view: wgpu::TextureView,
    width: u32,
    height: u32,
}

impl OffscreenTarget {
    pub const FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8Unorm;

    pub fn new(ctx: &GpuContext, width: u32, height: u32) -> Result<Self> {
        ensure!(width > 0 && height > 0, "offscreen target has zero size");

        let texture = ctx.device().create_texture(&wgpu::TextureDescriptor {
            label: Some("singularity offscreen target"),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: Self::FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::COPY_SRC,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        Ok(Self {
            texture,
            view,
            width,
            height,
        })
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Runs one frame iteration into the target and submits it.
    pub fn render<F>(&self, ctx: &GpuContext, clear: ClearColor, draw: F)
    where
        F: FnOnce(&mut FramePass<'_>),
    {
        let mut encoder = ctx
            .device()
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("singularity offscreen encoder"),
            });

        encode_frame(&mut encoder, &self.view, clear, draw);
        ctx.queue().submit(std::iter::once(encoder.finish()));
    }

    /// Copies the target back to the CPU.
    pub fn read_pixels(&self, ctx: &GpuContext) -> Result<Snapshot> {
        let padded_row = padded_row_bytes(self.width);

        let staging = ctx.device().create_buffer(&wgpu::BufferDescriptor {
            label: Some("singularity offscreen readback"),
            size: padded_row as u64 * self.height as u64,
            usage: wgpu::BufferUsages::MAP_READ | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let mut encoder = ctx
            .device()
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("singularity offscreen readback encoder"),
            });
        encoder.copy_texture_to_buffer(
            wgpu::TexelCopyTextureInfo {
                texture: &self.texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            wgpu::TexelCopyBufferInfo {
                buffer: &staging,
                layout: wgpu::TexelCopyBufferLayout {
                    offset: 0,
                    bytes_per_row: Some(padded_row),
                    rows_per_image: Some(self.height),
                },
            },
            wgpu::Extent3d {
                width: self.width,
                height: self.height,
                depth_or_array_layers: 1,
            },
        );
        ctx.queue().submit(std::iter::once(encoder.finish()));

        let bytes = ctx.map_and_read(&staging)?;
        Ok(Snapshot::from_padded(self.width, self.height, padded_row, &bytes))
    }
}

/// RGBA8 pixels read back from an [`OffscreenTarget`], top row first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 4]>,
}

impl Snapshot {
    fn from_padded(width: u32, height: u32, padded_row: u32, bytes: &[u8]) -> Self {
        let row_len = width as usize * 4;
        let pixels = bytes
            .chunks(padded_row as usize)
            .take(height as usize)
            .flat_map(|row| row[..row_len].chunks_exact(4))
            .map(|px| [px[0], px[1], px[2], px[3]])
            .collect();

        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Pixel at column `x`, row `y` (origin top-left).
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get((y * self.width + x) as usize).copied()
    }
}

/// Row pitch for texture-to-buffer copies, padded to wgpu's alignment.
fn padded_row_bytes(width: u32) -> u32 {
    let unpadded = width * 4;
    let align = wgpu::COPY_BYTES_PER_ROW_ALIGNMENT;
    unpadded.div_ceil(align) * align
}
