use std::sync::mpsc;

use anyhow::{Context, Result};

use super::GpuContext;

impl GpuContext {
    /// Copies `buffer` into a staging buffer and returns its bytes.
    ///
    /// `buffer` must have been created with `COPY_SRC`. Blocks until the GPU
    /// has finished the copy.
    pub fn read_buffer(&self, buffer: &wgpu::Buffer) -> Result<Vec<u8>> {
        let size = buffer.size();

        let staging = self.device().create_buffer(&wgpu::BufferDescriptor {
            label: Some("singularity readback staging"),
            size,
            usage: wgpu::BufferUsages::MAP_READ | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let mut encoder = self
            .device()
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("singularity readback encoder"),
            });
        encoder.copy_buffer_to_buffer(buffer, 0, &staging, 0, size);
        self.queue().submit(std::iter::once(encoder.finish()));

        self.map_and_read(&staging)
    }

    /// Maps a `MAP_READ` buffer, copies its contents out and unmaps it.
    pub(crate) fn map_and_read(&self, staging: &wgpu::Buffer) -> Result<Vec<u8>> {
        let slice = staging.slice(..);
        let (tx, rx) = mpsc::channel();
        slice.map_async(wgpu::MapMode::Read, move |result| {
            let _ = tx.send(result);
        });

        self.device()
            .poll(wgpu::PollType::wait_indefinitely())
            .context("device poll failed during readback")?;

        rx.recv()
            .context("readback callback was dropped")?
            .context("failed to map readback buffer")?;

        let bytes = slice.get_mapped_range().to_vec();
        staging.unmap();
        Ok(bytes)
    }
}
