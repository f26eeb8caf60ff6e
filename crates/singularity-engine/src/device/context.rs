use std::sync::Arc;

use anyhow::{Context, Result};

use super::GpuInit;
use super::ledger::ResourceLedger;

/// Owns the wgpu core objects shared by every GPU resource in this crate.
///
/// This is the explicit rendering-context capability: shader programs and
/// meshes are built against a `&GpuContext` instead of ambient global state,
/// so several contexts can coexist (one per test, for instance).
pub struct GpuContext {
    instance: wgpu::Instance,
    adapter: wgpu::Adapter,
    device: wgpu::Device,
    queue: wgpu::Queue,
    ledger: Arc<ResourceLedger>,
}

impl GpuContext {
    /// Creates a context with no surface, for offscreen rendering.
    ///
    /// Tries a regular adapter first, then a fallback (software) adapter.
    pub async fn headless(init: &GpuInit) -> Result<Self> {
        let instance = create_instance();

        let mut adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: init.power_preference,
                compatible_surface: None,
                force_fallback_adapter: init.force_fallback_adapter,
            })
            .await
            .ok();

        if adapter.is_none() && !init.force_fallback_adapter {
            log::debug!("no hardware adapter; retrying with fallback adapter");
            adapter = instance
                .request_adapter(&wgpu::RequestAdapterOptions {
                    power_preference: init.power_preference,
                    compatible_surface: None,
                    force_fallback_adapter: true,
                })
                .await
                .ok();
        }

        let adapter = adapter.context("failed to find a suitable GPU adapter")?;
        Self::from_adapter(instance, adapter, init).await
    }

    /// Finishes context creation once an adapter has been selected.
    pub(crate) async fn from_adapter(
        instance: wgpu::Instance,
        adapter: wgpu::Adapter,
        init: &GpuInit,
    ) -> Result<Self> {
        let info = adapter.get_info();
        log::info!("adapter: {} ({:?}, {:?})", info.name, info.device_type, info.backend);

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("singularity device"),
                required_features: init.required_features,
                required_limits: init.required_limits.clone(),
                experimental_features: wgpu::ExperimentalFeatures::disabled(),
                memory_hints: wgpu::MemoryHints::Performance,
                trace: wgpu::Trace::Off,
            })
            .await
            .context("failed to create wgpu device/queue")?;

        Ok(Self {
            instance,
            adapter,
            device,
            queue,
            ledger: ResourceLedger::new(),
        })
    }

    pub fn instance(&self) -> &wgpu::Instance {
        &self.instance
    }

    pub fn adapter(&self) -> &wgpu::Adapter {
        &self.adapter
    }

    /// Returns a reference to the logical device.
    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    /// Returns a reference to the command queue.
    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }

    /// Live-handle registry for resources created against this context.
    pub fn ledger(&self) -> &Arc<ResourceLedger> {
        &self.ledger
    }
}

pub(crate) fn create_instance() -> wgpu::Instance {
    wgpu::Instance::new(&wgpu::InstanceDescriptor {
        backends: wgpu::Backends::all(),
        ..Default::default()
    })
}
