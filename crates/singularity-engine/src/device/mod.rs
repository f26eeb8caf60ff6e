//! GPU context management.
//!
//! This module is responsible for:
//! - creating the wgpu Instance/Adapter/Device/Queue (`GpuContext`)
//! - binding a surface to a window for presentation (`Gpu`)
//! - checked allocation through error scopes
//! - tracking which GPU handles are alive (`ResourceLedger`)

mod context;
mod error;
mod frame;
mod gpu;
mod init;
mod ledger;
mod readback;
pub(crate) mod scope;

pub use context::GpuContext;
pub use error::{GpuError, SurfaceErrorAction};
pub use frame::GpuFrame;
pub use gpu::Gpu;
pub use init::GpuInit;
pub use ledger::{ResourceHandle, ResourceId, ResourceKind, ResourceLedger};
