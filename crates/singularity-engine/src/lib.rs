//! Singularity engine crate.
//!
//! Owns the GPU context, the shader program builder, the static triangle
//! mesh and the winit runtime that drives them once per frame.

pub mod config;
pub mod core;
pub mod device;
pub mod logging;
pub mod mesh;
pub mod render;
pub mod shader;
pub mod window;
