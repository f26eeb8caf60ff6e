//! Static configuration for the demo window and frame.
//!
//! Plain `Default` structs; nothing is read from disk or the command line.

use std::path::PathBuf;

use winit::dpi::LogicalSize;

/// Window parameters.
#[derive(Debug, Clone)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Triangle Demo".to_string(),
            width: 800,
            height: 600,
        }
    }
}

impl WindowConfig {
    pub fn logical_size(&self) -> LogicalSize<f64> {
        LogicalSize::new(self.width as f64, self.height as f64)
    }
}

/// Straight (non-premultiplied) RGBA clear color.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ClearColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl ClearColor {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub fn to_wgpu(self) -> wgpu::Color {
        wgpu::Color {
            r: self.r as f64,
            g: self.g as f64,
            b: self.b as f64,
            a: self.a as f64,
        }
    }

    /// Expected 8-bit value of each channel in a `*8Unorm` (non-sRGB) target.
    pub fn to_unorm8(self) -> [u8; 4] {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }
}

impl Default for ClearColor {
    fn default() -> Self {
        Self::new(0.1, 0.2, 0.3, 1.0)
    }
}

/// Locations of the two shader stage source files.
#[derive(Debug, Clone)]
pub struct ShaderPaths {
    pub vertex: PathBuf,
    pub fragment: PathBuf,
}

impl Default for ShaderPaths {
    fn default() -> Self {
        let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("shaders");
        Self {
            vertex: dir.join("vertex.wgsl"),
            fragment: dir.join("fragment.wgsl"),
        }
    }
}
