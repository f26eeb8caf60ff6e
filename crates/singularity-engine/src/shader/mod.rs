//! Shader program builder.
//!
//! Compiles a vertex and a fragment WGSL source into two transient shader
//! modules, links them into a render pipeline and reports failures as a
//! [`ShaderError`] carrying the device's bounded diagnostic log.

mod diagnostic;
mod error;
mod program;
mod source;

pub use diagnostic::DIAGNOSTIC_LOG_CAPACITY;
pub use error::ShaderError;
pub use program::ShaderProgram;
pub use source::{ShaderSources, ShaderStage};
