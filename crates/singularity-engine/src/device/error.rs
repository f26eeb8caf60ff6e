use std::fmt;

/// A GPU allocation that the device rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum GpuError {
    /// A vertex buffer was requested for zero vertices.
    EmptyVertexList { label: &'static str },
    /// The device ran out of memory while allocating `label`.
    OutOfMemory { label: &'static str },
    /// The device reported a validation error while allocating `label`.
    Validation { label: &'static str, message: String },
}

impl fmt::Display for GpuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GpuError::EmptyVertexList { label } => {
                write!(f, "{label}: vertex list is empty")
            }
            GpuError::OutOfMemory { label } => {
                write!(f, "{label}: out of GPU memory")
            }
            GpuError::Validation { label, message } => {
                write!(f, "{label}: validation failed: {message}")
            }
        }
    }
}

impl std::error::Error for GpuError {}

/// High-level response after a surface error.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Surface was reconfigured; rendering may resume next frame.
    Reconfigured,
    /// Transient error; skip the current frame.
    SkipFrame,
    /// Fatal error (commonly OOM); terminate.
    Fatal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_allocation() {
        let err = GpuError::Validation {
            label: "triangle vbo",
            message: "usage is empty".into(),
        };
        assert_eq!(err.to_string(), "triangle vbo: validation failed: usage is empty");
        assert_eq!(
            GpuError::OutOfMemory { label: "x" }.to_string(),
            "x: out of GPU memory"
        );
    }
}
