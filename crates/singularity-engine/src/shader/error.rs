use std::fmt;
use std::io;
use std::path::PathBuf;

use super::ShaderStage;

/// Failure to produce a linked shader program.
#[derive(Debug)]
pub enum ShaderError {
    /// A stage source file could not be read.
    Read {
        stage: ShaderStage,
        path: PathBuf,
        source: io::Error,
    },
    /// The device rejected one stage's source.
    Compile { stage: ShaderStage, log: String },
    /// Both stages compiled but could not be combined into a pipeline.
    Link { log: String },
}

impl ShaderError {
    /// The device's diagnostic log for compile and link failures.
    pub fn diagnostic(&self) -> Option<&str> {
        match self {
            ShaderError::Read { .. } => None,
            ShaderError::Compile { log, .. } | ShaderError::Link { log } => Some(log.as_str()),
        }
    }

    /// The stage that failed, if the failure is tied to one stage.
    pub fn stage(&self) -> Option<ShaderStage> {
        match self {
            ShaderError::Read { stage, .. } | ShaderError::Compile { stage, .. } => Some(*stage),
            ShaderError::Link { .. } => None,
        }
    }
}

impl fmt::Display for ShaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderError::Read { stage, path, source } => {
                write!(f, "failed to read {stage} shader {}: {source}", path.display())
            }
            ShaderError::Compile { stage, log } => {
                write!(f, "{stage} shader compilation failed:\n{log}")
            }
            ShaderError::Link { log } => write!(f, "shader program link failed:\n{log}"),
        }
    }
}

impl std::error::Error for ShaderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ShaderError::Read { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compile_error_exposes_stage_and_log() {
        let err = ShaderError::Compile {
            stage: ShaderStage::Fragment,
            log: "1:5: expected ';'".into(),
        };
        assert_eq!(err.stage(), Some(ShaderStage::Fragment));
        assert_eq!(err.diagnostic(), Some("1:5: expected ';'"));
        assert!(err.to_string().starts_with("fragment shader compilation failed"));
    }

    #[test]
    fn link_error_has_no_stage() {
        let err = ShaderError::Link { log: "interface mismatch".into() };
        assert_eq!(err.stage(), None);
        assert_eq!(err.diagnostic(), Some("interface mismatch"));
    }

    #[test]
    fn read_error_chains_io_source() {
        let err = ShaderError::Read {
            stage: ShaderStage::Vertex,
            path: "v.wgsl".into(),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.diagnostic().is_none());
        assert!(std::error::Error::source(&err).is_some());
    }
}
