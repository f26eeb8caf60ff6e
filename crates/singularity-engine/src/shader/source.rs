use std::fmt;
use std::path::Path;

use crate::config::ShaderPaths;

use super::ShaderError;

/// Pipeline stage a shader source targets.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    pub(crate) fn label(self) -> &'static str {
        match self {
            ShaderStage::Vertex => "singularity vertex stage",
            ShaderStage::Fragment => "singularity fragment stage",
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ShaderStage::Vertex => "vertex",
            ShaderStage::Fragment => "fragment",
        })
    }
}

/// The two WGSL source texts of one program, fully loaded in memory.
///
/// No validation or preprocessing happens here; the device compiler is the
/// only judge of the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderSources {
    pub vertex: String,
    pub fragment: String,
}

impl ShaderSources {
    pub fn new(vertex: impl Into<String>, fragment: impl Into<String>) -> Self {
        Self {
            vertex: vertex.into(),
            fragment: fragment.into(),
        }
    }

    /// Reads both stage files.
    pub fn from_files(paths: &ShaderPaths) -> Result<Self, ShaderError> {
        Ok(Self {
            vertex: read_stage(ShaderStage::Vertex, &paths.vertex)?,
            fragment: read_stage(ShaderStage::Fragment, &paths.fragment)?,
        })
    }

    pub fn get(&self, stage: ShaderStage) -> &str {
        match stage {
            ShaderStage::Vertex => &self.vertex,
            ShaderStage::Fragment => &self.fragment,
        }
    }
}

fn read_stage(stage: ShaderStage, path: &Path) -> Result<String, ShaderError> {
    let text = std::fs::read_to_string(path).map_err(|source| ShaderError::Read {
        stage,
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("loaded {stage} shader from {} ({} bytes)", path.display(), text.len());
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_default_stage_files() {
        let sources = ShaderSources::from_files(&ShaderPaths::default()).unwrap();
        assert!(sources.vertex.contains("@vertex"));
        assert!(sources.fragment.contains("@fragment"));
    }

    #[test]
    fn missing_file_reports_stage_and_path() {
        let paths = ShaderPaths {
            fragment: "does/not/exist.wgsl".into(),
            ..ShaderPaths::default()
        };

        let err = ShaderSources::from_files(&paths).unwrap_err();
        match &err {
            ShaderError::Read { stage, path, .. } => {
                assert_eq!(*stage, ShaderStage::Fragment);
                assert_eq!(path, Path::new("does/not/exist.wgsl"));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(err.to_string().contains("does/not/exist.wgsl"));
    }

    #[test]
    fn get_returns_stage_text() {
        let s = ShaderSources::new("v", "f");
        assert_eq!(s.get(ShaderStage::Vertex), "v");
        assert_eq!(s.get(ShaderStage::Fragment), "f");
    }
}
