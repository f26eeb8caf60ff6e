mod common;

use singularity_engine::config::ShaderPaths;
use singularity_engine::device::ResourceKind;
use singularity_engine::mesh::StaticMesh;
use singularity_engine::render::OffscreenTarget;
use singularity_engine::shader::{
    ShaderError, ShaderProgram, ShaderSources, ShaderStage, DIAGNOSTIC_LOG_CAPACITY,
};

const VALID_VERTEX: &str = r#"
@vertex
fn vs_main(@location(0) position: vec3<f32>) -> @builtin(position) vec4<f32> {
    return vec4<f32>(position, 1.0);
}
"#;

const VALID_FRAGMENT: &str = r#"
@fragment
fn fs_main() -> @location(0) vec4<f32> {
    return vec4<f32>(1.0, 1.0, 1.0, 1.0);
}
"#;

fn build(
    ctx: &singularity_engine::device::GpuContext,
    sources: &ShaderSources,
) -> Result<ShaderProgram, ShaderError> {
    ShaderProgram::build(ctx, sources, &[StaticMesh::layout()], OffscreenTarget::FORMAT)
}

#[test]
fn default_sources_link() {
    let Some(ctx) = common::headless_context() else { return };

    let sources = ShaderSources::from_files(&ShaderPaths::default()).unwrap();
    let program = build(&ctx, &sources).expect("default shaders should link");

    assert_eq!(program.target_format(), OffscreenTarget::FORMAT);
    assert!(ctx.ledger().is_live(program.id()));
    assert_eq!(ctx.ledger().live_count(ResourceKind::Program), 1);
}

#[test]
fn inline_valid_sources_link() {
    let Some(ctx) = common::headless_context() else { return };

    let result = build(&ctx, &ShaderSources::new(VALID_VERTEX, VALID_FRAGMENT));
    assert!(result.is_ok(), "{}", result.err().map(|e| e.to_string()).unwrap_or_default());
}

#[test]
fn malformed_fragment_reports_compile_diagnostic() {
    let Some(ctx) = common::headless_context() else { return };

    let broken = "@fragment\nfn fs_main( -> @location(0) vec4<f32> {\n    return 1.0\n}\n";
    let err = build(&ctx, &ShaderSources::new(VALID_VERTEX, broken))
        .err()
        .expect("malformed fragment must not link");

    assert_eq!(err.stage(), Some(ShaderStage::Fragment));
    let log = err.diagnostic().expect("compile errors carry a log");
    assert!(!log.is_empty());
    assert!(log.len() <= DIAGNOSTIC_LOG_CAPACITY);
    assert_eq!(ctx.ledger().live_count(ResourceKind::Program), 0);
}

#[test]
fn malformed_vertex_is_reported_before_fragment() {
    let Some(ctx) = common::headless_context() else { return };

    let err = build(&ctx, &ShaderSources::new("@vertex fn", "also not wgsl"))
        .err()
        .expect("both stages are malformed");

    assert!(matches!(
        err,
        ShaderError::Compile {
            stage: ShaderStage::Vertex,
            ..
        }
    ));
}

#[test]
fn mismatched_stage_interface_fails_to_link() {
    let Some(ctx) = common::headless_context() else { return };

    // Fragment reads location 0, which the vertex stage never writes.
    let fragment = r#"
@fragment
fn fs_main(@location(0) color: vec4<f32>) -> @location(0) vec4<f32> {
    return color;
}
"#;

    let err = build(&ctx, &ShaderSources::new(VALID_VERTEX, fragment))
        .err()
        .expect("interface mismatch must not link");

    assert!(matches!(err, ShaderError::Link { .. }), "{err}");
    assert!(!err.diagnostic().unwrap_or_default().is_empty());
}
