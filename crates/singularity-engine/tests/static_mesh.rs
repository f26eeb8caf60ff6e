mod common;

use singularity_engine::config::ClearColor;
use singularity_engine::device::{GpuError, ResourceKind};
use singularity_engine::mesh::{StaticMesh, TRIANGLE_VERTICES};
use singularity_engine::render::OffscreenTarget;

#[test]
fn triangle_allocates_one_buffer_and_one_vertex_array() {
    let Some(ctx) = common::headless_context() else { return };

    let mesh = StaticMesh::triangle(&ctx).unwrap();

    assert_eq!(ctx.ledger().live_count(ResourceKind::VertexBuffer), 1);
    assert_eq!(ctx.ledger().live_count(ResourceKind::VertexArray), 1);
    assert_eq!(mesh.vertex_count(), 3);
    assert_eq!(mesh.vertices(), &TRIANGLE_VERTICES);
}

#[test]
fn buffer_holds_the_nine_triangle_floats() {
    let Some(ctx) = common::headless_context() else { return };

    let mesh = StaticMesh::triangle(&ctx).unwrap();
    let bytes = ctx.read_buffer(mesh.buffer()).unwrap();

    let floats: Vec<f32> = bytes
        .chunks_exact(4)
        .map(|b| f32::from_le_bytes([b[0], b[1], b[2], b[3]]))
        .collect();
    assert_eq!(floats, [-0.5, -0.5, 0.0, 0.5, -0.5, 0.0, 0.0, 0.5, 0.0]);
}

#[test]
fn vertex_array_layout_matches_buffer() {
    let Some(ctx) = common::headless_context() else { return };

    let mesh = StaticMesh::triangle(&ctx).unwrap();
    let layout = mesh.vertex_array().layout();

    assert_eq!(layout.array_stride * mesh.vertex_count() as u64, mesh.buffer().size());
    assert_eq!(layout.attributes[0].shader_location, 0);
    assert_eq!(layout.attributes[0].format, wgpu::VertexFormat::Float32x3);
}

#[test]
fn empty_vertex_list_is_rejected() {
    let Some(ctx) = common::headless_context() else { return };

    let err = StaticMesh::new(&ctx, "empty", &[]).err();
    assert_eq!(err, Some(GpuError::EmptyVertexList { label: "empty" }));
    assert_eq!(ctx.ledger().total_live(), 0);
}

#[test]
fn dropping_the_mesh_releases_both_handles() {
    let Some(ctx) = common::headless_context() else { return };

    let mesh = StaticMesh::triangle(&ctx).unwrap();
    let buffer_id = mesh.buffer_id();
    let array_id = mesh.vertex_array().id();
    assert!(ctx.ledger().is_live(buffer_id));
    assert!(ctx.ledger().is_live(array_id));

    drop(mesh);

    assert!(!ctx.ledger().is_live(buffer_id));
    assert!(!ctx.ledger().is_live(array_id));
    assert_eq!(ctx.ledger().total_live(), 0);
}

#[test]
fn draw_without_program_is_harmless() {
    let Some(ctx) = common::headless_context() else { return };

    let clear = ClearColor::new(0.2, 0.4, 0.6, 1.0);
    let target = OffscreenTarget::new(&ctx, 32, 32).unwrap();
    let mesh = StaticMesh::triangle(&ctx).unwrap();

    target.render(&ctx, clear, |pass| {
        assert!(pass.active_program().is_none());
        mesh.draw(pass);
    });

    let snap = target.read_pixels(&ctx).unwrap();
    assert_eq!(snap.pixel(16, 16), Some(clear.to_unorm8()));
}
