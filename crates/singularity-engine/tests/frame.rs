mod common;

use singularity_engine::config::{ClearColor, ShaderPaths};
use singularity_engine::mesh::StaticMesh;
use singularity_engine::render::OffscreenTarget;
use singularity_engine::shader::{ShaderProgram, ShaderSources};

const SIZE: u32 = 64;

#[test]
fn one_frame_draws_triangle_over_clear_color() {
    let Some(ctx) = common::headless_context() else { return };

    // Channels chosen to quantize exactly to 8 bits.
    let clear = ClearColor::new(0.2, 0.4, 0.6, 1.0);

    let sources = ShaderSources::from_files(&ShaderPaths::default()).unwrap();
    let program = ShaderProgram::build(
        &ctx,
        &sources,
        &[StaticMesh::layout()],
        OffscreenTarget::FORMAT,
    )
    .unwrap();
    let mesh = StaticMesh::triangle(&ctx).unwrap();
    let target = OffscreenTarget::new(&ctx, SIZE, SIZE).unwrap();

    target.render(&ctx, clear, |pass| {
        pass.use_program(&program);
        mesh.draw(pass);
    });

    let snap = target.read_pixels(&ctx).unwrap();
    assert_eq!(snap.size(), (SIZE, SIZE));

    let inside = snap.pixel(SIZE / 2, SIZE / 2).unwrap();
    assert_ne!(inside, clear.to_unorm8());
    assert_eq!(inside[0], 255, "fragment stage writes full red");

    // Corners lie outside the triangle.
    for (x, y) in [(1, 1), (SIZE - 2, 1), (1, SIZE - 2), (SIZE - 2, SIZE - 2)] {
        assert_eq!(snap.pixel(x, y), Some(clear.to_unorm8()), "pixel ({x}, {y})");
    }
}

#[test]
fn frames_can_repeat_with_the_same_resources() {
    let Some(ctx) = common::headless_context() else { return };

    let sources = ShaderSources::from_files(&ShaderPaths::default()).unwrap();
    let program = ShaderProgram::build(
        &ctx,
        &sources,
        &[StaticMesh::layout()],
        OffscreenTarget::FORMAT,
    )
    .unwrap();
    let mesh = StaticMesh::triangle(&ctx).unwrap();
    let target = OffscreenTarget::new(&ctx, SIZE, SIZE).unwrap();

    let mut snapshots = Vec::new();
    for _ in 0..3 {
        target.render(&ctx, ClearColor::default(), |pass| {
            pass.use_program(&program);
            mesh.draw(pass);
        });
        snapshots.push(target.read_pixels(&ctx).unwrap());
    }

    assert!(snapshots.windows(2).all(|w| w[0] == w[1]));
}
