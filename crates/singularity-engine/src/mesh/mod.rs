//! Static geometry.
//!
//! A [`StaticMesh`] uploads a fixed vertex list once, draws it any number of
//! times, and releases its GPU handles together when dropped.

mod static_mesh;
mod vertex;

pub use static_mesh::{StaticMesh, VertexArray};
pub use vertex::{Vertex, TRIANGLE_VERTICES};
