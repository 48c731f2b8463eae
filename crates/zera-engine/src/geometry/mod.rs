//! Static geometry: vertex layout description, built-in meshes, draw calls.
//!
//! Convention: positions are clip-space `[x, y, z]`, counter-clockwise
//! winding is front-facing.

mod layout;
mod mesh;

pub use layout::{VertexAttribute, VertexLayout};
pub use mesh::{DrawCall, Geometry};
