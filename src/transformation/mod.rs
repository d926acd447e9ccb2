//! Tessellation of collision geometries into triangle meshes.

mod to_trimesh;
pub mod utils;
