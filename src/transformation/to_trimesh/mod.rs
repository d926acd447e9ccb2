//! Conversion of collision geometries to triangle meshes.
//!
//! Each conversion is implemented as a `to_trimesh` inherent method of the converted
//! geometry and returns a vertex buffer and an index buffer.

mod cuboid_to_trimesh;
mod cylinder_to_trimesh;
mod ellipsoid_to_trimesh;
mod plane_to_trimesh;
