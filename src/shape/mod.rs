//! Collision geometries supported by the reference backend.

pub use self::ball::Ball;
pub use self::collision_geometry::{CollisionGeometry, GeometryType};
pub use self::cuboid::Cuboid;
pub use self::cylinder::Cylinder;
pub use self::ellipsoid::Ellipsoid;
pub use self::feature_id::FeatureId;
pub use self::half_space::HalfSpace;
#[doc(inline)]
pub use self::support_map::SupportMap;
pub use self::triangle::{Triangle, TrianglePointLocation};
pub use self::trimesh::{TriMesh, TriMeshBuilderError};

mod ball;
mod collision_geometry;
mod cuboid;
mod cylinder;
mod ellipsoid;
mod feature_id;
mod half_space;
mod support_map;
mod triangle;
mod trimesh;
