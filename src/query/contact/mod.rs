//! Implementation details of the contact generation between pairs of geometries.

pub use self::contact::{ContactBuffer, ContactPoint};
pub use self::contact_ball_ball::contact_ball_ball;
pub use self::contact_cuboid_ball::contact_cuboid_ball;
pub use self::contact_cuboid_cuboid::{
    contact_cuboid_cuboid, cuboid_cuboid_compute_separation_wrt_local_line,
    cuboid_cuboid_find_local_separating_edge_twoway,
    cuboid_cuboid_find_local_separating_normal_oneway,
};
pub use self::contact_halfspace_cuboid::contact_halfspace_cuboid;
pub use self::contact_halfspace_support_map::contact_halfspace_support_map;
pub use self::contact_halfspace_trimesh::contact_halfspace_trimesh;
pub use self::contact_support_map_support_map::contact_support_map_support_map;
pub use self::contact_trimesh_ball::contact_trimesh_ball;
pub use self::contact_trimesh_support_map::contact_trimesh_support_map;
pub use self::contact_trimesh_trimesh::contact_trimesh_trimesh;

mod contact;
mod contact_ball_ball;
mod contact_cuboid_ball;
mod contact_cuboid_cuboid;
mod contact_halfspace_cuboid;
mod contact_halfspace_support_map;
mod contact_halfspace_trimesh;
mod contact_support_map_support_map;
mod contact_trimesh_ball;
mod contact_trimesh_support_map;
mod contact_trimesh_trimesh;
