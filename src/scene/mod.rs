//! The scene-graph side: shape descriptions and the frames that carry them.

pub use self::shape_description::{ShapeDescription, ShapeKind};
pub use self::shape_frame::{FrameKey, ShapeFrame, SimpleFrame};
pub use self::shared_shape::{ShapeKey, SharedShape};

mod shape_description;
mod shape_frame;
mod shared_shape;
