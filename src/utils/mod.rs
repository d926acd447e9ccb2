//! Various unsorted geometrical and logical operators.

pub use self::isometry_ops::IsometryOps;
pub use self::sorted_pair::SortedPair;
pub use self::wops::WBasis;

mod isometry_ops;
mod sorted_pair;
mod wops;
