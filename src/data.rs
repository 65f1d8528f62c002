pub(crate) mod point;
mod point_set;

pub use point::Point;
pub use point_set::{ClosedTraversal, HullSequence, PointSet};
