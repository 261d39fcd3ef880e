mod adjacency;
mod intersect;
mod point;
mod rectangle;

pub use adjacency::Side;
pub use point::Point;
pub use rectangle::{ParseRectangleError, Rectangle};
