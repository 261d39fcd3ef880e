use std::fmt;

use serde::{Deserialize, Serialize};

/// A point on the integer plane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_structural_equality() {
        assert_eq!(Point::new(2, 4), Point::new(2, 4));
        assert_ne!(Point::new(2, 4), Point::new(4, 2));
        assert_eq!(Point::from((-3, 7)), Point::new(-3, 7));
    }

    #[test]
    fn test_set_membership() {
        let points: HashSet<Point> = [Point::new(1, 2), Point::new(1, 2), Point::new(2, 1)]
            .into_iter()
            .collect();
        assert_eq!(points.len(), 2);
        assert!(points.contains(&Point::new(2, 1)));
    }

    #[test]
    fn test_display() {
        assert_eq!(Point::new(-1, 5).to_string(), "(-1, 5)");
    }
}
