use super::{Point, Rectangle};

impl Rectangle {
    /// Find the points where this rectangle's edges cross another's.
    ///
    /// Each of the four edges of `self` is checked against the two
    /// perpendicular edges of `other`, so at most 8 points are produced.
    /// A crossing only counts when the edge strictly straddles the other
    /// rectangle's line; edges that merely touch or run along each other
    /// contribute nothing.
    pub fn find_intersections(&self, other: &Rectangle) -> Vec<Point> {
        let mut points = Vec::with_capacity(4);
        horizontal_crossings(self.north, self.west, self.east, other, &mut points);
        horizontal_crossings(self.south, self.west, self.east, other, &mut points);
        vertical_crossings(self.west, self.north, self.south, other, &mut points);
        vertical_crossings(self.east, self.north, self.south, other, &mut points);
        points
    }
}

/// Check if the horizontal line at `y`, running from `left` to `right`,
/// crosses the west and/or east edge of `other`
fn horizontal_crossings(y: i32, left: i32, right: i32, other: &Rectangle, out: &mut Vec<Point>) {
    if y > other.north || y < other.south {
        return;
    }

    if left < other.west && right > other.west {
        out.push(Point::new(other.west, y));
    }

    if left < other.east && right > other.east {
        out.push(Point::new(other.east, y));
    }
}

/// Check if the vertical line at `x`, running from `upper` down to `lower`,
/// crosses the north and/or south edge of `other`
fn vertical_crossings(x: i32, upper: i32, lower: i32, other: &Rectangle, out: &mut Vec<Point>) {
    if x > other.east || x < other.west {
        return;
    }

    if upper > other.north && lower < other.north {
        out.push(Point::new(x, other.north));
    }

    if upper > other.south && lower < other.south {
        out.push(Point::new(x, other.south));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    const BASE: Rectangle = Rectangle {
        north: 4,
        east: 4,
        south: 1,
        west: 1,
    };

    fn point_set(points: &[Point]) -> HashSet<Point> {
        points.iter().copied().collect()
    }

    fn assert_points(actual: Vec<Point>, expected: &[(i32, i32)]) {
        assert_eq!(
            actual.len(),
            expected.len(),
            "wrong number of intersections: {:?}",
            actual
        );
        let expected: HashSet<Point> = expected.iter().copied().map(Point::from).collect();
        assert_eq!(point_set(&actual), expected);
    }

    #[test]
    fn test_edge_crossings() {
        assert_points(
            BASE.find_intersections(&Rectangle::new(5, 3, 3, 2)),
            &[(2, 4), (3, 4)],
        );
        assert_points(
            BASE.find_intersections(&Rectangle::new(3, 5, 2, 2)),
            &[(4, 3), (4, 2)],
        );
        assert_points(
            BASE.find_intersections(&Rectangle::new(3, 3, 0, 2)),
            &[(2, 1), (3, 1)],
        );
        assert_points(
            BASE.find_intersections(&Rectangle::new(3, 3, 2, 0)),
            &[(1, 3), (1, 2)],
        );
    }

    #[test]
    fn test_corner_crossings() {
        assert_points(
            BASE.find_intersections(&Rectangle::new(5, 5, 3, 3)),
            &[(3, 4), (4, 3)],
        );
        assert_points(
            BASE.find_intersections(&Rectangle::new(2, 5, 0, 3)),
            &[(4, 2), (3, 1)],
        );
        assert_points(
            BASE.find_intersections(&Rectangle::new(2, 2, 0, 0)),
            &[(2, 1), (1, 2)],
        );
        assert_points(
            BASE.find_intersections(&Rectangle::new(5, 2, 3, 0)),
            &[(1, 3), (2, 4)],
        );
    }

    #[test]
    fn test_through_spans() {
        assert_points(
            BASE.find_intersections(&Rectangle::new(3, 5, 2, 0)),
            &[(1, 3), (1, 2), (4, 3), (4, 2)],
        );
        assert_points(
            BASE.find_intersections(&Rectangle::new(5, 3, 0, 2)),
            &[(2, 4), (3, 4), (2, 1), (3, 1)],
        );
    }

    #[test]
    fn test_no_intersections() {
        // Disjoint
        assert!(BASE.find_intersections(&Rectangle::new(10, 10, 8, 8)).is_empty());
        // Strictly inside and strictly around
        let inner = Rectangle::new(3, 3, 2, 2);
        assert!(BASE.find_intersections(&inner).is_empty());
        assert!(inner.find_intersections(&BASE).is_empty());
        // Identical edges never straddle each other
        assert!(BASE.find_intersections(&BASE).is_empty());
    }

    #[test]
    fn test_touching_corner_does_not_cross() {
        assert!(BASE.find_intersections(&Rectangle::new(6, 6, 4, 4)).is_empty());
    }

    #[test]
    fn test_coincident_edge_reports_perpendicular_crossings() {
        // Other's west line lies on the base's east line; only the other's
        // north and south edges cross it
        assert_points(
            BASE.find_intersections(&Rectangle::new(3, 6, 2, 4)),
            &[(4, 3), (4, 2)],
        );
    }

    #[test]
    fn test_shared_edge_line_is_not_symmetric() {
        // Both rectangles have their north edge on y=4, so only one call
        // direction reports the point on that line
        let other = Rectangle::new(4, 5, 2, 2);
        assert_points(BASE.find_intersections(&other), &[(2, 4), (4, 2)]);
        assert_points(other.find_intersections(&BASE), &[(4, 4), (4, 2)]);
    }

    fn rectangle() -> impl Strategy<Value = Rectangle> {
        (-50i32..50, -50i32..50, 1i32..40, 1i32..40)
            .prop_map(|(west, south, w, h)| Rectangle::new(south + h, west + w, south, west))
    }

    fn all_distinct(values: [i32; 4]) -> bool {
        values.iter().collect::<HashSet<_>>().len() == values.len()
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]
        #[test]
        fn should_find_same_points_in_both_directions(a in rectangle(), b in rectangle()) {
            prop_assume!(all_distinct([a.north, a.south, b.north, b.south]));
            prop_assume!(all_distinct([a.east, a.west, b.east, b.west]));

            let forward = a.find_intersections(&b);
            let backward = b.find_intersections(&a);
            prop_assert_eq!(point_set(&forward), point_set(&backward));
            prop_assert_eq!(forward.len(), point_set(&forward).len());
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(128))]
        #[test]
        fn should_not_intersect_strictly_contained(
            outer in rectangle(),
            inset in 1i32..10
        ) {
            let grown = Rectangle::new(
                outer.north + inset,
                outer.east + inset,
                outer.south - inset,
                outer.west - inset,
            );
            prop_assert!(grown.contains(&outer));
            prop_assert!(grown.find_intersections(&outer).is_empty());
            prop_assert!(outer.find_intersections(&grown).is_empty());
        }
    }
}
