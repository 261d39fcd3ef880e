use super::{Expectation, Scenario, Section, Suite};
use crate::geometry::{Point, Rectangle};

/// The reference scenarios every build is expected to pass.
///
/// Intersections are checked against a 3x3 base so that each of the eight
/// possible crossing points sits at a distinct coordinate; containment and
/// adjacency use a 5x5 base.
pub fn builtin_suite() -> Suite {
    Suite {
        name: "builtin".to_string(),
        sections: vec![
            intersection_section(),
            containment_section(),
            adjacency_section(),
        ],
        ..Suite::default()
    }
}

fn intersection_section() -> Section {
    let (north, east, south, west) = (4, 4, 1, 1);
    let base = Rectangle::new(north, east, south, west);

    let north_left = Point::new(2, north);
    let north_right = Point::new(3, north);
    let east_upper = Point::new(east, 3);
    let east_lower = Point::new(east, 2);
    let south_left = Point::new(2, south);
    let south_right = Point::new(3, south);
    let west_upper = Point::new(west, 3);
    let west_lower = Point::new(west, 2);

    let case = |name: &str, other: [i32; 4], points: &[Point]| {
        Scenario::new(
            name,
            base,
            Rectangle::from(other),
            Expectation::Intersections(points.to_vec()),
        )
    };

    Section {
        title: "Intersection".to_string(),
        scenarios: vec![
            case("northern edge", [5, 3, 3, 2], &[north_left, north_right]),
            case("eastern edge", [3, 5, 2, 2], &[east_upper, east_lower]),
            case("southern edge", [3, 3, 0, 2], &[south_left, south_right]),
            case("western edge", [3, 3, 2, 0], &[west_upper, west_lower]),
            case("northeast corner", [5, 5, 3, 3], &[north_right, east_upper]),
            case("southeast corner", [2, 5, 0, 3], &[east_lower, south_right]),
            case("southwest corner", [2, 2, 0, 0], &[south_left, west_lower]),
            case("northwest corner", [5, 2, 3, 0], &[west_upper, north_left]),
            case(
                "west and east edges (4 points)",
                [3, 5, 2, 0],
                &[west_upper, west_lower, east_upper, east_lower],
            ),
            case(
                "north and south edges (4 points)",
                [5, 3, 0, 2],
                &[north_left, north_right, south_left, south_right],
            ),
        ],
    }
}

fn containment_section() -> Section {
    let base = Rectangle::new(10, 10, 5, 5);
    let case = |name: &str, other: [i32; 4], expected: bool| {
        Scenario::new(
            name,
            base,
            Rectangle::from(other),
            Expectation::Contains(expected),
        )
    };

    Section {
        title: "Containment".to_string(),
        scenarios: vec![
            case("contained within base", [9, 9, 6, 6], true),
            case("intersects base, no containment", [12, 9, 6, 6], false),
            case("separate from base, no containment", [4, 4, 0, 0], false),
        ],
    }
}

fn adjacency_section() -> Section {
    let base = Rectangle::new(10, 10, 5, 5);
    let case = |side: &str, name: &str, other: [i32; 4], expected: bool| {
        Scenario::new(
            format!("{side} edge {name}"),
            base,
            Rectangle::from(other),
            Expectation::Adjacent(expected),
        )
    };

    Section {
        title: "Adjacency".to_string(),
        scenarios: vec![
            case("north", "subline", [11, 9, 10, 6], true),
            case("north", "proper", [11, 10, 10, 5], true),
            case("north", "partial", [11, 12, 10, 6], true),
            case("north", "no shared edge", [11, 9, 11, 6], false),
            case("north", "too far west", [11, 4, 10, 0], false),
            case("north", "too far east", [11, 12, 10, 11], false),
            case("east", "subline", [9, 11, 6, 10], true),
            case("east", "proper", [10, 11, 5, 10], true),
            case("east", "partial", [11, 11, 6, 10], true),
            case("east", "no shared edge", [10, 12, 5, 11], false),
            case("east", "too far north", [12, 11, 11, 10], false),
            case("east", "too far south", [4, 11, 3, 10], false),
            case("south", "subline", [5, 9, 4, 6], true),
            case("south", "proper", [5, 10, 4, 5], true),
            case("south", "partial", [5, 12, 4, 6], true),
            case("south", "no shared edge", [4, 10, 3, 5], false),
            case("south", "too far west", [5, 4, 4, 0], false),
            case("south", "too far east", [5, 12, 4, 11], false),
            case("west", "subline", [9, 5, 6, 4], true),
            case("west", "proper", [10, 5, 5, 4], true),
            case("west", "partial", [11, 5, 6, 4], true),
            case("west", "no shared edge", [10, 4, 5, 3], false),
            case("west", "too far north", [12, 5, 11, 4], false),
            case("west", "too far south", [4, 5, 3, 4], false),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_shape() {
        let suite = builtin_suite();
        let titles: Vec<_> = suite.sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, ["Intersection", "Containment", "Adjacency"]);
        assert_eq!(suite.scenario_count(), 10 + 3 + 24);
        assert!(suite.first_missing_other().is_none());
    }

    #[test]
    fn test_builtin_rectangles_are_valid() {
        // The north "no shared edge" fixture is flat (north == south)
        let suite = builtin_suite();
        let invalid: Vec<_> = suite
            .sections
            .iter()
            .flat_map(|s| &s.scenarios)
            .filter(|sc| !sc.base.is_valid() || !sc.other.is_some_and(|r| r.is_valid()))
            .map(|sc| sc.name.as_str())
            .collect();
        assert_eq!(invalid, ["north edge no shared edge"]);
    }
}
