use std::fmt;

use serde::{Deserialize, Serialize};

use super::Rectangle;

/// One of the four edges of a rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    North,
    East,
    South,
    West,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Side::North => "north",
            Side::East => "east",
            Side::South => "south",
            Side::West => "west",
        };
        f.write_str(name)
    }
}

impl Rectangle {
    /// Check if another rectangle shares part of an edge with this one.
    ///
    /// Touching at a single corner counts as adjacent.
    pub fn adjacent_to(&self, other: &Rectangle) -> bool {
        self.adjacent_side(other).is_some()
    }

    /// Find the side of this rectangle that `other` is adjacent to.
    ///
    /// First looks for an edge of `other` lying on the line of the opposite
    /// edge of `self` (north against south, east against west), then checks
    /// that the two rectangles actually meet along that line. Only the first
    /// coincident pair, in north, east, south, west order, is considered.
    pub fn adjacent_side(&self, other: &Rectangle) -> Option<Side> {
        let (side, touching) = if self.north == other.south {
            (Side::North, self.spans_overlap_horizontally(other))
        } else if self.east == other.west {
            (Side::East, self.spans_overlap_vertically(other))
        } else if self.south == other.north {
            (Side::South, self.spans_overlap_horizontally(other))
        } else if self.west == other.east {
            (Side::West, self.spans_overlap_vertically(other))
        } else {
            return None;
        };

        touching.then_some(side)
    }

    fn spans_overlap_horizontally(&self, other: &Rectangle) -> bool {
        // Not too far west, not too far east
        !(other.east < self.west) && !(other.west > self.east)
    }

    fn spans_overlap_vertically(&self, other: &Rectangle) -> bool {
        // Not too far north, not too far south
        !(other.south > self.north) && !(other.north < self.south)
    }
}
