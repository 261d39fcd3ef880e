use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An axis-aligned rectangle described by its four boundary lines.
///
/// `north` and `south` are the y-coordinates of the horizontal edges, `east`
/// and `west` the x-coordinates of the vertical edges. Construction never
/// checks orientation; use [`Rectangle::is_valid`] when that matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rectangle {
    pub(super) north: i32,
    pub(super) east: i32,
    pub(super) south: i32,
    pub(super) west: i32,
}

impl Rectangle {
    pub fn new(north: i32, east: i32, south: i32, west: i32) -> Self {
        Self {
            north,
            east,
            south,
            west,
        }
    }

    pub fn north(&self) -> i32 {
        self.north
    }

    pub fn east(&self) -> i32 {
        self.east
    }

    pub fn south(&self) -> i32 {
        self.south
    }

    pub fn west(&self) -> i32 {
        self.west
    }

    /// Returns true if the rectangle has positive area and its edges are
    /// not inverted (north above south, east right of west)
    pub fn is_valid(&self) -> bool {
        self.north > self.south && self.east > self.west
    }

    /// Check if this rectangle fully contains another.
    ///
    /// Shared boundaries count as contained.
    pub fn contains(&self, other: &Rectangle) -> bool {
        self.north >= other.north
            && self.east >= other.east
            && self.south <= other.south
            && self.west <= other.west
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[N={}, E={}, S={}, W={}]",
            self.north, self.east, self.south, self.west
        )
    }
}

impl From<[i32; 4]> for Rectangle {
    fn from([north, east, south, west]: [i32; 4]) -> Self {
        Self::new(north, east, south, west)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseRectangleError {
    #[error("expected 4 comma-separated edges (north,east,south,west), got {0}")]
    EdgeCount(usize),

    #[error("invalid {edge} edge '{value}'")]
    InvalidEdge { edge: &'static str, value: String },
}

const EDGE_NAMES: [&str; 4] = ["north", "east", "south", "west"];

/// Parses `north,east,south,west`, e.g. `10,10,5,5`
impl FromStr for Rectangle {
    type Err = ParseRectangleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 4 {
            return Err(ParseRectangleError::EdgeCount(parts.len()));
        }

        let mut edges = [0i32; 4];
        for ((edge, part), name) in edges.iter_mut().zip(&parts).zip(EDGE_NAMES) {
            *edge = part
                .parse()
                .map_err(|_e| ParseRectangleError::InvalidEdge {
                    edge: name,
                    value: (*part).to_string(),
                })?;
        }

        Ok(Self::from(edges))
    }
}
