use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Rectangle};

/// Current suite file format version
pub const SUITE_VERSION: u32 = 1;

/// What a scenario expects the predicate under test to return.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Expectation {
    /// Points where the base's edges cross the other's, in any order
    Intersections(Vec<Point>),
    /// Whether the base contains the other
    Contains(bool),
    /// Whether the other is adjacent to the base
    Adjacent(bool),
    /// Whether the base is a well-formed rectangle (no other needed)
    Valid(bool),
}

impl Expectation {
    /// Returns true if evaluating this expectation needs a second rectangle
    pub fn needs_other(&self) -> bool {
        !matches!(self, Expectation::Valid(_))
    }
}

/// A single fixture: a base rectangle, an optional second rectangle and the
/// expected result of one predicate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    pub name: String,
    pub base: Rectangle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other: Option<Rectangle>,
    pub expect: Expectation,
}

impl Scenario {
    pub fn new(
        name: impl Into<String>,
        base: Rectangle,
        other: Rectangle,
        expect: Expectation,
    ) -> Self {
        Self {
            name: name.into(),
            base,
            other: Some(other),
            expect,
        }
    }

    /// Scenario that only checks the validity of `base`
    pub fn validity(name: impl Into<String>, base: Rectangle, expected: bool) -> Self {
        Self {
            name: name.into(),
            base,
            other: None,
            expect: Expectation::Valid(expected),
        }
    }
}

/// A titled group of scenarios, reported together.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Section {
    pub title: String,
    pub scenarios: Vec<Scenario>,
}

/// Scenario suite file structure.
///
/// Include paths are relative to the suite file location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Suite {
    /// Suite file version (currently 1)
    pub version: u32,
    /// Display name used in reports
    pub name: String,
    /// Other suite files or glob patterns whose sections are appended
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub include: Vec<String>,
    pub sections: Vec<Section>,
}

impl Default for Suite {
    fn default() -> Self {
        Self {
            version: SUITE_VERSION,
            name: String::new(),
            include: Vec::new(),
            sections: Vec::new(),
        }
    }
}

impl Suite {
    pub fn scenario_count(&self) -> usize {
        self.sections.iter().map(|s| s.scenarios.len()).sum()
    }

    /// Find the first scenario that lacks a rectangle its expectation needs
    pub fn first_missing_other(&self) -> Option<&Scenario> {
        self.sections
            .iter()
            .flat_map(|s| &s.scenarios)
            .find(|sc| sc.other.is_none() && sc.expect.needs_other())
    }
}
