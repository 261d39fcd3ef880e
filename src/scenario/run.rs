use std::collections::HashSet;

use log::debug;
use rayon::prelude::*;
use serde::Serialize;

use super::{Expectation, Scenario, Section, Suite};
use crate::geometry::Point;

/// Result of evaluating a single scenario
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Outcome {
    Pass,
    Fail { reason: String },
}

impl Outcome {
    fn fail(reason: impl Into<String>) -> Self {
        Outcome::Fail {
            reason: reason.into(),
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Outcome::Pass)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScenarioResult {
    pub name: String,
    #[serde(flatten)]
    pub outcome: Outcome,
}

#[derive(Debug, Clone, Serialize)]
pub struct SectionReport {
    pub title: String,
    pub results: Vec<ScenarioResult>,
}

/// Outcomes of a whole suite, in suite order
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub suite: String,
    pub sections: Vec<SectionReport>,
}

impl Report {
    fn results(&self) -> impl Iterator<Item = &ScenarioResult> {
        self.sections.iter().flat_map(|s| &s.results)
    }

    pub fn total(&self) -> usize {
        self.results().count()
    }

    pub fn passed(&self) -> usize {
        self.results().filter(|r| r.outcome.is_pass()).count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.passed()
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }
}

impl Scenario {
    /// Run the predicate this scenario targets and compare with the
    /// expected result
    pub fn evaluate(&self) -> Outcome {
        for rect in std::iter::once(&self.base).chain(&self.other) {
            if self.expect.needs_other() && !rect.is_valid() {
                debug!("Scenario '{}' uses invalid rectangle {}", self.name, rect);
            }
        }

        match (&self.expect, self.other) {
            (Expectation::Valid(expected), _) => compare_bool(self.base.is_valid(), *expected),
            (_, None) => Outcome::fail("missing other rectangle"),
            (Expectation::Intersections(expected), Some(other)) => {
                compare_points(&self.base.find_intersections(&other), expected)
            }
            (Expectation::Contains(expected), Some(other)) => {
                compare_bool(self.base.contains(&other), *expected)
            }
            (Expectation::Adjacent(expected), Some(other)) => {
                compare_bool(self.base.adjacent_to(&other), *expected)
            }
        }
    }
}

impl Section {
    fn evaluate(&self) -> SectionReport {
        let results = self
            .scenarios
            .par_iter()
            .map(|scenario| {
                let outcome = scenario.evaluate();
                if let Outcome::Fail { reason } = &outcome {
                    debug!("{} / {}: {}", self.title, scenario.name, reason);
                }
                ScenarioResult {
                    name: scenario.name.clone(),
                    outcome,
                }
            })
            .collect();

        SectionReport {
            title: self.title.clone(),
            results,
        }
    }
}

impl Suite {
    /// Evaluate every scenario in parallel, keeping suite order in the report
    pub fn evaluate(&self) -> Report {
        Report {
            suite: self.name.clone(),
            sections: self.sections.par_iter().map(Section::evaluate).collect(),
        }
    }
}

fn compare_bool(actual: bool, expected: bool) -> Outcome {
    if actual == expected {
        Outcome::Pass
    } else {
        Outcome::fail(format!("expected {expected}, got {actual}"))
    }
}

fn compare_points(actual: &[Point], expected: &[Point]) -> Outcome {
    if actual.len() != expected.len() {
        return Outcome::fail("wrong number of intersections");
    }

    // Sets must match too, so duplicates on either side cannot pad the count
    let actual: HashSet<&Point> = actual.iter().collect();
    let expected: HashSet<&Point> = expected.iter().collect();
    if actual == expected {
        Outcome::Pass
    } else {
        Outcome::fail("improper intersection")
    }
}
