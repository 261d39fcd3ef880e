mod builtin;
mod load;
mod run;
mod save;
mod types;

pub use builtin::builtin_suite;
pub use load::{LoadedSuite, load_suites};
pub use run::{Outcome, Report, ScenarioResult, SectionReport};
pub use save::save_suite;
pub use types::{Expectation, SUITE_VERSION, Scenario, Section, Suite};
