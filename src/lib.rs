pub mod cli;
pub mod error;
pub mod geometry;
pub mod output;
pub mod scenario;

pub use cli::{CliArgs, Command, ReportFormat};
pub use error::EdgewiseError;
pub use geometry::{Point, Rectangle, Side};
pub use scenario::{Report, Suite};
