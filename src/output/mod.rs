mod format;
mod json;
mod text;

pub use format::write_report;
pub use json::write_json;
pub use text::write_text;
