pub mod line_formatter;

pub use line_formatter::{BoldFormatter, ResultFormatter};
