pub mod date;
pub mod formatting;
pub mod path;

pub use formatting::{format_hours, format_hours_with_suffix};
