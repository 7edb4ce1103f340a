// Presentation layer: the fixed pickers and the two-column holiday table.

pub mod months;
pub mod table;

pub use months::{month_name, parse_month, MONTHS, YEARS};
pub use table::{render, render_heading, OutputFormat};
