mod constants;
pub mod document;
pub mod impose;
pub mod layout;
mod options;
pub mod pdf;
mod stats;
mod types;
mod units;

pub use constants::{UNITS_PER_INCH, UNITS_PER_MM};
pub use document::{DocumentWriter, PageSizes, PageSource, SheetSink};
pub use impose::{BookletSheets, ImposeSummary, impose};
pub use options::*;
pub use pdf::{impose_document, write_booklet};
pub use stats::calculate_statistics;
pub use types::*;
pub use units::parse_units;
