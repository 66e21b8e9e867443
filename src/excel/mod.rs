//! Excel workbook reading
//!
//! - Converter: Excel (.xlsx) → one CSV file per worksheet
//! - Cell rendering: cached cell values → display text

mod cell;
mod converter;

pub use cell::render_cell;
pub use converter::WorkbookConverter;
