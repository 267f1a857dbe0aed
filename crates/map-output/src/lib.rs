//! `map-output` — export a loaded map and its routes for external tools.
//!
//! | Module     | Contents                                    |
//! |------------|---------------------------------------------|
//! | [`row`]    | `NodeRow`, `EdgeRow`, `RouteStepRow`        |
//! | [`csv`]    | `CsvExporter` (three CSV files)             |
//! | [`error`]  | `OutputError`, `OutputResult<T>`            |

pub mod csv;
pub mod error;
pub mod row;

#[cfg(test)]
mod tests;

pub use crate::csv::CsvExporter;
pub use error::{OutputError, OutputResult};
pub use row::{EdgeRow, NodeRow, RouteStepRow};
