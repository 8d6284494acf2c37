//! Exporters for normalized product batches.
//!
//! Two independent, side-effect-only writers over the same ordered slice:
//! row-oriented CSV and document-oriented JSON. Each returns its own
//! `Result` to its caller; a failure in one never blocks the other (the
//! caller decides whether to keep going).

pub mod docs;
pub mod rows;

pub use docs::write_json;
pub use rows::write_csv;
