//! Normalization core: raw delimited records into typed product rows.
//!
//! Each field parser is independent and total — malformed input yields an
//! absent value, never an error. The line assembler centralizes the
//! reject/anomaly policy and reports through an injected
//! [`diag::DiagnosticSink`], so the parsers stay unit-testable without any
//! global logger setup.

pub mod diag;
pub mod line;
pub mod price;
pub mod rating;
pub mod reader;
pub mod stock;

pub use diag::{Diagnostic, DiagnosticSink, Severity, TracingSink};
pub use line::assemble;
pub use reader::read_products;
