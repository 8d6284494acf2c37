use thiserror::Error;

/// One reportable event from the normalization pipeline.
///
/// Structural rejects drop the whole line, anomalies leave the record in
/// place with the offending field absent, and source/line failures degrade
/// the batch without aborting it. The raw content travels with each event
/// so a single log line is enough to reproduce the decision.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Diagnostic {
    /// Line did not split into exactly four fields.
    #[error("line {line_no}: expected 4 fields, found {found} | {raw:?}")]
    FieldCount {
        line_no: usize,
        found: usize,
        raw: String,
    },

    /// Title field was empty after trimming.
    #[error("line {line_no}: empty title | {raw:?}")]
    EmptyTitle { line_no: usize, raw: String },

    /// Non-empty price text that did not parse as a decimal.
    #[error("line {line_no}: unparseable price | value={value:?}")]
    BadPrice { line_no: usize, value: String },

    /// Non-empty rating word outside the recognized mapping.
    #[error("line {line_no}: unknown rating word | value={value:?}")]
    UnknownRating { line_no: usize, value: String },

    /// Assembling one line panicked; that line is skipped.
    #[error("line {line_no}: assembly failed: {detail} | {raw:?}")]
    LineFailure {
        line_no: usize,
        raw: String,
        detail: String,
    },

    /// The input file is missing or unreadable.
    #[error("cannot read input {path}: {detail}")]
    SourceUnavailable { path: String, detail: String },
}

/// How a sink should report a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

impl Diagnostic {
    pub fn severity(&self) -> Severity {
        match self {
            Diagnostic::FieldCount { .. }
            | Diagnostic::EmptyTitle { .. }
            | Diagnostic::BadPrice { .. }
            | Diagnostic::UnknownRating { .. } => Severity::Warning,
            Diagnostic::LineFailure { .. } | Diagnostic::SourceUnavailable { .. } => {
                Severity::Error
            }
        }
    }

    /// True when the event dropped its whole line (as opposed to an
    /// anomaly on a record that was still produced).
    pub fn is_reject(&self) -> bool {
        matches!(
            self,
            Diagnostic::FieldCount { .. }
                | Diagnostic::EmptyTitle { .. }
                | Diagnostic::LineFailure { .. }
        )
    }
}

/// Receives diagnostics from the assembler and the batch reader.
pub trait DiagnosticSink {
    fn emit(&mut self, event: Diagnostic);
}

/// Forwards diagnostics to the active tracing subscriber.
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&mut self, event: Diagnostic) {
        match event.severity() {
            Severity::Warning => tracing::warn!("{event}"),
            Severity::Error => tracing::error!("{event}"),
        }
    }
}

/// Collecting sink for tests and callers that inspect events afterwards.
impl DiagnosticSink for Vec<Diagnostic> {
    fn emit(&mut self, event: Diagnostic) {
        self.push(event);
    }
}
