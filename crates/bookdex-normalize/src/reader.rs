use std::fs;
use std::panic;
use std::path::Path;

use bookdex_model::Product;

use crate::diag::{Diagnostic, DiagnosticSink};
use crate::line;

/// Read the raw source file and return every successfully assembled
/// [`Product`], in input line order.
///
/// A missing or unreadable source degrades to an empty batch with a
/// [`Diagnostic::SourceUnavailable`] — no error propagates to the caller.
/// A panic while assembling one line is caught and reported as a
/// [`Diagnostic::LineFailure`] for that line only; the batch continues.
pub fn read_products(path: &Path, diag: &mut dyn DiagnosticSink) -> Vec<Product> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            diag.emit(Diagnostic::SourceUnavailable {
                path: path.display().to_string(),
                detail: e.to_string(),
            });
            return Vec::new();
        }
    };

    let mut products = Vec::new();
    for (i, raw_line) in contents.lines().enumerate() {
        let line_no = i + 1;

        // One line's fault must never abort the batch. Diagnostics are
        // buffered inside the unwind boundary and forwarded afterwards.
        let outcome = panic::catch_unwind(|| {
            let mut events: Vec<Diagnostic> = Vec::new();
            let product = line::assemble(raw_line, line_no, &mut events);
            (product, events)
        });

        match outcome {
            Ok((product, events)) => {
                for event in events {
                    diag.emit(event);
                }
                if let Some(product) = product {
                    products.push(product);
                }
            }
            Err(payload) => {
                diag.emit(Diagnostic::LineFailure {
                    line_no,
                    raw: raw_line.to_string(),
                    detail: panic_detail(payload),
                });
            }
        }
    }

    products
}

fn panic_detail(payload: Box<dyn std::any::Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
