//! Diagnostic sink for soft configuration failures
//!
//! Level 4 - Utilities

/// Receives informational messages the configurator wants surfaced
pub trait DiagnosticSink {
    fn info(&self, message: &str);
}

/// Forwards diagnostics to `tracing` at info level
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn info(&self, message: &str) {
        tracing::info!("{}", message);
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &S {
    fn info(&self, message: &str) {
        (**self).info(message);
    }
}
