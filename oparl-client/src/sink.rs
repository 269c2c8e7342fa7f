//! Destinations for non-fatal diagnostics.

use oparl_model::{Diagnostic, DiagnosticKind};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::warn;

/// Receives every diagnostic the engine emits.
pub trait DiagnosticSink {
    fn report(&self, diagnostic: Diagnostic);
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for Box<S> {
    fn report(&self, diagnostic: Diagnostic) {
        (**self).report(diagnostic);
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for Rc<S> {
    fn report(&self, diagnostic: Diagnostic) {
        (**self).report(diagnostic);
    }
}

/// Logs diagnostics as `tracing` warnings. The default sink.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, diagnostic: Diagnostic) {
        warn!(
            kind = %diagnostic.kind,
            subject = %diagnostic.subject,
            field = diagnostic.field.as_deref().unwrap_or(""),
            "{}",
            diagnostic.message
        );
    }
}

/// Collects diagnostics in memory.
///
/// Clones share the same buffer, so one clone can be handed to the client
/// while another is kept for inspection.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticCollector {
    inner: Rc<RefCell<Vec<Diagnostic>>>,
}

impl DiagnosticCollector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of everything collected so far.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Diagnostic> {
        self.inner.borrow().clone()
    }

    /// Drains the buffer.
    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.inner.borrow_mut())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }

    /// Number of collected diagnostics of `kind`.
    #[must_use]
    pub fn count(&self, kind: DiagnosticKind) -> usize {
        self.inner.borrow().iter().filter(|d| d.kind == kind).count()
    }
}

impl DiagnosticSink for DiagnosticCollector {
    fn report(&self, diagnostic: Diagnostic) {
        self.inner.borrow_mut().push(diagnostic);
    }
}
