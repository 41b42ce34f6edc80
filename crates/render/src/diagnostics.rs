//! Diagnostic reporting
//!
//! The only condition the builder detects on its own is a descriptor
//! without a `type`. It is reported here and rendering carries on.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Something the builder noticed but did not fail on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// Descriptor at `index` within its list, `depth` levels below the
    /// render call's container, had no `type`
    MissingType { depth: usize, index: usize },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::MissingType { depth, index } => write!(
                f,
                "Element type unspecified (depth {}, index {})",
                depth, index
            ),
        }
    }
}

/// Receiver for diagnostics
pub trait DiagnosticSink {
    fn report(&self, diagnostic: &Diagnostic);
}

/// Default sink: logs through `tracing` at error level
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, diagnostic: &Diagnostic) {
        match diagnostic {
            Diagnostic::MissingType { depth, index } => {
                tracing::error!(depth, index, "Element type unspecified");
            }
        }
    }
}

/// Sink that keeps every report, for inspection after a render
#[derive(Debug, Default)]
pub struct CollectingSink {
    reports: RefCell<Vec<Diagnostic>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.reports.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.reports.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.borrow().is_empty()
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&self, diagnostic: &Diagnostic) {
        self.reports.borrow_mut().push(diagnostic.clone());
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &S {
    fn report(&self, diagnostic: &Diagnostic) {
        (**self).report(diagnostic);
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for Rc<S> {
    fn report(&self, diagnostic: &Diagnostic) {
        (**self).report(diagnostic);
    }
}
