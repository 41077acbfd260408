//! The side channel for document-level failures.
//!
//! `save` and `load` never return errors. When a whole document cannot be
//! written or read, a [`Report`] is handed to the mapper's [`Reporter`] and the
//! call returns normally. Per-property problems are never reported.

use core::fmt;
use std::path::Path;

use crate::DocumentError;

// -----------------------------------------------------------------------------
// Report

/// The operation that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Load,
    Save,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Load => f.write_str("load"),
            Self::Save => f.write_str("save"),
        }
    }
}

/// How much a failure matters to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// The caller keeps a usable instance with its previous values.
    Warning,
    /// The caller asked for data to be persisted and it was not.
    Severe,
}

/// One document-level failure.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    pub operation: Operation,
    pub path: &'a Path,
    pub error: &'a DocumentError,
}

impl<'a> Report<'a> {
    #[inline]
    pub const fn new(operation: Operation, path: &'a Path, error: &'a DocumentError) -> Self {
        Self {
            operation,
            path,
            error,
        }
    }

    /// Load failures are recoverable, save failures are not.
    #[inline]
    pub const fn severity(&self) -> Severity {
        match self.operation {
            Operation::Load => Severity::Warning,
            Operation::Save => Severity::Severe,
        }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "failed to {} properties at `{}`: {}",
            self.operation,
            self.path.display(),
            self.error
        )
    }
}

// -----------------------------------------------------------------------------
// Reporter

/// Receives document-level failures.
///
/// Any `Fn(&Report)` closure is a reporter:
///
/// ```
/// use std::sync::{Arc, Mutex};
/// use vc_marshal::PropertyMapper;
/// use vc_marshal::report::Report;
///
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let sink = seen.clone();
/// let mapper = PropertyMapper::new("settings.xml")
///     .with_reporter(move |report: &Report<'_>| sink.lock().unwrap().push(report.to_string()));
/// ```
pub trait Reporter: Send + Sync {
    fn report(&self, report: &Report<'_>);
}

impl<F> Reporter for F
where
    F: Fn(&Report<'_>) + Send + Sync,
{
    #[inline]
    fn report(&self, report: &Report<'_>) {
        self(report)
    }
}

/// Forwards reports to the `log` facade: `warn` for loads, `error` for saves.
///
/// The default reporter of a [`PropertyMapper`](crate::PropertyMapper).
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn report(&self, report: &Report<'_>) {
        match report.severity() {
            Severity::Warning => log::warn!("{report}"),
            Severity::Severe => log::error!("{report}"),
        }
    }
}

/// Drops every report.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopReporter;

impl Reporter for NoopReporter {
    #[inline(always)]
    fn report(&self, _: &Report<'_>) {}
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::{Operation, Report, Severity};
    use crate::DocumentError;

    #[test]
    fn severity_follows_operation() {
        let error = DocumentError::MissingRoot;
        let path = Path::new("settings.xml");

        let load = Report::new(Operation::Load, path, &error);
        assert_eq!(load.severity(), Severity::Warning);

        let save = Report::new(Operation::Save, path, &error);
        assert_eq!(save.severity(), Severity::Severe);
        assert_eq!(
            save.to_string(),
            "failed to save properties at `settings.xml`: document has no root element"
        );
    }
}
