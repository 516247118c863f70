//! Whether a diagnostic rejects the filename.

use std::fmt;

/// How serious a diagnostic is. Only errors reject a filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// A violated naming rule.
    ///
    /// The filename does not follow the convention it was checked against.
    Error,

    /// A suspicious but permitted filename.
    ///
    /// For example an ancillary file whose end date precedes its start date.
    Warning,
}

impl Severity {
    pub fn is_error(&self) -> bool {
        matches!(self, Severity::Error)
    }

    pub fn is_warning(&self) -> bool {
        matches!(self, Severity::Warning)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        })
    }
}
