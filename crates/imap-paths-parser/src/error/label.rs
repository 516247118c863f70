//! Labeled filename spans for diagnostic messages.

use crate::span::Span;

/// A message attached to one field of a filename.
///
/// A primary label marks the field that broke the rule. Secondary labels
/// point at related fields, e.g. the start date when the end date precedes it.
///
/// ```text
/// warning[E111]: end date precedes start date
///   imap_mag_calibration_20250201_20250101_v001.cdf
///                        -------- start
///                                 ^^^^^^^^ ends before it starts
/// ```
#[derive(Debug, Clone)]
pub struct Label {
    span: Span,
    message: String,
    is_primary: bool,
}

impl Label {
    /// Label the offending field.
    pub fn primary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            is_primary: true,
        }
    }

    /// Label a field that gives context.
    pub fn secondary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            is_primary: false,
        }
    }

    /// Get the span this label applies to.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Get the label message.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_primary(&self) -> bool {
        self.is_primary
    }

    pub fn is_secondary(&self) -> bool {
        !self.is_primary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_label() {
        let label = Label::primary(Span::new(5..8), "not an IMAP instrument");

        assert_eq!(label.span(), Span::new(5..8));
        assert_eq!(label.message(), "not an IMAP instrument");
        assert!(label.is_primary());
        assert!(!label.is_secondary());
    }

    #[test]
    fn test_secondary_label() {
        let label = Label::secondary(Span::new(21..29), "start");

        assert_eq!(label.span().len(), 8);
        assert!(label.is_secondary());
    }
}
