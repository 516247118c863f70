//! Error and diagnostic system for IMAP filename parsing.
//!
//! This module provides an error handling system with:
//! - Error codes for documentation and searchability
//! - Labeled spans pointing at the offending filename fields
//! - Severity levels
//! - Diagnostic collector for accumulating every violation of a filename
//!
//! # Overview
//!
//! The error system is built around the [`Diagnostic`] type, which represents
//! a single violated rule with an optional error code, labeled locations in the
//! filename, and help text. All diagnostics found while checking one filename
//! against one convention are wrapped in a [`ParseError`], whose
//! [`ParseErrorKind`] names the convention (or the dispatcher) that rejected it.
//!
//! # Example
//!
//! ```
//! # use imap_paths_parser::error::{Diagnostic, ErrorCode};
//! # use imap_paths_parser::Span;
//!
//! // "imap_sdc_l1a_burst_20210101_v001.cdf"
//! let diag = Diagnostic::error("invalid instrument `sdc`")
//!     .with_code(ErrorCode::E101)
//!     .with_label(Span::new(5..8), "not an IMAP instrument")
//!     .with_help("choose one of: codice, glows, hi, hit, idex, lo, mag, swapi, swe, ultra");
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod label;
mod parse_error;
mod severity;

pub(crate) use collector::DiagnosticCollector;
pub(crate) use parse_error::Result;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::{ParseError, ParseErrorKind};
pub use severity::Severity;
