//! IMAP Paths Core Types and Definitions
//!
//! This crate provides the fixed vocabularies and shared primitives used by
//! every IMAP filename convention. It includes:
//!
//! - **Instruments**: The set of valid instrument names ([`instrument::Instrument`])
//! - **Data levels**: The set of valid processing levels ([`data_level::DataLevel`])
//! - **Extensions**: File extensions and their pairing rules ([`extension::FileExtension`])
//! - **SPICE**: Kernel type tables and storage subdirectories ([`spice::SpiceType`])
//! - **Format grammar**: Date, day-of-year, version and repointing validators
//!   ([`time`] and [`version`] modules)

pub mod data_level;
pub mod error;
pub mod extension;
pub mod instrument;
pub mod spice;
pub mod time;
pub mod version;

pub use error::UnknownValueError;

/// The mission prefix every IMAP science and ancillary filename starts with.
pub const MISSION: &str = "imap";
