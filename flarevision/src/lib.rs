//! # Flarevision - searchable HTML reports from Flare CSV exports
//!
//! Reads a CSV export, keeps the columns useful for triage, splits rows by
//! `category_name` and writes one static HTML page with a live filter box.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   CSV File  │────▶│   Parser    │────▶│  Transform  │────▶│  HTML page  │
//! │  (export)   │     │ (text only) │     │ (project +  │     │ (one table  │
//! │             │     │             │     │   group)    │     │  per group) │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use flarevision::{generate_report, ConsoleReporter, ReportConfig};
//!
//! fn main() {
//!     let summary = generate_report(&ReportConfig::new("export.csv"), &ConsoleReporter).unwrap();
//!     println!("{} rows in {} sections", summary.row_count, summary.group_count);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types per stage
//! - [`models`] - Table, Dataset, Row, Group
//! - [`config`] - Run configuration
//! - [`logs`] - Progress reporting
//! - [`parser`] - CSV loading
//! - [`transform`] - Projection, grouping and the pipeline driver
//! - [`render`] - HTML document generation

// Core modules
pub mod config;
pub mod error;
pub mod logs;
pub mod models;

// Stages
pub mod parser;
pub mod render;
pub mod transform;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{InputError, RenderError, ReportError, ReportResult, SchemaError};

// =============================================================================
// Re-exports - Models and configuration
// =============================================================================

pub use config::{Encoding, LoadOptions, RenderOptions, ReportConfig};
pub use models::{
    Dataset, Group, GroupedReport, ReportSummary, Row, Table, CATEGORY_COLUMN, REQUIRED_COLUMNS,
    UNCATEGORIZED,
};

// =============================================================================
// Re-exports - Logging
// =============================================================================

pub use logs::{
    ConsoleReporter, JsonReporter, LogEntry, LogLevel, MemoryReporter, Reporter, SilentReporter,
};

// =============================================================================
// Re-exports - Stages
// =============================================================================

pub use parser::{load_csv_file, parse_bytes, parse_str};
pub use render::{render_document, write_report};
pub use transform::{derive_output_path, generate_report, prepare};
