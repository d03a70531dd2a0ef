//! Taranis - Security Operations Dashboard Core
//!
//! Data model and display aggregation for the Taranis threat monitoring
//! dashboard:
//! - Domain records with closed severity/status enumerations
//! - A built-in fixture catalog (no backend, no persistence)
//! - Pure aggregation functions recomputed on every render
//! - A serializable summary for headless snapshots
//!
//! # Architecture
//!
//! The crate splits into a core library and the `taranis-dash` terminal
//! binary. The library owns everything computable without a terminal:
//! - **Types**: domain records and enumerations ([`types`])
//! - **Catalog**: the immutable data snapshot ([`catalog`])
//! - **Aggregate**: count/mean/group-by/duration helpers ([`aggregate`])
//! - **Summary**: derived scalars for panels and `--snapshot` ([`summary`])
//!
//! # Example
//!
//! ```
//! use taranis_core::{Catalog, DashboardSummary};
//!
//! let catalog = Catalog::builtin();
//! let summary = DashboardSummary::compute(&catalog);
//! assert_eq!(summary.threats.critical, 1);
//! ```

pub mod aggregate;
pub mod catalog;
pub mod error;
pub mod fixtures;
pub mod summary;
pub mod types;

// Re-export commonly used types
pub use catalog::Catalog;
pub use error::{Result, TaranisError};
pub use summary::DashboardSummary;
pub use types::{
    AlertRecord, AnalysisRecord, AnalysisStatus, ChannelVolume, GeoIncidentRecord, Impact,
    IncidentRecord, IncidentStatus, IntelKind, RegionVolume, Severity, SeverityBucket, SourceKind,
    SourceRecord, SourceStatus, ThreatIntelRecord, ThreatRecord, TrendPoint,
};
