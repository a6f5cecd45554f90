pub mod convergence;
pub mod discoverer;
pub mod exporter;
pub mod extractor;
pub mod field_table;
pub mod selectors;

pub use convergence::{compare, ConvergenceState, Decision, StopReason, TargetCount};
pub use discoverer::{Discoverer, Discovery};
pub use exporter::{ExportFormat, Exporter};
pub use extractor::Extractor;
