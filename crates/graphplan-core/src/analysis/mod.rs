//! Static depth and complexity analysis of assembled operations, and the
//! admission limits applied to them.

mod analysis_limits;
mod complexity_config;
mod operation_metrics;

pub use analysis_limits::AnalysisLimits;
pub use complexity_config::ComplexityConfig;
pub use operation_metrics::OperationMetrics;

#[cfg(test)]
mod tests;
