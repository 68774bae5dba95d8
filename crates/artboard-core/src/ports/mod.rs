//! Ports to systems outside this crate

pub mod auth_provider;
pub mod report_sink;

pub use auth_provider::{AuthProvider, SignUpRequest};
pub use report_sink::ReportSink;

#[cfg(test)]
pub use auth_provider::MockAuthProvider;
#[cfg(test)]
pub use report_sink::MockReportSink;
