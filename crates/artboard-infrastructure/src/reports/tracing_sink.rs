use artboard_core::ports::ReportSink;
use artboard_core::{AuthUser, DomainError, ReportPayload};
use artboard_shared::utils::mask_email;
use async_trait::async_trait;
use tracing::info;

/// Writes accepted reports to the structured log under the `artboard::reports` target.
///
/// Reports are stored by the hosted backend, not here; the log line is the
/// hand-off record moderators pick up.
#[derive(Debug, Clone, Default)]
pub struct TracingReportSink;

#[async_trait]
impl ReportSink for TracingReportSink {
    async fn submit(&self, reporter: &AuthUser, payload: &ReportPayload) -> Result<(), DomainError> {
        let body = serde_json::to_string(payload)
            .map_err(|e| DomainError::ReportDelivery(e.to_string()))?;
        info!(
            target: "artboard::reports",
            reporter = %reporter.id,
            reporter_email = %reporter_email(reporter),
            report = %body,
            "Report submitted"
        );
        Ok(())
    }
}

fn reporter_email(reporter: &AuthUser) -> String {
    reporter.email.as_deref().map(mask_email).unwrap_or_default()
}
