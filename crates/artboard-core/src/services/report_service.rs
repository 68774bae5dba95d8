//! Report submission: validate first, deliver only what passed

use std::sync::Arc;

use tracing::info;

use crate::domain::{AuthUser, ReportForm, ReportPayload};
use crate::error::DomainError;
use crate::ports::ReportSink;

#[derive(Clone)]
pub struct ReportService {
    sink: Arc<dyn ReportSink>,
}

impl ReportService {
    pub fn new(sink: Arc<dyn ReportSink>) -> Self {
        Self { sink }
    }

    pub async fn submit(&self, reporter: &AuthUser, form: ReportForm) -> Result<ReportPayload, DomainError> {
        let payload = form.into_payload()?;
        self.sink.submit(reporter, &payload).await?;
        info!(
            reporter = %reporter.id,
            reason = payload.reason.as_str(),
            post_id = ?payload.post_id,
            "Report accepted"
        );
        Ok(payload)
    }
}
