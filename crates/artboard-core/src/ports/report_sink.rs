//! Destination for accepted reports

use async_trait::async_trait;

use crate::domain::{AuthUser, ReportPayload};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReportSink: Send + Sync {
    async fn submit(&self, reporter: &AuthUser, payload: &ReportPayload) -> Result<(), DomainError>;
}
