//! Artwork infringement reports

use serde::{Deserialize, Serialize};

use crate::error::ReportError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportReason {
    #[default]
    Copyright,
    Spam,
    Harassment,
    Nudity,
    Violence,
    Hate,
    Other,
}

impl ReportReason {
    pub const ALL: [ReportReason; 7] = [
        ReportReason::Copyright,
        ReportReason::Spam,
        ReportReason::Harassment,
        ReportReason::Nudity,
        ReportReason::Violence,
        ReportReason::Hate,
        ReportReason::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportReason::Copyright => "copyright",
            ReportReason::Spam => "spam",
            ReportReason::Harassment => "harassment",
            ReportReason::Nudity => "nudity",
            ReportReason::Violence => "violence",
            ReportReason::Hate => "hate",
            ReportReason::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReportReason::Copyright => "Copyright / Stolen artwork",
            ReportReason::Spam => "Spam or misleading",
            ReportReason::Harassment => "Harassment or bullying",
            ReportReason::Nudity => "Nudity / sexual content",
            ReportReason::Violence => "Violence or gore",
            ReportReason::Hate => "Hate or abuse",
            ReportReason::Other => "Other",
        }
    }

    /// Copyright claims need proof and "other" needs a description.
    pub fn needs_context(&self) -> bool {
        matches!(self, ReportReason::Copyright | ReportReason::Other)
    }

    pub fn missing_context_message(&self) -> &'static str {
        match self {
            ReportReason::Copyright => {
                "Please provide the original source / link or explain why you believe it’s stolen."
            }
            _ => "Please describe the issue.",
        }
    }
}

/// Report form exactly as the user filled it in.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportForm {
    #[serde(default)]
    pub post_id: Option<String>,
    #[serde(default)]
    pub reason: ReportReason,
    #[serde(default)]
    pub details: String,
    #[serde(default)]
    pub context: String,
}

/// Normalized report. Absent optional fields are never serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_id: Option<String>,
    pub reason: ReportReason,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

impl ReportForm {
    pub fn validate(&self) -> Result<(), ReportError> {
        if self.reason.needs_context() && self.context.trim().is_empty() {
            return Err(ReportError::MissingContext(self.reason));
        }
        Ok(())
    }

    pub fn into_payload(self) -> Result<ReportPayload, ReportError> {
        self.validate()?;
        let context = if self.reason.needs_context() { non_blank(&self.context) } else { None };
        Ok(ReportPayload {
            post_id: self.post_id.as_deref().and_then(non_blank),
            reason: self.reason,
            details: non_blank(&self.details),
            context,
        })
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
