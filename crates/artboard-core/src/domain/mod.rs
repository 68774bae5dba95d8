//! Domain entities

pub mod access;
pub mod gallery;
pub mod report;
pub mod session;
pub mod user;

pub use access::{AccessDecision, RoleRequirement, RouteRule, RuleTable};
pub use gallery::{GalleryAction, GuardOutcome};
pub use report::{ReportForm, ReportPayload, ReportReason};
pub use session::{AuthSession, CookieMutation, SessionCookies, SessionResolution, SignUpOutcome};
pub use user::AuthUser;
