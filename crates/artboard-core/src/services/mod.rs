//! Domain services (business logic)

pub mod access_policy;
pub mod auth_service;
pub mod pkce;
pub mod report_service;
pub mod session_resolver;

pub use access_policy::decide_access;
pub use auth_service::{AuthService, CallbackOutcome, LoginResult, RegisterResult};
pub use pkce::PkcePair;
pub use report_service::ReportService;
pub use session_resolver::SessionResolver;
