//! The single allow/redirect decision shared by the route gate and the page gate

use tracing::debug;

use crate::domain::{AccessDecision, AuthUser, RoleRequirement};

/// `None` requirement means the path is not protected.
pub fn decide_access(requirement: Option<&RoleRequirement>, user: Option<&AuthUser>) -> AccessDecision {
    let Some(requirement) = requirement else {
        return AccessDecision::Allow;
    };

    let Some(user) = user else {
        debug!("No session for protected path");
        return AccessDecision::login();
    };

    match requirement {
        RoleRequirement::Authenticated => AccessDecision::Allow,
        RoleRequirement::Role(role) if user.has_role(role) => AccessDecision::Allow,
        RoleRequirement::Role(role) => {
            debug!(user_id = %user.id, required = %role, actual = ?user.role, "Role mismatch");
            AccessDecision::not_found()
        }
    }
}
