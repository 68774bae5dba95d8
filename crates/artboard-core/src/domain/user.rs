//! Authenticated user as reported by the external auth service

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: Uuid,
    pub email: Option<String>,
    pub role: Option<String>,
}

impl AuthUser {
    pub fn new(id: Uuid, email: Option<String>, role: Option<String>) -> Self {
        Self { id, email, role }
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.role.as_deref() == Some(role)
    }
}
