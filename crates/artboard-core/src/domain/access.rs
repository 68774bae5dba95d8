//! Route authorization rules

use artboard_shared::config::RouteRuleSetting;
use artboard_shared::constants::{LOGIN_PATH, NOT_FOUND_PATH, ROLE_ADMIN, ROLE_USER};
use regex::Regex;

use crate::error::DomainError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleRequirement {
    /// Any resolved user.
    Authenticated,
    /// The user's role must equal this name.
    Role(String),
}

impl RoleRequirement {
    /// `user` is the baseline role every signed-in user carries.
    pub fn parse(role: &str) -> Self {
        let role = role.trim();
        if role.is_empty() || role == ROLE_USER {
            RoleRequirement::Authenticated
        } else {
            RoleRequirement::Role(role.to_string())
        }
    }
}

/// What the caller must do with a request. Ignoring a redirect is a bug.
#[must_use = "a redirect only takes effect when it is returned as the response"]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    Allow,
    Redirect(&'static str),
}

impl AccessDecision {
    pub fn login() -> Self {
        AccessDecision::Redirect(LOGIN_PATH)
    }

    pub fn not_found() -> Self {
        AccessDecision::Redirect(NOT_FOUND_PATH)
    }

    pub fn is_allowed(&self) -> bool {
        matches!(self, AccessDecision::Allow)
    }
}

#[derive(Debug, Clone)]
pub struct RouteRule {
    pattern: Regex,
    requirement: RoleRequirement,
}

impl RouteRule {
    pub fn new(pattern: &str, role: &str) -> Result<Self, DomainError> {
        let regex = Regex::new(pattern).map_err(|e| DomainError::InvalidRoutePattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self { pattern: regex, requirement: RoleRequirement::parse(role) })
    }

    pub fn matches(&self, path: &str) -> bool {
        self.pattern.is_match(path)
    }

    pub fn requirement(&self) -> &RoleRequirement {
        &self.requirement
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

/// Ordered rule list. The first matching rule decides; later rules are never consulted.
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: Vec<RouteRule>,
}

impl RuleTable {
    pub fn new(rules: Vec<RouteRule>) -> Self {
        Self { rules }
    }

    /// `/admin` needs the admin role, `/dashboard` any signed-in user.
    pub fn default_rules() -> Self {
        Self {
            rules: vec![
                RouteRule {
                    pattern: Regex::new(r"^/admin").expect("static pattern"),
                    requirement: RoleRequirement::Role(ROLE_ADMIN.to_string()),
                },
                RouteRule {
                    pattern: Regex::new(r"^/dashboard").expect("static pattern"),
                    requirement: RoleRequirement::Authenticated,
                },
            ],
        }
    }

    /// Builds the table from config; an empty list keeps the defaults.
    pub fn from_settings(settings: &[RouteRuleSetting]) -> Result<Self, DomainError> {
        if settings.is_empty() {
            return Ok(Self::default_rules());
        }
        let rules = settings
            .iter()
            .map(|s| RouteRule::new(&s.pattern, &s.role))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rules })
    }

    pub fn find(&self, path: &str) -> Option<&RouteRule> {
        self.rules.iter().find(|rule| rule.matches(path))
    }

    pub fn requirement_for(&self, path: &str) -> Option<&RoleRequirement> {
        self.find(path).map(RouteRule::requirement)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::default_rules()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_role_means_authenticated() {
        assert_eq!(RoleRequirement::parse("user"), RoleRequirement::Authenticated);
        assert_eq!(RoleRequirement::parse(""), RoleRequirement::Authenticated);
        assert_eq!(RoleRequirement::parse("admin"), RoleRequirement::Role("admin".into()));
    }

    #[test]
    fn default_table_matches_prefixes() {
        let table = RuleTable::default_rules();
        assert_eq!(
            table.requirement_for("/admin/users"),
            Some(&RoleRequirement::Role("admin".into()))
        );
        assert_eq!(table.requirement_for("/dashboard"), Some(&RoleRequirement::Authenticated));
        assert_eq!(table.requirement_for("/gallery"), None);
        assert_eq!(table.requirement_for("/about/admin"), None);
    }

    #[test]
    fn first_match_wins() {
        let table = RuleTable::new(vec![
            RouteRule::new("^/dashboard/settings", "admin").unwrap(),
            RouteRule::new("^/dashboard", "user").unwrap(),
        ]);
        assert_eq!(
            table.requirement_for("/dashboard/settings/profile"),
            Some(&RoleRequirement::Role("admin".into()))
        );
        assert_eq!(table.requirement_for("/dashboard/feed"), Some(&RoleRequirement::Authenticated));
    }

    #[test]
    fn settings_replace_defaults() {
        let table = RuleTable::from_settings(&[RouteRuleSetting {
            pattern: "^/gallery/upload".into(),
            role: "user".into(),
        }])
        .unwrap();
        assert_eq!(table.len(), 1);
        assert!(table.find("/admin").is_none());
        assert!(table.find("/gallery/upload").is_some());
    }

    #[test]
    fn invalid_pattern_is_reported() {
        let err = RuleTable::from_settings(&[RouteRuleSetting {
            pattern: "^/(unclosed".into(),
            role: "admin".into(),
        }])
        .unwrap_err();
        assert!(matches!(err, DomainError::InvalidRoutePattern { .. }));
    }
}
