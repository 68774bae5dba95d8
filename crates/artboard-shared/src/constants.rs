//! Application-wide constants

pub const DEFAULT_APP_NAME: &str = "artboard-server";

pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
pub const DASHBOARD_PATH: &str = "/dashboard";
pub const NOT_FOUND_PATH: &str = "/404";
pub const AUTH_CALLBACK_PATH: &str = "/auth/callback";

pub const ROLE_ADMIN: &str = "admin";
/// Rule role that any signed-in user satisfies.
pub const ROLE_USER: &str = "user";

pub const ACCESS_TOKEN_COOKIE_SUFFIX: &str = "access-token";
pub const REFRESH_TOKEN_COOKIE_SUFFIX: &str = "refresh-token";
pub const CODE_VERIFIER_COOKIE_SUFFIX: &str = "code-verifier";

pub const DEFAULT_COOKIE_PREFIX: &str = "sb";
/// 400 days, the ceiling browsers accept for cookie lifetimes.
pub const DEFAULT_COOKIE_MAX_AGE: i64 = 400 * 24 * 60 * 60;
pub const DEFAULT_AUTH_TIMEOUT_SECONDS: u64 = 10;
