//! Request middleware

pub mod route_gate;
pub mod session_cookies;

pub use route_gate::route_gate;
pub use session_cookies::propagate_session_cookies;
