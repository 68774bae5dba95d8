//! # Artboard Shared
//! 
//! Configuration, telemetry, and constants shared by every Artboard crate.

pub mod constants;
pub mod utils;
pub mod telemetry;
pub mod config;
pub mod error;

pub use config::{AppConfig, CookieSettings, SameSite};
pub use error::AppError;
