//! HTTP handlers

pub mod auth;
pub mod gallery;
pub mod health;
pub mod pages;
pub mod reports;
