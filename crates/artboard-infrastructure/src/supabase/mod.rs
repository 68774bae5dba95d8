//! Client for the hosted (GoTrue compatible) auth API

mod client;
mod models;

pub use client::SupabaseAuthClient;
