//! # Artboard Infrastructure
//! 
//! Adapters for the core ports: the hosted auth service client and the report sink.

pub mod reports;
pub mod supabase;

pub use reports::TracingReportSink;
pub use supabase::SupabaseAuthClient;
