//! Networking modules for the workshop REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the per-endpoint operations, `http` is the transport seam,
//! `session` holds the bearer credential, and `types` defines the wire schema.

pub mod api;
pub mod http;
pub mod session;
pub mod types;
