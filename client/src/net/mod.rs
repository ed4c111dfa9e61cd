//! Networking modules for the `/api/auth` REST surface.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the browser-side HTTP calls and `types` defines the JSON
//! schema shared with the server crate.

pub mod api;
pub mod types;
