//! Services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! `gotrue` talks to the hosted auth backend; `session` maps its tokens onto
//! browser cookies. Route handlers stay focused on request/response plumbing.

pub mod gotrue;
pub mod session;
