//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep routing rules and form validation out of page code so
//! they can be tested without a browser.

pub mod auth;
pub mod validation;
