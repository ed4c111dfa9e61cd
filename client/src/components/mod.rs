//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are styled pass-through wrappers: they own class names and
//! markup, never auth state or navigation.

pub mod button;
pub mod input;
pub mod layout;
