//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (validation, auth calls,
//! navigation) and delegates rendering details to `components`.

pub mod home;
pub mod login;
pub mod profile;
pub mod register;
pub mod verify_email;
