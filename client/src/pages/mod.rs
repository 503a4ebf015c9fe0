//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (form submission, redirects)
//! and delegates rendering details to `components`.

pub mod home;
pub mod login;
pub mod product_detail;
pub mod register;
