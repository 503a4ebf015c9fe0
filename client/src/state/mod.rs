//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` is application-wide and provided as context by the root
//! component. `form` is per-page and lives only as long as its page.

pub mod form;
pub mod session;
