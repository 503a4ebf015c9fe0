//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure decision logic lives here so pages and components stay thin and the
//! rules can be unit tested without a browser.

pub mod auth;
pub mod validate;
