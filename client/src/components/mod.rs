//! Reusable view components.

pub mod field_input;
pub mod footer;
pub mod header;
pub mod listing_card;
pub mod require_session;
pub mod submit_button;
