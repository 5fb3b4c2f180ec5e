//! HTTP request handlers for the showcase.

pub mod health;
pub mod map_layout;
pub mod plot;
pub mod quick_start;
