//! Toast rendering and expiry for the store's notification center.

pub mod messages;
pub mod update;
pub mod view;
