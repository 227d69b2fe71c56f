//! Feature domains. Each owns its state slice, messages, update handler
//! and view.

pub mod carousel;
pub mod compose;
pub mod feed;
pub mod notifications;
pub mod plans;
pub mod search;
