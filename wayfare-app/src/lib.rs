//! Wayfare desktop application
//!
//! Iced front end over `wayfare-core`: a landing page with the destination
//! carousel and plan cards, and a community page with the post feed, tag
//! search, compose box and toasts. Modules are public so integration tests
//! can drive `update` directly.

pub mod app;
pub mod common;
pub mod domains;
pub mod infra;
pub mod state;
pub mod subscriptions;
pub mod update;
pub mod view;
