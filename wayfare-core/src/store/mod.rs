//! Application store
//!
//! Explicit application state with a defined lifecycle instead of ambient
//! global atoms. [`Observable`] is the generic publish-on-mutation cell;
//! [`AppStore`] owns the session and the notification center and publishes
//! a [`StoreEvent`] for every mutation it performs.

pub mod app;
pub mod notifications;
pub mod observable;

pub use app::{AppState, AppStore, Session, StoreEvent};
pub use notifications::NotificationCenter;
pub use observable::{Observable, Subscribers, SubscriptionId};
