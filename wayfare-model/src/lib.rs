//! Core data model definitions shared across Wayfare crates.
#![allow(missing_docs)]

pub mod destination;
pub mod error;
pub mod ids;
pub mod notification;
pub mod plan;
pub mod post;
pub mod prelude;
pub mod tag;

// Intentionally curated re-exports for downstream consumers.
pub use destination::Destination;
pub use error::{ModelError, Result as ModelResult};
pub use ids::{NotificationId, PlanId, PostId, UserId};
pub use notification::{Notification, NotificationKind};
pub use plan::{Activity, DayPlan, TravelPlan};
pub use post::{Author, Comment, Post};
pub use tag::Tag;
