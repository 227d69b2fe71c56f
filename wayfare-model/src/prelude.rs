//! Convenience re-exports for crates that touch most of the model.

pub use crate::destination::Destination;
pub use crate::error::ModelError;
pub use crate::ids::{NotificationId, PlanId, PostId, UserId};
pub use crate::notification::{Notification, NotificationKind};
pub use crate::plan::{Activity, DayPlan, TravelPlan};
pub use crate::post::{Author, Comment, Post};
pub use crate::tag::Tag;
