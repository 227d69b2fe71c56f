//! Wayfare core library
//!
//! Framework-independent logic behind the desktop app: the carousel paging
//! engine, the application store with its notification center, the post
//! feed, tag autocompletion, the editor contract and plan card formatting.
//! Nothing in here touches the UI runtime; callers feed in measurements,
//! pointer positions and timestamps and render whatever state comes out.

pub mod carousel;
pub mod editor;
pub mod feed;
pub mod plans;
pub mod search;
pub mod store;

pub use carousel::{CarouselConfig, CarouselEngine, Direction, DragOutcome, Easing};
pub use editor::{EditorError, EditorSession, PlainTextEditor, RichTextEditor};
pub use feed::{FeedError, FeedState};
pub use plans::{DayCard, PlanSummary};
pub use search::{TagError, TagIndex, TagInput};
pub use store::{AppStore, NotificationCenter, Observable, StoreEvent, SubscriptionId};
