pub mod error;
pub mod events;
pub mod pagination;
pub mod store;
pub mod tracker;

pub mod types;

pub use crate::error::{EventError, TrackerError};
pub use crate::pagination::PageRequest;
pub use crate::store::Store;
pub use crate::tracker::Tracker;
