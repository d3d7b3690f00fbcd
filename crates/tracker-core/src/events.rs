use crate::error::EventError;
use crate::pagination::PageRequest;
use crate::types::{Event, TrackInput};

pub trait EventRepository {
    fn insert(&self, input: &TrackInput) -> Result<Event, EventError>;
    /// Newest first by `timestamp`.
    fn list(&self, page: PageRequest) -> Result<Vec<Event>, EventError>;
    fn count(&self) -> Result<i64, EventError>;
}
