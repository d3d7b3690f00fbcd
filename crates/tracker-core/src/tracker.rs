use crate::error::TrackerError;
use crate::events::EventRepository;
use crate::pagination::PageRequest;
use crate::store::Store;
use crate::types::{Event, EventPage, PageMeta, TrackInput};

pub struct Tracker<S: Store> {
    store: S,
}

impl<S: Store> Tracker<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn events(&self) -> EventsApi<'_, S> {
        EventsApi { core: self }
    }
}

pub struct EventsApi<'a, S: Store> {
    core: &'a Tracker<S>,
}

impl<S: Store> EventsApi<'_, S> {
    /// Persists one event exactly as submitted; the receipt time is not recorded.
    pub fn track(&self, input: &TrackInput) -> Result<Event, TrackerError> {
        let event = self.core.store.events().insert(input)?;
        tracing::debug!(id = event.id, event = %event.event, "event tracked");
        Ok(event)
    }

    /// One page of events plus the unfiltered row count. A failure in either
    /// step fails the whole listing.
    pub fn list(&self, page: PageRequest) -> Result<EventPage, TrackerError> {
        let repo = self.core.store.events();
        let events = repo.list(page)?;
        let total = repo.count()?;
        Ok(EventPage {
            events,
            meta: PageMeta {
                total,
                limit: page.limit(),
                offset: page.offset(),
            },
        })
    }
}
