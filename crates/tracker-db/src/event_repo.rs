use crate::util::decode_timestamp;
use rusqlite::Connection;
use tracker_core::error::EventError;
use tracker_core::events::EventRepository;
use tracker_core::pagination::PageRequest;
use tracker_core::types::{Event, TrackInput};

pub struct EventRepo<'a> {
    conn: &'a Connection,
}

impl<'a> EventRepo<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

impl EventRepository for EventRepo<'_> {
    fn insert(&self, input: &TrackInput) -> Result<Event, EventError> {
        let (seconds, nanos) = input.timestamp.sort_key();
        let sql = "INSERT INTO events (user_id, event, timestamp, ts_seconds, ts_nanos) VALUES (?1, ?2, ?3, ?4, ?5)";
        let params = (
            input.user_id.as_str(),
            input.event.as_str(),
            input.timestamp.as_str(),
            seconds,
            nanos,
        );
        self.conn.execute(sql, params).map_err(storage_error)?;
        Ok(Event {
            id: self.conn.last_insert_rowid(),
            user_id: input.user_id.clone(),
            event: input.event.clone(),
            timestamp: input.timestamp.clone(),
        })
    }

    fn list(&self, page: PageRequest) -> Result<Vec<Event>, EventError> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT id, user_id, event, timestamp FROM events ORDER BY ts_seconds DESC, ts_nanos DESC, id DESC LIMIT ?1 OFFSET ?2",
            )
            .map_err(storage_error)?;
        let mut rows = stmt
            .query((page.limit(), page.offset()))
            .map_err(storage_error)?;
        let mut events = Vec::new();
        while let Some(row) = rows.next().map_err(storage_error)? {
            events.push(map_event_row(row)?);
        }
        Ok(events)
    }

    fn count(&self) -> Result<i64, EventError> {
        self.conn
            .query_row("SELECT COUNT(*) FROM events", [], |row| row.get(0))
            .map_err(storage_error)
    }
}

fn storage_error(err: rusqlite::Error) -> EventError {
    EventError::Storage {
        message: err.to_string(),
    }
}

fn map_event_row(row: &rusqlite::Row<'_>) -> Result<Event, EventError> {
    let id: i64 = row.get(0).map_err(storage_error)?;
    let user_id: String = row.get(1).map_err(storage_error)?;
    let event: String = row.get(2).map_err(storage_error)?;
    let timestamp: String = row.get(3).map_err(storage_error)?;

    Ok(Event {
        id,
        user_id,
        event,
        timestamp: decode_timestamp(&timestamp).map_err(|err| EventError::Storage {
            message: err.to_string(),
        })?,
    })
}
