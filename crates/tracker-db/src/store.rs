use rusqlite::Connection;
use tracker_core::store::Store;

use crate::event_repo::EventRepo;

pub struct DbStore {
    conn: Connection,
}

impl DbStore {
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }
}

impl Store for DbStore {
    type Events<'a>
        = EventRepo<'a>
    where
        Self: 'a;

    fn events(&self) -> Self::Events<'_> {
        EventRepo::new(&self.conn)
    }
}
