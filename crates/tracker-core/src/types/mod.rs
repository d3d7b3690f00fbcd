pub mod event;
pub mod ids;
pub mod io;
pub mod timestamp;

pub use event::Event;
pub use ids::UserId;
pub use io::{EventPage, GeneratedUserId, PageMeta, TrackInput};
pub use timestamp::Timestamp;
