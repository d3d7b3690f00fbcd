use utoipa::OpenApi;

use crate::routes::error::ErrorEnvelope;
use crate::routes::events::EventsQuery;
use tracker_core::types::{Event, EventPage, GeneratedUserId, PageMeta, TrackInput, UserId};

#[derive(OpenApi)]
#[openapi(
    info(title = "Tracker API"),
    paths(
        crate::routes::users::generate_user_id,
        crate::routes::events::track,
        crate::routes::events::list_events,
        crate::routes::script::tracker_js
    ),
    components(schemas(
        Event,
        EventPage,
        PageMeta,
        TrackInput,
        GeneratedUserId,
        UserId,
        EventsQuery,
        ErrorEnvelope
    ))
)]
struct ApiDoc;

pub fn generate_spec() -> String {
    ApiDoc::openapi()
        .to_pretty_json()
        .unwrap_or_else(|_| "{}".to_string())
}
