use crate::AppState;
use crate::routes::error::{ErrorEnvelope, map_error};
use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use tracker_core::types::{EventPage, TrackInput};
use tracker_core::{PageRequest, TrackerError};
use utoipa::{IntoParams, ToSchema};

/// Raw paging parameters. They stay strings so that junk values fall back to
/// the defaults instead of rejecting the request.
#[derive(Debug, Default, serde::Deserialize, ToSchema, IntoParams)]
pub struct EventsQuery {
    #[param(value_type = Option<i64>)]
    #[schema(value_type = Option<i64>)]
    limit: Option<String>,
    #[param(value_type = Option<i64>)]
    #[schema(value_type = Option<i64>)]
    offset: Option<String>,
}

impl EventsQuery {
    pub fn page(&self) -> PageRequest {
        PageRequest::from_raw(self.limit.as_deref(), self.offset.as_deref())
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/track", post(track))
        .route("/events", get(list_events))
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/track",
    request_body = TrackInput,
    responses(
        (status = 200, description = "Event stored"),
        (status = 400, body = ErrorEnvelope),
        (status = 500, body = ErrorEnvelope)
    )
)]
pub(crate) async fn track(State(state): State<AppState>, body: Bytes) -> Response {
    let input = match TrackInput::from_json_slice(&body) {
        Ok(input) => input,
        Err(err) => {
            tracing::debug!(error = %err, "rejected track payload");
            return map_error(&TrackerError::from(err)).into_response();
        }
    };
    match state.run(move |tracker| tracker.events().track(&input)).await {
        Ok(_) => StatusCode::OK.into_response(),
        Err(err) => {
            tracing::error!(error = %err, "track failed");
            map_error(&err).into_response()
        }
    }
}

#[utoipa::path(
    get,
    path = "/events",
    params(EventsQuery),
    responses(
        (status = 200, body = EventPage),
        (status = 500, body = ErrorEnvelope)
    )
)]
pub(crate) async fn list_events(
    State(state): State<AppState>,
    Query(query): Query<EventsQuery>,
) -> Response {
    let page = query.page();
    match state.run(move |tracker| tracker.events().list(page)).await {
        Ok(page) => Json(page).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "list events failed");
            map_error(&err).into_response()
        }
    }
}
