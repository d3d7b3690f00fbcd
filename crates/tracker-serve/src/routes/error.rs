use axum::Json;
use axum::http::StatusCode;
use serde::Serialize;
use tracker_core::{EventError, TrackerError};
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorEnvelope {
    pub error: String,
}

pub fn map_error(err: &TrackerError) -> (StatusCode, Json<ErrorEnvelope>) {
    let (status, message) = match err {
        TrackerError::Event(event) => map_event_error(event),
        TrackerError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message.clone()),
    };
    (status, Json(ErrorEnvelope { error: message }))
}

fn map_event_error(err: &EventError) -> (StatusCode, String) {
    match err {
        EventError::InvalidInput { message } => (StatusCode::BAD_REQUEST, message.clone()),
        EventError::Storage { message } => (StatusCode::INTERNAL_SERVER_ERROR, message.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_errors_are_client_errors() {
        let err = TrackerError::Event(EventError::InvalidInput {
            message: "missing field `event`".to_string(),
        });
        let (status, Json(body)) = map_error(&err);
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "missing field `event`");
    }

    #[test]
    fn storage_errors_echo_message() {
        let err = TrackerError::Event(EventError::Storage {
            message: "database is locked".to_string(),
        });
        let (status, Json(body)) = map_error(&err);
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, "database is locked");

        let err = TrackerError::Internal {
            message: "storage handle poisoned".to_string(),
        };
        assert_eq!(map_error(&err).0, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
