use crate::error::EventError;
use crate::types::event::Event;
use crate::types::ids::UserId;
use crate::types::timestamp::Timestamp;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of `POST /track`. Fields are taken as-is: empty strings and odd
/// timestamps are accepted as long as the JSON has this shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TrackInput {
    pub user_id: String,
    pub event: String,
    #[schema(value_type = String, format = DateTime)]
    pub timestamp: Timestamp,
}

impl TrackInput {
    pub fn from_json_slice(body: &[u8]) -> Result<Self, EventError> {
        serde_json::from_slice(body).map_err(|err| EventError::InvalidInput {
            message: err.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PageMeta {
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EventPage {
    pub events: Vec<Event>,
    pub meta: PageMeta,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedUserId {
    pub user_id: UserId,
}
