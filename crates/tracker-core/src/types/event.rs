use crate::types::timestamp::Timestamp;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One recorded interaction. Rows are append-only; `id` is assigned by storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: i64,
    pub user_id: String,
    pub event: String,
    /// Echoed exactly as submitted.
    #[schema(value_type = String, format = DateTime)]
    pub timestamp: Timestamp,
}
