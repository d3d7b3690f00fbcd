use axum::Json;
use axum::Router;
use axum::routing::get;
use tracker_core::types::{GeneratedUserId, UserId};

pub fn router() -> Router {
    Router::new().route("/generate-user-id", get(generate_user_id))
}

#[utoipa::path(
    get,
    path = "/generate-user-id",
    responses((status = 200, body = GeneratedUserId))
)]
pub(crate) async fn generate_user_id() -> Json<GeneratedUserId> {
    Json(GeneratedUserId {
        user_id: UserId::generate(),
    })
}
