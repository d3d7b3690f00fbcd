use crate::script::tracker_script;
use axum::Router;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use std::borrow::Cow;

pub const CONTENT_TYPE: &str = "application/javascript";
const UNAVAILABLE: &str = "Could not access tracker.js";

pub fn router() -> Router {
    Router::new().route("/tracker.js", get(tracker_js))
}

#[utoipa::path(
    get,
    path = "/tracker.js",
    responses(
        (status = 200, description = "Tracking script served as application/javascript"),
        (status = 500, description = "Script unavailable")
    )
)]
pub(crate) async fn tracker_js() -> Response {
    script_response(tracker_script())
}

fn script_response(script: Option<Cow<'static, [u8]>>) -> Response {
    match script {
        Some(bytes) => ([(header::CONTENT_TYPE, CONTENT_TYPE)], bytes).into_response(),
        None => {
            tracing::error!("tracker script missing from bundle");
            (StatusCode::INTERNAL_SERVER_ERROR, UNAVAILABLE).into_response()
        }
    }
}
