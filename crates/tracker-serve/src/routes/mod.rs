pub mod error;
pub mod events;
pub mod script;
pub mod users;

use crate::AppState;
use axum::Router;

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(users::router())
        .merge(events::router(state))
        .merge(script::router())
}
