pub mod dto;
pub mod handlers;
pub mod normalize;
pub mod nutrients;
pub mod repo;
pub mod store;
pub mod trim;

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::read_routes())
}
