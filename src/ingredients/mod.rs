pub mod dto;
pub mod handlers;
mod repo;
pub mod repo_types;

use crate::state::AppState;
use axum::Router;

pub use repo_types::Ingredient;

pub fn router() -> Router<AppState> {
    handlers::routes()
}
