pub mod dto;
pub mod handlers;
pub(crate) mod repo;
pub mod repo_types;
pub mod services;

use crate::state::AppState;
use axum::Router;

pub use dto::EatenSource;
pub use repo_types::{EatenMeal, SourceKind};

pub fn router() -> Router<AppState> {
    handlers::routes()
}
