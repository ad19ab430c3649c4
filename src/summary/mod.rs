pub mod dto;
pub mod handlers;
pub mod services;

use crate::state::AppState;
use axum::Router;

pub use dto::MacrosSummary;
pub use services::day_bounds;

pub fn router() -> Router<AppState> {
    handlers::routes()
}
