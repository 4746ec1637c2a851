use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/tasks", get(handlers::get_tasks))
        .route("/api/balance", get(handlers::get_balance))
        .route(
            "/api/history",
            get(handlers::get_history).delete(handlers::clear_history),
        )
        .route("/api/transactions", post(handlers::apply_task))
        .route("/api/bonus/daily", post(handlers::daily_bonus))
        .route("/api/bonus/end-of-day", post(handlers::end_of_day_bonus))
        .route("/api/reset", post(handlers::reset))
        .route("/api/stats", get(handlers::get_stats))
        .with_state(state)
}
