pub mod health;

use axum::{routing::get, Router};

use crate::state::AppState;
use crate::students::handlers;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/students", get(handlers::list_students))
        .route("/students/:id", get(handlers::get_student))
        .route("/students/:id/profile", get(handlers::student_profile))
        .route("/majors", get(handlers::list_majors))
        .route("/skills", get(handlers::list_skills))
        .route("/graduation-years", get(handlers::list_graduation_years))
        .with_state(state)
}
