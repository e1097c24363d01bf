use std::sync::Arc;

use crate::config::Config;
use crate::models::student::Student;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// The roster is normalized once at startup and read-only for the process
/// lifetime, so handlers share it without coordination.
#[derive(Clone)]
pub struct AppState {
    pub roster: Arc<Vec<Student>>,
    pub config: Config,
}
