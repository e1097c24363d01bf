use std::collections::HashMap;

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::errors::AppError;
use crate::models::student::Student;
use crate::profile::render_profile;
use crate::query::paging::page_slice;
use crate::query::sort::sort_students;
use crate::query::{facets, filter, Criteria};
use crate::state::AppState;

/// GET /students
///
/// Query-parameter filtering over the roster; returns an empty array, not an
/// error, when nothing matches. Unparsable numeric parameters are ignored.
/// Optional `page`/`perPage` select one page of the sorted result.
pub async fn list_students(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Vec<Student>> {
    let criteria = Criteria::from_query(&params);
    let mut matched = filter(&state.roster, &criteria);
    sort_students(&mut matched, criteria.sort);
    if let Some(page) = criteria.page {
        let per_page = criteria.per_page.unwrap_or(state.config.page_size);
        matched = page_slice(&matched, page, per_page).to_vec();
    }
    Json(matched)
}

/// GET /students/:id
pub async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Student>, AppError> {
    let student = find_student(&state, id)?;
    Ok(Json(student.clone()))
}

/// GET /students/:id/profile
/// Plaintext recruiter profile of one student.
pub async fn student_profile(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<String, AppError> {
    let student = find_student(&state, id)?;
    Ok(render_profile(student))
}

/// GET /majors
pub async fn list_majors(State(state): State<AppState>) -> Json<Vec<String>> {
    let mut majors = facets::majors(&state.roster);
    majors.sort_by_key(|m| m.to_lowercase());
    Json(majors)
}

/// GET /skills
pub async fn list_skills(State(state): State<AppState>) -> Json<Vec<String>> {
    let mut skills = facets::skills(&state.roster);
    skills.sort_by_key(|s| s.to_lowercase());
    Json(skills)
}

/// GET /graduation-years
pub async fn list_graduation_years(State(state): State<AppState>) -> Json<Vec<i32>> {
    let mut years = facets::graduation_years(&state.roster);
    years.sort_unstable();
    Json(years)
}

fn find_student(state: &AppState, id: i64) -> Result<&Student, AppError> {
    state
        .roster
        .iter()
        .find(|s| s.id == id)
        .ok_or_else(|| AppError::NotFound(format!("Student {id} not found")))
}
