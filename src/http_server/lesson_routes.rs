//! Lesson HTTP routes
//!
//! Read-only lookups over the built-in catalog.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::lessons::{Lesson, LessonCatalog, LessonSummary};

use super::ErrorResponse;

/// Lesson state shared across handlers
pub struct LessonState {
    pub catalog: LessonCatalog,
}

impl LessonState {
    pub fn new() -> Self {
        Self {
            catalog: LessonCatalog::builtin(),
        }
    }
}

impl Default for LessonState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Serialize)]
pub struct LessonsListResponse {
    pub success: bool,
    pub lessons: Vec<LessonSummary>,
}

#[derive(Debug, Serialize)]
pub struct LessonResponse {
    pub success: bool,
    pub lesson: Lesson,
}

/// Create lesson routes
pub fn lesson_routes(state: Arc<LessonState>) -> Router {
    Router::new()
        .route("/lessons", get(list_lessons_handler))
        .route("/lessons/{id}", get(get_lesson_handler))
        .with_state(state)
}

async fn list_lessons_handler(State(state): State<Arc<LessonState>>) -> Json<LessonsListResponse> {
    Json(LessonsListResponse {
        success: true,
        lessons: state.catalog.summaries(),
    })
}

async fn get_lesson_handler(
    State(state): State<Arc<LessonState>>,
    Path(id): Path<u32>,
) -> Result<Json<LessonResponse>, (StatusCode, Json<ErrorResponse>)> {
    match state.catalog.get(id) {
        Some(lesson) => Ok(Json(LessonResponse {
            success: true,
            lesson: lesson.clone(),
        })),
        None => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Lesson not found".to_string(),
            }),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lesson_state_has_builtin_catalog() {
        let state = LessonState::new();
        assert_eq!(state.catalog.len(), 10);
    }

    #[test]
    fn test_list_response_serialization() {
        let state = LessonState::new();
        let response = LessonsListResponse {
            success: true,
            lessons: state.catalog.summaries(),
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["lessons"].as_array().unwrap().len(), 10);
        // Summaries carry no content block
        assert!(value["lessons"][0].get("content").is_none());
    }

    #[test]
    fn test_router_builds() {
        let _router = lesson_routes(Arc::new(LessonState::new()));
    }
}
