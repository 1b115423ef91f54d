use std::collections::BTreeMap;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::db::queries::categories::{get_all_categories, get_category};
use crate::db::queries::questions::get_questions_for_category;
use crate::db::{Category, Question};
use crate::server::app::AppState;
use crate::server::error::ApiError;

use super::ApiResponse;

#[derive(Serialize)]
struct CategoriesResponse {
    success: bool,
    categories: BTreeMap<i64, String>,
}

#[derive(Serialize)]
pub(crate) struct QuestionListResponse {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: String,
}

pub(crate) fn categories_map(categories: Vec<Category>) -> BTreeMap<i64, String> {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}

async fn list_categories(State(pool): State<SqlitePool>) -> ApiResponse<CategoriesResponse> {
    let categories = get_all_categories(&pool).await?;
    Ok(Json(CategoriesResponse {
        success: true,
        categories: categories_map(categories),
    }))
}

async fn questions_by_category(
    State(pool): State<SqlitePool>,
    Path(category_id): Path<i64>,
) -> ApiResponse<QuestionListResponse> {
    let category = get_category(&pool, category_id)
        .await?
        .ok_or(ApiError::NotFound)?;
    let questions = get_questions_for_category(&pool, category_id).await?;
    Ok(Json(QuestionListResponse {
        total_questions: questions.len(),
        questions,
        current_category: category.kind,
    }))
}

pub fn category_router(state: AppState) -> Router {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/categories/{id}/questions", get(questions_by_category))
        .with_state(state)
}
