use std::collections::BTreeMap;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_option_number_from_string;
use sqlx::SqlitePool;

use crate::db::queries::categories::get_all_categories;
use crate::db::queries::questions::{
    create_question, delete_question, get_all_questions, search_questions,
};
use crate::db::Question;
use crate::server::app::AppState;
use crate::server::error::ApiError;
use crate::server::pagination::paginate;

use super::categories::{categories_map, QuestionListResponse};
use super::{ApiResponse, DEFAULT_CURRENT_CATEGORY};

#[derive(Deserialize)]
struct PageQuery {
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    page: Option<usize>,
}

#[derive(Deserialize)]
struct NewQuestion {
    question: String,
    answer: String,
    difficulty: i64,
    category: i64,
}

#[derive(Deserialize)]
struct SearchBody {
    #[serde(rename = "searchTerm")]
    search_term: String,
}

#[derive(Serialize)]
struct QuestionsPage {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
    current_category: String,
    categories: BTreeMap<i64, String>,
}

#[derive(Serialize)]
struct Success {
    success: bool,
}

async fn list_questions(
    State(pool): State<SqlitePool>,
    Query(PageQuery { page }): Query<PageQuery>,
) -> ApiResponse<QuestionsPage> {
    let questions = get_all_questions(&pool).await?;
    let total_questions = questions.len();
    let current = paginate(page.unwrap_or(1), questions);
    // an overrun page reads as a missing resource, like the original API
    if current.is_empty() {
        return Err(ApiError::NotFound);
    }

    let categories = get_all_categories(&pool).await?;
    Ok(Json(QuestionsPage {
        success: true,
        questions: current,
        total_questions,
        current_category: DEFAULT_CURRENT_CATEGORY.to_owned(),
        categories: categories_map(categories),
    }))
}

async fn add_question(
    State(pool): State<SqlitePool>,
    body: Result<Json<NewQuestion>, JsonRejection>,
) -> ApiResponse<Success> {
    let Json(new_question) = body?;
    create_question(
        &pool,
        &new_question.question,
        &new_question.answer,
        new_question.difficulty,
        new_question.category,
    )
    .await
    .map_err(|error| ApiError::Unprocessable(error.to_string()))?;
    Ok(Json(Success { success: true }))
}

async fn remove_question(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> ApiResponse<Success> {
    let rows = delete_question(&pool, id).await?;
    if rows == 0 {
        return Err(ApiError::NotFound);
    }
    Ok(Json(Success { success: true }))
}

async fn search(
    State(pool): State<SqlitePool>,
    body: Result<Json<SearchBody>, JsonRejection>,
) -> ApiResponse<QuestionListResponse> {
    let Json(SearchBody { search_term }) = body?;
    let questions = search_questions(&pool, &search_term).await?;
    if questions.is_empty() {
        return Err(ApiError::NotFound);
    }
    Ok(Json(QuestionListResponse {
        total_questions: questions.len(),
        questions,
        current_category: DEFAULT_CURRENT_CATEGORY.to_owned(),
    }))
}

pub fn questions_router(state: AppState) -> Router {
    Router::new()
        .route("/questions", get(list_questions).post(add_question))
        .route("/questions/{id}", delete(remove_question))
        .route("/questions/search", post(search))
        .with_state(state)
}
