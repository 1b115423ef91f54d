use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::db::queries::questions::{
    get_question_by_id, get_question_ids, get_question_ids_for_category,
};
use crate::db::Question;
use crate::server::app::AppState;
use crate::server::error::ApiError;
use crate::telemetry::QUIZ_QUESTION_CNTR;

use super::ApiResponse;

// category id 0 is the "all categories" sentinel
const ALL_CATEGORIES: i64 = 0;

#[derive(Deserialize)]
struct QuizBody {
    previous_questions: Vec<i64>,
    quiz_category: QuizCategory,
}

#[derive(Deserialize)]
struct QuizCategory {
    id: i64,
}

#[derive(Serialize)]
struct QuizResponse {
    question: Option<Question>,
}

async fn play_quiz(
    State(pool): State<SqlitePool>,
    body: Result<Json<QuizBody>, JsonRejection>,
) -> ApiResponse<QuizResponse> {
    let Json(QuizBody {
        previous_questions,
        quiz_category,
    }) = body?;

    let candidates = if quiz_category.id == ALL_CATEGORIES {
        get_question_ids(&pool).await?
    } else {
        get_question_ids_for_category(&pool, quiz_category.id).await?
    };
    let remaining: Vec<i64> = candidates
        .into_iter()
        .filter(|id| !previous_questions.contains(id))
        .collect();

    // take the id before awaiting anything, ThreadRng is not Send
    let chosen = remaining.choose(&mut rand::thread_rng()).copied();
    let question = match chosen {
        // exhausted the category, which ends the quiz
        None => None,
        Some(id) => {
            let question = get_question_by_id(&pool, id)
                .await?
                .ok_or(ApiError::NotFound)?;
            QUIZ_QUESTION_CNTR
                .with_label_values(&[question.category.to_string().as_str()])
                .inc();
            Some(question)
        }
    };
    Ok(Json(QuizResponse { question }))
}

pub fn quiz_router(state: AppState) -> Router {
    Router::new()
        .route("/quizzes", post(play_quiz))
        .with_state(state)
}
