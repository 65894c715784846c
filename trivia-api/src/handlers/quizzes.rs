use super::AppState;
use crate::error::{ApiError, ApiResult};
use crate::quiz::{category_filter, select_question};
use actix_web::{web, HttpResponse};
use shared_types::{QuizRequest, QuizResponse};
use tracing::info;

/// `POST /quizzes`. Answers `question: null` once the round is exhausted.
pub async fn next_quiz_question(
    data: web::Data<AppState>,
    request: web::Json<QuizRequest>,
) -> ApiResult<HttpResponse> {
    let request = request.into_inner();
    let quiz_category = request
        .quiz_category
        .ok_or_else(|| ApiError::BadRequest("quiz_category is required".to_string()))?;
    let previous = request.previous_questions.unwrap_or_default();
    let category = category_filter(quiz_category.id.get());

    let candidates = data.database.quiz_candidates(category, &previous)?;

    let question = select_question(
        candidates,
        &previous,
        data.quiz_selection,
        &mut rand::rng(),
    );

    match &question {
        Some(question) => info!(
            question_id = question.id,
            ?category,
            asked = previous.len(),
            "Selected quiz question"
        ),
        None => info!(?category, asked = previous.len(), "Quiz round complete"),
    }

    Ok(HttpResponse::Ok().json(QuizResponse {
        success: true,
        question,
    }))
}
