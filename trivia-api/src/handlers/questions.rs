use super::AppState;
use crate::error::{ApiError, ApiResult};
use crate::models::PageQuery;
use crate::pagination::paginate;
use crate::storage::NewQuestion;
use actix_web::{web, HttpResponse};
use shared_types::{
    CreateQuestionRequest, CreateQuestionResponse, FilteredQuestionsResponse, LooseInt,
    QuestionListResponse, SearchQuestionsRequest, SuccessResponse,
};
use tracing::{info, warn};

/// `GET /questions`. An empty page is a 404, even when earlier pages exist.
pub async fn list_questions(
    data: web::Data<AppState>,
    query: web::Query<PageQuery>,
) -> ApiResult<HttpResponse> {
    let page = query.page();
    let questions = data.database.list_questions()?;
    let current = paginate(&questions, page);

    if current.is_empty() {
        warn!(page, total = questions.len(), "Requested question page is empty");
        return Err(ApiError::NotFound(format!("Page {page} has no questions")));
    }

    info!(page, total = questions.len(), "Listed questions");
    Ok(HttpResponse::Ok().json(QuestionListResponse {
        success: true,
        questions: current.to_vec(),
        total_questions: questions.len(),
    }))
}

/// `DELETE /questions/{question_id}`
pub async fn delete_question(
    data: web::Data<AppState>,
    question_id: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    let id = question_id.into_inner();

    if !data.database.delete_question(id)? {
        warn!(question_id = id, "Question not found for deletion");
        return Err(ApiError::NotFound(format!("Question {id} not found")));
    }

    info!(question_id = id, "Deleted question");
    Ok(HttpResponse::Ok().json(SuccessResponse::ok()))
}

/// `POST /questions`. Any storage failure, including an unknown category,
/// is reported as 400.
pub async fn create_question(
    data: web::Data<AppState>,
    request: web::Json<CreateQuestionRequest>,
) -> ApiResult<HttpResponse> {
    let new_question = validate_new_question(request.into_inner())?;

    let question = data
        .database
        .insert_question(&new_question)
        .map_err(|e| ApiError::BadRequest(format!("Failed to store question: {e}")))?;

    info!(
        question_id = question.id,
        category = question.category,
        "Created question"
    );
    Ok(HttpResponse::Created().json(CreateQuestionResponse {
        success: true,
        question,
    }))
}

/// Presence check only: empty strings and zeros count as missing.
fn validate_new_question(req: CreateQuestionRequest) -> ApiResult<NewQuestion> {
    fn text(value: Option<String>, field: &str) -> ApiResult<String> {
        value
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ApiError::BadRequest(format!("{field} is required")))
    }

    fn number(value: Option<LooseInt>, field: &str) -> ApiResult<i64> {
        value
            .map(LooseInt::get)
            .filter(|v| *v != 0)
            .ok_or_else(|| ApiError::BadRequest(format!("{field} is required")))
    }

    Ok(NewQuestion {
        question: text(req.question, "question")?,
        answer: text(req.answer, "answer")?,
        category: number(req.category, "category")?,
        difficulty: number(req.difficulty, "difficulty")?,
    })
}

/// `POST /questions/search`. A missing term matches every question.
pub async fn search_questions(
    data: web::Data<AppState>,
    query: web::Query<PageQuery>,
    request: web::Json<SearchQuestionsRequest>,
) -> ApiResult<HttpResponse> {
    let page = query.page();
    let term = request.into_inner().search_term.unwrap_or_default();
    let matches = data.database.search_questions(&term)?;

    if matches.is_empty() {
        warn!(search_term = %term, "Search matched no questions");
        return Err(ApiError::NotFound(format!("No questions match {term:?}")));
    }

    info!(search_term = %term, page, total = matches.len(), "Searched questions");
    Ok(HttpResponse::Ok().json(FilteredQuestionsResponse {
        success: true,
        questions: paginate(&matches, page).to_vec(),
        total_questions: matches.len(),
        current_category: None,
    }))
}

/// `GET /api/categories/{category_id}/questions`. Only an empty category is a
/// 404; a page past the end comes back as an empty list.
pub async fn list_questions_by_category(
    data: web::Data<AppState>,
    category_id: web::Path<i64>,
    query: web::Query<PageQuery>,
) -> ApiResult<HttpResponse> {
    let category_id = category_id.into_inner();
    let page = query.page();
    let matches = data.database.list_questions_in_category(category_id)?;

    if matches.is_empty() {
        warn!(category_id, "Category has no questions");
        return Err(ApiError::NotFound(format!(
            "Category {category_id} has no questions"
        )));
    }

    info!(category_id, page, total = matches.len(), "Listed questions in category");
    Ok(HttpResponse::Ok().json(FilteredQuestionsResponse {
        success: true,
        questions: paginate(&matches, page).to_vec(),
        total_questions: matches.len(),
        current_category: Some(category_id),
    }))
}
