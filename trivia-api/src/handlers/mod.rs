pub mod categories;
pub mod questions;
pub mod quizzes;

use crate::error::{ApiError, ApiResult};
use crate::quiz::QuizSelection;
use crate::storage::Database;
use actix_web::{HttpRequest, HttpResponse};

pub struct AppState {
    pub database: Database,
    pub quiz_selection: QuizSelection,
}

impl AppState {
    pub fn new(database: Database, quiz_selection: QuizSelection) -> Self {
        Self {
            database,
            quiz_selection,
        }
    }
}

/// Fallback for paths outside the route table.
pub async fn not_found(req: HttpRequest) -> ApiResult<HttpResponse> {
    Err(ApiError::NotFound(format!("No route for {}", req.path())))
}

/// Fallback for a known path called with an unsupported verb.
pub async fn method_not_allowed() -> ApiResult<HttpResponse> {
    Err(ApiError::MethodNotAllowed)
}
