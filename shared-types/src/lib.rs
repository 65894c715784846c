use serde::{Deserialize, Serialize};
use ts_rs::TS;

pub mod question;
pub mod quiz;
pub mod typescript_gen;

pub use typescript_gen::generate_typescript_definitions;

pub use question::{
    CategoriesResponse, Category, CreateQuestionRequest, CreateQuestionResponse,
    FilteredQuestionsResponse, LooseInt, Question, QuestionListResponse, SearchQuestionsRequest,
};
pub use quiz::{QuizCategory, QuizRequest, QuizResponse};

// Envelopes shared by every endpoint

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// Body of every failed request: `{success: false, error: <status>, message}`.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: u16,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: status,
            message: message.into(),
        }
    }
}
