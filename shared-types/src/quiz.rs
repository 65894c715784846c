use crate::question::{LooseInt, Question};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Category picked on the play screen. An id of 0 stands for "All".
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct QuizCategory {
    #[ts(type = "number | string")]
    pub id: LooseInt,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
pub struct QuizRequest {
    pub previous_questions: Option<Vec<i64>>,
    pub quiz_category: Option<QuizCategory>,
}

/// Next quiz question; `question` is `null` once every candidate has been
/// asked.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<Question>,
}
