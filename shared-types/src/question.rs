use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use ts_rs::TS;

/// Formatted question record as returned by every question endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
pub struct Category {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Integer that also accepts its decimal string form.
///
/// Browser forms hand back `"3"` rather than `3` for select inputs, and
/// category ids travel as object keys, so request bodies take either.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LooseInt(pub i64);

impl LooseInt {
    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for LooseInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for LooseInt {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Int(i64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Int(value) => Ok(LooseInt(value)),
            Raw::Text(text) => text.trim().parse::<i64>().map(LooseInt).map_err(|_| {
                serde::de::Error::custom(format!("expected an integer, got {text:?}"))
            }),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
pub struct CreateQuestionRequest {
    pub question: Option<String>,
    pub answer: Option<String>,
    #[ts(type = "number | string | null")]
    pub category: Option<LooseInt>,
    #[ts(type = "number | string | null")]
    pub difficulty: Option<LooseInt>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
pub struct SearchQuestionsRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct CategoriesResponse {
    pub success: bool,
    /// Category id to display label.
    #[ts(type = "Record<string, string>")]
    pub categories: BTreeMap<i64, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

/// Page of a search or category listing. `current_category` is always
/// present in the body, `null` for searches.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct FilteredQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct CreateQuestionResponse {
    pub success: bool,
    pub question: Question,
}
