pub fn generate_typescript_definitions(
    type_names: &[&str],
) -> Result<String, Box<dyn std::error::Error>> {
    if type_names.is_empty() {
        return Err("No type names provided".into());
    }

    let mut definitions = Vec::new();

    for name in type_names {
        let type_def = export_type(name)?;
        let cleaned = clean_type(type_def);

        if !cleaned.trim().is_empty() {
            definitions.push(cleaned);
        }
    }

    Ok(definitions.join("\n\n"))
}

/// Names accepted by [`generate_typescript_definitions`], in export order.
pub const EXPORTED_TYPES: &[&str] = &[
    "Question",
    "Category",
    "CreateQuestionRequest",
    "SearchQuestionsRequest",
    "CategoriesResponse",
    "QuestionListResponse",
    "FilteredQuestionsResponse",
    "CreateQuestionResponse",
    "QuizCategory",
    "QuizRequest",
    "QuizResponse",
    "SuccessResponse",
    "ErrorResponse",
];

fn export_type(name: &str) -> Result<String, Box<dyn std::error::Error>> {
    use crate::*;
    use ts_rs::TS;

    let result = match name {
        "Question" => Question::export_to_string()?,
        "Category" => Category::export_to_string()?,
        "CreateQuestionRequest" => CreateQuestionRequest::export_to_string()?,
        "SearchQuestionsRequest" => SearchQuestionsRequest::export_to_string()?,
        "CategoriesResponse" => CategoriesResponse::export_to_string()?,
        "QuestionListResponse" => QuestionListResponse::export_to_string()?,
        "FilteredQuestionsResponse" => FilteredQuestionsResponse::export_to_string()?,
        "CreateQuestionResponse" => CreateQuestionResponse::export_to_string()?,

        "QuizCategory" => QuizCategory::export_to_string()?,
        "QuizRequest" => QuizRequest::export_to_string()?,
        "QuizResponse" => QuizResponse::export_to_string()?,

        "SuccessResponse" => SuccessResponse::export_to_string()?,
        "ErrorResponse" => ErrorResponse::export_to_string()?,

        _ => {
            return Err(format!(
                "Unknown type: '{}'. Available types can be found in shared-types/src/",
                name
            )
            .into());
        }
    };

    Ok(result)
}

fn clean_type(mut type_def: String) -> String {
    type_def.retain(|c| c != '\r');

    let lines: Vec<&str> = type_def.lines().collect();

    let filtered: Vec<&str> = lines
        .iter()
        .filter(|line| {
            let trimmed = line.trim();
            !trimmed.starts_with("import type")
                && !trimmed.starts_with("// This file was generated")
        })
        .cloned()
        .collect();

    filtered.join("\n").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_single_type() {
        let result = generate_typescript_definitions(&["Category"]).unwrap();
        assert!(result.contains("Category"));
        assert!(result.contains("type: string"));
    }

    #[test]
    fn test_generate_multiple_types() {
        let result = generate_typescript_definitions(&["Question", "QuizResponse"]).unwrap();
        assert!(result.contains("Question"));
        assert!(result.contains("QuizResponse"));
    }

    #[test]
    fn test_every_listed_type_exports() {
        let result = generate_typescript_definitions(EXPORTED_TYPES).unwrap();
        assert!(result.contains("searchTerm"));
        assert!(result.contains("number | string"));
    }

    #[test]
    fn test_unknown_type_error() {
        let result = generate_typescript_definitions(&["NonExistentType"]);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Unknown type"));
    }

    #[test]
    fn test_empty_type_names() {
        let result = generate_typescript_definitions(&[]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cleaned_output() {
        let result = generate_typescript_definitions(&["QuizRequest"]).unwrap();
        assert!(!result.contains("import type"));
        assert!(!result.contains("This file was generated"));
    }
}
