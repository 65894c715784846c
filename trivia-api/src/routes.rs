//! Route table for the trivia API.
//!
//! The server and the integration tests share [`configure_routes`] so both
//! see the same paths, verbs and error envelopes.

use crate::config::CorsConfig;
use crate::error::ApiError;
use crate::handlers::{self, categories, questions, quizzes};
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(query_config())
        .app_data(path_config())
        .service(
            web::resource("/categories")
                .route(web::get().to(categories::list_categories))
                .default_service(web::route().to(handlers::method_not_allowed)),
        )
        .service(
            web::resource("/questions")
                .route(web::get().to(questions::list_questions))
                .route(web::post().to(questions::create_question))
                .default_service(web::route().to(handlers::method_not_allowed)),
        )
        // Registered before /questions/{question_id} so "search" is not taken for an id
        .service(
            web::resource("/questions/search")
                .route(web::post().to(questions::search_questions))
                .default_service(web::route().to(handlers::method_not_allowed)),
        )
        .service(
            web::resource("/questions/{question_id}")
                .route(web::delete().to(questions::delete_question))
                .default_service(web::route().to(handlers::method_not_allowed)),
        )
        .service(
            web::resource("/api/categories/{category_id}/questions")
                .route(web::get().to(questions::list_questions_by_category))
                .default_service(web::route().to(handlers::method_not_allowed)),
        )
        .service(
            web::resource("/quizzes")
                .route(web::post().to(quizzes::next_quiz_question))
                .default_service(web::route().to(handlers::method_not_allowed)),
        )
        .default_service(web::route().to(handlers::not_found));
}

/// CORS policy applied to every response.
pub fn cors(config: &CorsConfig) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "PATCH", "POST", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::HeaderName::from_static("true"),
        ])
        .supports_credentials()
        .max_age(3600);

    if config.allowed_origins.iter().any(|origin| origin == "*") {
        cors = cors.allow_any_origin();
    } else {
        for origin in &config.allowed_origins {
            cors = cors.allowed_origin(origin);
        }
    }

    cors
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        ApiError::BadRequest(format!("Invalid JSON body: {err}")).into()
    })
}

fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        ApiError::BadRequest(format!("Invalid query string: {err}")).into()
    })
}

// A path id that is not an integer cannot name an existing row.
fn path_config() -> web::PathConfig {
    web::PathConfig::default()
        .error_handler(|err, _req| ApiError::NotFound(format!("Invalid path: {err}")).into())
}
