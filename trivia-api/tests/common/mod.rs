#![allow(dead_code)]

use actix_web::{test, web, App};
use trivia_api::handlers::AppState;
use trivia_api::quiz::QuizSelection;
use trivia_api::routes::configure_routes;
use trivia_api::storage::{Database, NewQuestion};

pub const SCIENCE: i64 = 1;
pub const ART: i64 = 2;
pub const GEOGRAPHY: i64 = 3;
/// Category with no questions.
pub const HISTORY: i64 = 4;

pub const SCIENCE_QUESTIONS: usize = 12;
pub const TOTAL_QUESTIONS: usize = 15;

pub struct TestApp<S> {
    pub db: Database,
    pub app: S,
}

/// Four categories and fifteen questions: twelve in Science (ids 1-12),
/// two in Art (13, 14), one in Geography (15).
pub fn setup_test_db() -> anyhow::Result<Database> {
    let db = Database::open_in_memory()?;

    for kind in ["Science", "Art", "Geography", "History"] {
        db.insert_category(kind)?;
    }

    for n in 1..=SCIENCE_QUESTIONS {
        db.insert_question(&new_question(
            &format!("Science question {n}?"),
            &format!("Science answer {n}"),
            SCIENCE,
        ))?;
    }

    db.insert_question(&new_question(
        "What is the title of Leonardo's most famous portrait?",
        "Mona Lisa",
        ART,
    ))?;
    db.insert_question(&new_question(
        "Which artist painted The Starry Night?",
        "Vincent van Gogh",
        ART,
    ))?;
    db.insert_question(&new_question(
        "What is the largest hot desert by area?",
        "Sahara",
        GEOGRAPHY,
    ))?;

    Ok(db)
}

pub fn new_question(question: &str, answer: &str, category: i64) -> NewQuestion {
    NewQuestion {
        question: question.to_string(),
        answer: answer.to_string(),
        category,
        difficulty: 2,
    }
}

pub async fn setup_test_app() -> anyhow::Result<
    TestApp<
        impl actix_web::dev::Service<
            actix_http::Request,
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
        >,
    >,
> {
    setup_test_app_with(setup_test_db()?, QuizSelection::Random).await
}

pub async fn setup_test_app_with(
    db: Database,
    quiz_selection: QuizSelection,
) -> anyhow::Result<
    TestApp<
        impl actix_web::dev::Service<
            actix_http::Request,
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
        >,
    >,
> {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(AppState::new(db.clone(), quiz_selection)))
            .configure(configure_routes),
    )
    .await;

    Ok(TestApp { db, app })
}
