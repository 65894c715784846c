use super::AppState;
use crate::error::ApiResult;
use actix_web::{web, HttpResponse};
use shared_types::CategoriesResponse;
use tracing::info;

pub async fn list_categories(data: web::Data<AppState>) -> ApiResult<HttpResponse> {
    let categories = data
        .database
        .list_categories()?
        .into_iter()
        .map(|category| (category.id, category.kind))
        .collect();

    let response = CategoriesResponse {
        success: true,
        categories,
    };
    info!(count = response.categories.len(), "Listed categories");

    Ok(HttpResponse::Ok().json(response))
}
