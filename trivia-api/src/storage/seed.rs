use super::Database;
use crate::error::ApiResult;
use tracing::info;

pub const DEFAULT_CATEGORIES: &[&str] = &[
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

/// Inserts [`DEFAULT_CATEGORIES`] into an empty categories table. Returns
/// how many rows were added (0 if categories already existed).
pub fn seed_default_categories(db: &Database) -> ApiResult<usize> {
    if db.count_categories()? > 0 {
        info!("Categories already present, skipping seed");
        return Ok(0);
    }

    for kind in DEFAULT_CATEGORIES {
        db.insert_category(kind)?;
    }

    info!(count = DEFAULT_CATEGORIES.len(), "Seeded default categories");
    Ok(DEFAULT_CATEGORIES.len())
}
