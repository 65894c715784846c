//! Fixed-size page windows over an ordered match set.

pub const QUESTIONS_PER_PAGE: usize = 10;

/// Reads the `page` query value; missing or non-numeric input means page 1.
pub fn page_number(raw: Option<&str>) -> i64 {
    raw.and_then(|value| value.trim().parse::<i64>().ok())
        .unwrap_or(1)
}

/// Returns the `[(page - 1) * 10, page * 10)` window of `items`.
///
/// Pages below 1 or past the end yield an empty slice; callers decide
/// whether that is an error.
pub fn paginate<T>(items: &[T], page: i64) -> &[T] {
    if page < 1 {
        return &[];
    }

    let start = usize::try_from(page - 1)
        .unwrap_or(usize::MAX)
        .saturating_mul(QUESTIONS_PER_PAGE);
    if start >= items.len() {
        return &[];
    }

    let end = start.saturating_add(QUESTIONS_PER_PAGE).min(items.len());
    &items[start..end]
}
