use serde::Deserialize;

/// `?page=N`; kept as text so that a non-numeric value falls back to page 1
/// instead of failing extraction.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
}

impl PageQuery {
    pub fn page(&self) -> i64 {
        crate::pagination::page_number(self.page.as_deref())
    }
}
