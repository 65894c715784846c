/// Create the categories table; categories are seeded, never edited over HTTP
pub fn migration() -> String {
    r#"
CREATE TABLE categories (
    id INTEGER PRIMARY KEY,
    type TEXT NOT NULL
);
"#.to_string()
}
