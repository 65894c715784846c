pub mod migrations;
pub mod seed;
pub mod sqlite;

pub use seed::seed_default_categories;
pub use sqlite::{Database, NewQuestion};
