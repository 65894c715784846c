use rusqlite::Connection;
use std::sync::{Arc, Mutex};

pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod models;
pub mod pagination;
pub mod quiz;
pub mod routes;
pub mod storage;

pub type DbConnection = Arc<Mutex<Connection>>;
