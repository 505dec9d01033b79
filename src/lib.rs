pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod payload;
pub mod routes;

pub use config::Config;
pub use db::Database;
pub use error::Error;
pub use models::{NewTodo, Todo};
pub use routes::{app, AppState};
