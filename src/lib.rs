pub mod common;
pub mod config;
pub mod models;
pub mod pages;
pub mod services;
pub mod store;

pub use common::AppError;
pub use config::AppState;
pub use pages::App;
