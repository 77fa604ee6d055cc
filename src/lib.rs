pub mod app;
pub mod config;
pub mod db;
pub mod foods;
pub mod state;
pub mod suggestions;
