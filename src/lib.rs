pub mod api;
pub mod cli;
pub mod config;
pub mod demo;
pub mod errors;
pub mod models;
pub mod providers;
pub mod utils;
