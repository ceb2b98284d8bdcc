pub mod analysis;
pub mod api;
pub mod classifier;
pub mod cli;
pub mod config;
pub mod errors;
pub mod models;
pub mod reputation;
pub mod scanner;
