pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod hateoas;
pub mod models;
pub mod state;
pub mod timeframe;
pub mod validation;
