//! Core client module

pub mod client;
pub mod config;
pub mod envelope;
pub mod errors;
pub mod models;
