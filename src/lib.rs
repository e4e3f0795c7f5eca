//! Libris Library Branch Management System
//!
//! A Rust REST API server for managing a network of library branches:
//! authors, publishers, branches, staff, members, books, staff schedules
//! and borrow transactions.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
