#![forbid(unsafe_code)]

//! Core domain model and business logic for the Fitlog exercise tracker.
//!
//! This crate provides:
//! - Domain types (user records, exercise entries, calculator inputs)
//! - Credential store persistence (flat JSON file)
//! - Registration and login with bcrypt password hashing
//! - Calorie/macro calculations (BMR, TDEE, macros)
//! - Append-only exercise logging

pub mod types;
pub mod error;
pub mod config;
pub mod logging;
pub mod store;
pub mod auth;
pub mod calculator;
pub mod exercise;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use config::Config;
pub use store::UserStore;
pub use auth::AuthService;
pub use calculator::{bmr, calculate, macros, tdee, MacroFactors};
pub use exercise::{validate_entry, ExerciseLog};
