//! Core domain types for the fitlog system.
//!
//! This module defines the fundamental types used throughout the system:
//! - Persisted user records and exercise entries
//! - Calculator inputs and results
//! - Closed enumerations for gender, activity level, and goal
//! - The session value returned by login

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Persisted Types
// ============================================================================

/// A single logged exercise.
///
/// `image` is an opaque path or URI reference; the core never reads or
/// validates the file it points at. Serde field names match the legacy
/// `user_data.json` document.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ExerciseEntry {
    pub name: String,
    pub weight: f64,
    pub image: Option<String>,
}

impl ExerciseEntry {
    pub fn new(name: impl Into<String>, weight: f64, image: Option<String>) -> Self {
        Self {
            name: name.into(),
            weight,
            image,
        }
    }
}

/// Per-user persisted record: password hash plus the exercise log.
///
/// `password` holds a self-describing bcrypt hash (`$2b$...`), never a
/// plaintext password. Stores written before exercise logging existed have
/// no `exercise_data` key; that deserializes as an empty log.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct UserRecord {
    pub password: String,
    #[serde(default)]
    pub exercise_data: Vec<ExerciseEntry>,
}

impl UserRecord {
    /// Create a fresh record with an empty exercise log
    pub fn new(password_hash: impl Into<String>) -> Self {
        Self {
            password: password_hash.into(),
            exercise_data: Vec::new(),
        }
    }

    /// Exercise entries, oldest first (insertion order)
    pub fn entries(&self) -> &[ExerciseEntry] {
        &self.exercise_data
    }
}

// ============================================================================
// Calculator Enumerations
// ============================================================================

/// Gender used by the Mifflin-St Jeor formula
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

impl FromStr for Gender {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            other => Err(Error::Validation(format!("Unknown gender: '{other}'"))),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "Male"),
            Gender::Female => write!(f, "Female"),
        }
    }
}

/// Activity level scaling BMR up to TDEE.
///
/// Unrecognized levels fail at parse time; there is no default branch.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Active,
    VeryActive,
}

impl ActivityLevel {
    /// TDEE multiplier for this activity level
    pub fn factor(self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Active => 1.55,
            ActivityLevel::VeryActive => 1.725,
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        // Accepts both CLI tokens and the legacy UI labels ("Very Active")
        match s.trim().to_lowercase().as_str() {
            "sedentary" => Ok(ActivityLevel::Sedentary),
            "active" => Ok(ActivityLevel::Active),
            "very active" | "very_active" | "very-active" => Ok(ActivityLevel::VeryActive),
            other => Err(Error::Validation(format!(
                "Unknown activity level: '{other}'"
            ))),
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivityLevel::Sedentary => write!(f, "Sedentary"),
            ActivityLevel::Active => write!(f, "Active"),
            ActivityLevel::VeryActive => write!(f, "Very Active"),
        }
    }
}

/// Dietary goal adjusting the caloric target
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    WeightLoss,
    MuscleGain,
    Maintain,
}

impl FromStr for Goal {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "weight loss" | "weight_loss" | "weight-loss" => Ok(Goal::WeightLoss),
            "muscle gain" | "muscle_gain" | "muscle-gain" => Ok(Goal::MuscleGain),
            "maintain" | "maintaining weight" => Ok(Goal::Maintain),
            other => Err(Error::Validation(format!("Unknown goal: '{other}'"))),
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Goal::WeightLoss => write!(f, "Weight Loss"),
            Goal::MuscleGain => write!(f, "Muscle Gain"),
            Goal::Maintain => write!(f, "Maintaining Weight"),
        }
    }
}

// ============================================================================
// Calculator Input/Output Types
// ============================================================================

/// Inputs for a calorie/macro calculation. Transient, never persisted.
#[derive(Clone, Debug, PartialEq)]
pub struct CalculationInputs {
    pub age: u32,
    pub weight_kg: f64,
    pub height_cm: u32,
    pub gender: Gender,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
}

impl CalculationInputs {
    /// Reject non-positive or non-finite body metrics
    pub fn validate(&self) -> Result<()> {
        if self.age == 0 {
            return Err(Error::InvalidInput("age must be positive".into()));
        }
        if !self.weight_kg.is_finite() || self.weight_kg <= 0.0 {
            return Err(Error::InvalidInput(
                "weight must be a positive finite number".into(),
            ));
        }
        if self.height_cm == 0 {
            return Err(Error::InvalidInput("height must be positive".into()));
        }
        Ok(())
    }
}

/// Derived calorie and macro breakdown. Transient, never persisted.
#[derive(Clone, Debug, PartialEq)]
pub struct CalculationResult {
    pub tdee: f64,
    pub caloric_intake: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
    pub total_macro_calories: f64,
}

// ============================================================================
// Session Type
// ============================================================================

/// Authenticated session returned by login.
///
/// Threaded explicitly through exercise-log calls; there is no ambient
/// "current user" state.
#[derive(Clone, Debug)]
pub struct Session {
    pub username: String,
    pub record: UserRecord,
}
