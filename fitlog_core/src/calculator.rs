//! Calorie and macronutrient calculations.
//!
//! Pure, stateless functions: Mifflin-St Jeor BMR, activity-scaled TDEE,
//! and a bodyweight-based macro breakdown. Nothing here touches the store.

use crate::{ActivityLevel, CalculationInputs, CalculationResult, Error, Gender, Goal, Result};

/// Grams-per-kg factors used by the macro breakdown
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MacroFactors {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl Default for MacroFactors {
    fn default() -> Self {
        Self {
            protein: 2.0,
            carbs: 4.0,
            fat: 1.0,
        }
    }
}

/// Basal Metabolic Rate via the Mifflin-St Jeor formula.
///
/// Male: `10w + 6.25h - 5a + 5`; Female: `10w + 6.25h - 5a - 161`.
pub fn bmr(weight_kg: f64, height_cm: f64, age: u32, gender: Gender) -> Result<f64> {
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return Err(Error::InvalidInput(
            "weight must be a positive finite number".into(),
        ));
    }
    if !height_cm.is_finite() || height_cm <= 0.0 {
        return Err(Error::InvalidInput(
            "height must be a positive finite number".into(),
        ));
    }
    if age == 0 {
        return Err(Error::InvalidInput("age must be positive".into()));
    }

    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age);
    Ok(match gender {
        Gender::Male => base + 5.0,
        Gender::Female => base - 161.0,
    })
}

/// Total Daily Energy Expenditure: BMR scaled by the activity factor
pub fn tdee(bmr: f64, activity_level: ActivityLevel) -> f64 {
    bmr * activity_level.factor()
}

/// Caloric target and macro gram breakdown for a goal.
///
/// Caloric target: weight loss -500, muscle gain +300, maintain unchanged.
/// Grams are bodyweight scaled by `factors`; macro calories count protein
/// and carbs at 4 kcal/g and fat at 9 kcal/g.
pub fn macros(
    tdee: f64,
    weight_kg: f64,
    goal: Goal,
    factors: MacroFactors,
) -> Result<CalculationResult> {
    if !tdee.is_finite() || tdee <= 0.0 {
        return Err(Error::InvalidInput(
            "tdee must be a positive finite number".into(),
        ));
    }
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return Err(Error::InvalidInput(
            "weight must be a positive finite number".into(),
        ));
    }

    let caloric_intake = match goal {
        Goal::WeightLoss => tdee - 500.0,
        Goal::MuscleGain => tdee + 300.0,
        Goal::Maintain => tdee,
    };

    let protein_g = weight_kg * factors.protein;
    let carbs_g = weight_kg * factors.carbs;
    let fat_g = weight_kg * factors.fat;
    let total_macro_calories = protein_g * 4.0 + carbs_g * 4.0 + fat_g * 9.0;

    Ok(CalculationResult {
        tdee,
        caloric_intake,
        protein_g,
        carbs_g,
        fat_g,
        total_macro_calories,
    })
}

/// Full validated pipeline: inputs -> BMR -> TDEE -> macros
pub fn calculate(inputs: &CalculationInputs) -> Result<CalculationResult> {
    inputs.validate()?;

    let bmr_value = bmr(
        inputs.weight_kg,
        f64::from(inputs.height_cm),
        inputs.age,
        inputs.gender,
    )?;
    let tdee_value = tdee(bmr_value, inputs.activity_level);
    macros(
        tdee_value,
        inputs.weight_kg,
        inputs.goal,
        MacroFactors::default(),
    )
}
