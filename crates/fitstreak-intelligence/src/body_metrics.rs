// ABOUTME: Body mass index and daily calorie target calculations
// ABOUTME: Mifflin-St Jeor BMR, activity multipliers, goal adjustment and 30/40/30 macro split
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Body Metrics Module
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - WHO body mass index classification for adults.

use fitstreak_core::errors::{AppError, AppResult};
use fitstreak_core::models::{
    ActivityLevel, BmiReading, BodyProfile, CalorieTargets, FitnessGoal, Gender,
};

/// Daily deficit applied for weight loss (kcal)
const WEIGHT_LOSS_DEFICIT: f64 = 500.0;
/// Daily surplus applied for muscle gain (kcal)
const MUSCLE_GAIN_SURPLUS: f64 = 300.0;
/// Energy density of protein and carbohydrate (kcal/g)
const KCAL_PER_GRAM_PROTEIN_CARB: f64 = 4.0;
/// Energy density of fat (kcal/g)
const KCAL_PER_GRAM_FAT: f64 = 9.0;
/// Share of calories from protein
const PROTEIN_SHARE: f64 = 0.30;
/// Share of calories from carbohydrate
const CARB_SHARE: f64 = 0.40;
/// Share of calories from fat
const FAT_SHARE: f64 = 0.30;

fn validate_measurements(weight_kg: f64, height_cm: f64) -> AppResult<()> {
    if !(weight_kg > 0.0 && weight_kg <= 300.0) {
        return Err(AppError::out_of_range("Weight must be between 0 and 300 kg"));
    }
    if !(height_cm > 0.0 && height_cm <= 300.0) {
        return Err(AppError::out_of_range("Height must be between 0 and 300 cm"));
    }
    Ok(())
}

/// Calculate BMI and its WHO category
///
/// # Errors
///
/// Returns an error if weight or height is outside a plausible range
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> AppResult<BmiReading> {
    validate_measurements(weight_kg, height_cm)?;

    let height_m = height_cm / 100.0;
    let bmi = weight_kg / (height_m * height_m);

    let (category, health_status) = if bmi < 18.5 {
        (
            "Underweight",
            "You may need to gain weight. Consult a healthcare provider.",
        )
    } else if bmi < 25.0 {
        ("Normal Weight", "You're at a healthy weight! Keep it up!")
    } else if bmi < 30.0 {
        (
            "Overweight",
            "Consider a balanced diet and regular exercise.",
        )
    } else {
        (
            "Obese",
            "Consult a healthcare provider for a personalized plan.",
        )
    };

    Ok(BmiReading {
        bmi: (bmi * 10.0).round() / 10.0,
        category: category.to_owned(),
        health_status: health_status.to_owned(),
    })
}

/// Activity multiplier applied to BMR
#[must_use]
pub const fn activity_multiplier(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary => 1.2,
        ActivityLevel::Light => 1.375,
        ActivityLevel::Moderate => 1.55,
        ActivityLevel::Active => 1.725,
        ActivityLevel::VeryActive => 1.9,
    }
}

/// Calculate BMR, TDEE, goal-adjusted intake and macro targets
///
/// Formula: BMR = 10 x weight + 6.25 x height - 5 x age + (5 | -161)
///
/// # Errors
///
/// Returns an error if measurements or age are outside a plausible range
pub fn calculate_calorie_targets(profile: &BodyProfile) -> AppResult<CalorieTargets> {
    validate_measurements(profile.weight_kg, profile.height_cm)?;
    if !(10..=120).contains(&profile.age) {
        return Err(AppError::out_of_range(
            "Age must be between 10 and 120 years",
        ));
    }

    let gender_constant = match profile.gender {
        Gender::Male => 5.0,
        Gender::Female => -161.0,
    };
    let bmr = 6.25f64.mul_add(
        profile.height_cm,
        10.0f64.mul_add(profile.weight_kg, -5.0 * f64::from(profile.age)),
    ) + gender_constant;

    let tdee = bmr * activity_multiplier(profile.activity_level);

    let target = match profile.fitness_goal {
        FitnessGoal::LoseWeight => tdee - WEIGHT_LOSS_DEFICIT,
        FitnessGoal::GainMuscle => tdee + MUSCLE_GAIN_SURPLUS,
        FitnessGoal::Maintain => tdee,
    };

    Ok(CalorieTargets {
        bmr: bmr.round() as i64,
        tdee: tdee.round() as i64,
        target_calories: target.round() as i64,
        protein_g: (target * PROTEIN_SHARE / KCAL_PER_GRAM_PROTEIN_CARB).round() as i64,
        carbs_g: (target * CARB_SHARE / KCAL_PER_GRAM_PROTEIN_CARB).round() as i64,
        fats_g: (target * FAT_SHARE / KCAL_PER_GRAM_FAT).round() as i64,
    })
}
