// ABOUTME: Body composition and energy models for BMI and calorie targets
// ABOUTME: Gender, ActivityLevel, FitnessGoal, BodyProfile, BmiReading and CalorieTargets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Gender used by the Mifflin-St Jeor equation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male constant (+5 kcal)
    Male,
    /// Female constant (-161 kcal)
    Female,
}

/// Habitual activity level for TDEE
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Exercise 1-3 days a week
    Light,
    /// Exercise 3-5 days a week
    Moderate,
    /// Exercise 6-7 days a week
    Active,
    /// Hard daily training or a physical job
    VeryActive,
}

/// What the user wants their intake to support
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum FitnessGoal {
    /// Caloric deficit
    LoseWeight,
    /// Caloric balance
    Maintain,
    /// Caloric surplus
    GainMuscle,
}

/// Body measurements needed for energy calculations
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BodyProfile {
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Age in years
    pub age: u32,
    /// Gender for the BMR constant
    pub gender: Gender,
    /// Habitual activity level
    pub activity_level: ActivityLevel,
    /// Intake goal
    pub fitness_goal: FitnessGoal,
}

/// Body mass index with its category
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BmiReading {
    /// BMI rounded to one decimal
    pub bmi: f64,
    /// WHO category label
    pub category: String,
    /// Short guidance for the category
    pub health_status: String,
}

/// Daily energy and macronutrient targets, all rounded to whole units
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CalorieTargets {
    /// Basal metabolic rate (kcal)
    pub bmr: i64,
    /// Total daily energy expenditure (kcal)
    pub tdee: i64,
    /// Goal-adjusted intake (kcal)
    pub target_calories: i64,
    /// Protein (g)
    pub protein_g: i64,
    /// Carbohydrates (g)
    pub carbs_g: i64,
    /// Fat (g)
    pub fats_g: i64,
}
