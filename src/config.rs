// ABOUTME: Planner configuration with environment variable overrides
// ABOUTME: Thresholds for the dessert pass, quick-meal parsing, and advisory rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Planner Configuration
//!
//! Tunable thresholds for weekly selection and the advisory rules, loadable
//! from environment variables with sensible defaults.

use serde::{Deserialize, Serialize};
use std::env;

/// Configuration for the weekly selector and advisory rules
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Probability that the dessert pass attaches desserts to two days
    /// instead of one
    pub dessert_double_probability: f64,
    /// Maximum total preparation minutes for a day to count as "quick"
    pub quick_meal_max_minutes: u32,
    /// Average daily calories below this trigger the low-calorie advisory
    pub low_calorie_avg: f64,
    /// Average daily calories above this trigger the high-calorie advisory
    pub high_calorie_avg: f64,
    /// Minimum vegetarian days to confirm good vegetarian variety
    pub vegetarian_variety_min: usize,
    /// Minimum Easy-difficulty days to confirm beginner-friendliness
    pub easy_day_threshold: usize,
    /// Minimum quick days to confirm suitability for busy days
    pub quick_day_threshold: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            dessert_double_probability: 0.4,
            quick_meal_max_minutes: 40,
            low_calorie_avg: 400.0,
            high_calorie_avg: 800.0,
            vegetarian_variety_min: 2,
            easy_day_threshold: 3,
            quick_day_threshold: 3,
        }
    }
}

impl PlannerConfig {
    /// Create configuration from environment variables, falling back to
    /// defaults for missing or unparseable values.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            dessert_double_probability: env_f64(
                "PLANNER_DESSERT_DOUBLE_PROBABILITY",
                defaults.dessert_double_probability,
            )
            .clamp(0.0, 1.0),
            quick_meal_max_minutes: env_u32(
                "PLANNER_QUICK_MEAL_MAX_MINUTES",
                defaults.quick_meal_max_minutes,
            ),
            low_calorie_avg: env_f64("PLANNER_LOW_CALORIE_AVG", defaults.low_calorie_avg),
            high_calorie_avg: env_f64("PLANNER_HIGH_CALORIE_AVG", defaults.high_calorie_avg),
            vegetarian_variety_min: env_usize(
                "PLANNER_VEGETARIAN_VARIETY_MIN",
                defaults.vegetarian_variety_min,
            ),
            easy_day_threshold: env_usize("PLANNER_EASY_DAY_THRESHOLD", defaults.easy_day_threshold),
            quick_day_threshold: env_usize(
                "PLANNER_QUICK_DAY_THRESHOLD",
                defaults.quick_day_threshold,
            ),
        }
    }
}

fn env_f64(key: &str, default: f64) -> f64 {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn env_u32(key: &str, default: u32) -> u32 {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn env_usize(key: &str, default: usize) -> usize {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds() {
        let config = PlannerConfig::default();
        assert!((config.dessert_double_probability - 0.4).abs() < f64::EPSILON);
        assert_eq!(config.quick_meal_max_minutes, 40);
        assert!((config.low_calorie_avg - 400.0).abs() < f64::EPSILON);
        assert!((config.high_calorie_avg - 800.0).abs() < f64::EPSILON);
    }
}
