// ABOUTME: Nutritional aggregation over a weekly plan: sums, averages, category counts
// ABOUTME: Includes free-form prep-time parsing and keyword-based vegetarian classification
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Nutritional Aggregator
//!
//! Computes the weekly summary a plan's five entries roll up to: calorie
//! totals and average, macro totals, and the vegetarian / quick / easy day
//! counts the recommendation rules consume. Stateless and pure.

use crate::config::PlannerConfig;
use crate::constants::classification::MEAT_KEYWORDS;
use crate::models::{Difficulty, Recipe, WeeklyMenu};
use serde::{Deserialize, Serialize};

/// Aggregated nutritional view of one weekly plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklySummary {
    /// Sum of each day's calories (0 for days without nutrition data)
    pub total_calories: u32,
    /// `total_calories` averaged over the five days
    pub avg_calories: f64,
    /// Total protein in whole grams
    pub total_protein: u32,
    /// Total carbohydrates in whole grams
    pub total_carbs: u32,
    /// Total fat in whole grams
    pub total_fat: u32,
    /// Days classified vegetarian (no meat/poultry/fish ingredient markers)
    pub vegetarian_count: usize,
    /// Days whose preparation time is at or under the quick threshold
    pub quick_count: usize,
    /// Days with Easy difficulty
    pub easy_count: usize,
}

/// Aggregate nutritional data across a weekly menu.
///
/// Macro totals truncate each day's contribution to whole grams before
/// summing. That matches the legacy per-field display rounding the summary
/// was built against; a single rounding over raw sums would differ by up to
/// one gram per day.
#[must_use]
pub fn aggregate(menu: &WeeklyMenu, config: &PlannerConfig) -> WeeklySummary {
    let mut total_calories: u32 = 0;
    let mut total_protein: u32 = 0;
    let mut total_carbs: u32 = 0;
    let mut total_fat: u32 = 0;
    let mut vegetarian_count = 0;
    let mut quick_count = 0;
    let mut easy_count = 0;

    for day in &menu.days {
        if let Some(nutrition) = &day.nutrition {
            total_calories = total_calories.saturating_add(nutrition.calories);
            total_protein = total_protein.saturating_add(truncate_grams(nutrition.protein));
            total_carbs = total_carbs.saturating_add(truncate_grams(nutrition.carbs));
            total_fat = total_fat.saturating_add(truncate_grams(nutrition.fat));
        }
        if is_vegetarian(day) {
            vegetarian_count += 1;
        }
        if parse_prep_minutes(&day.prep_time)
            .is_some_and(|minutes| minutes <= config.quick_meal_max_minutes)
        {
            quick_count += 1;
        }
        if day.difficulty == Difficulty::Easy {
            easy_count += 1;
        }
    }

    let avg_calories = f64::from(total_calories) / menu.days.len() as f64;

    WeeklySummary {
        total_calories,
        avg_calories,
        total_protein,
        total_carbs,
        total_fat,
        vegetarian_count,
        quick_count,
        easy_count,
    }
}

fn truncate_grams(grams: f64) -> u32 {
    if grams.is_sign_negative() || !grams.is_finite() {
        0
    } else {
        grams as u32
    }
}

/// Whether a day counts as vegetarian: none of its merged ingredient lines
/// contain a meat/poultry/fish keyword marker, case-insensitively.
#[must_use]
pub fn is_vegetarian(recipe: &Recipe) -> bool {
    recipe.ingredients.iter().all(|line| {
        let lowered = line.to_lowercase();
        !MEAT_KEYWORDS
            .iter()
            .any(|keyword| lowered.contains(keyword))
    })
}

/// Parse a free-form preparation time ("60 min", "1 h 30 min", "45 minutos")
/// into total minutes. Hour units (`h`, `hr`, `hora(s)`) scale by 60; bare
/// numbers count as minutes. Returns `None` when no number is present.
#[must_use]
pub fn parse_prep_minutes(raw: &str) -> Option<u32> {
    let lowered = raw.to_lowercase();
    let mut chars = lowered.chars().peekable();
    let mut total: u32 = 0;
    let mut found = false;

    while let Some(&c) = chars.peek() {
        if c.is_ascii_digit() {
            let mut value: u32 = 0;
            while let Some(digit) = chars.peek().and_then(|d| d.to_digit(10)) {
                value = value.saturating_mul(10).saturating_add(digit);
                chars.next();
            }
            while chars.peek().is_some_and(|u| u.is_whitespace()) {
                chars.next();
            }
            let mut unit = String::new();
            while let Some(&u) = chars.peek() {
                if u.is_alphabetic() {
                    unit.push(u);
                    chars.next();
                } else {
                    break;
                }
            }
            let minutes = if unit.starts_with('h') {
                value.saturating_mul(60)
            } else {
                value
            };
            total = total.saturating_add(minutes);
            found = true;
        } else {
            chars.next();
        }
    }

    found.then_some(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NutritionalInfo, RecipeCategory};

    fn day(id: &str, calories: u32, protein: f64) -> Recipe {
        Recipe::new(id, format!("Platillo {id}"), RecipeCategory::MainDish)
            .with_prep_time("30 min")
            .with_ingredients(vec!["verduras".into()])
            .with_nutrition(NutritionalInfo {
                calories,
                protein,
                carbs: 10.9,
                fat: 5.5,
                ..NutritionalInfo::default()
            })
    }

    fn menu(days: Vec<Recipe>) -> WeeklyMenu {
        WeeklyMenu::new("Semana", 1, days).unwrap()
    }

    #[test]
    fn test_aggregation_additivity() {
        let plan = menu(vec![
            day("a", 400, 12.7),
            day("b", 500, 20.2),
            day("c", 0, 0.0),
            day("d", 650, 31.9),
            day("e", 450, 8.0),
        ]);
        let summary = aggregate(&plan, &PlannerConfig::default());
        assert_eq!(summary.total_calories, 2000);
        assert!((summary.avg_calories - 400.0).abs() < f64::EPSILON);
        // Per-day truncation: 12 + 20 + 0 + 31 + 8.
        assert_eq!(summary.total_protein, 71);
        // 10.9 truncates to 10 on each of the five days.
        assert_eq!(summary.total_carbs, 50);
        assert_eq!(summary.total_fat, 25);
    }

    #[test]
    fn test_missing_nutrition_counts_zero() {
        let mut days: Vec<Recipe> = (0..5).map(|i| day(&format!("r{i}"), 300, 5.0)).collect();
        days[2].nutrition = None;
        let summary = aggregate(&menu(days), &PlannerConfig::default());
        assert_eq!(summary.total_calories, 1200);
    }

    #[test]
    fn test_vegetarian_classification() {
        let veggie = Recipe::new("v", "Calabacitas", RecipeCategory::MainDish)
            .with_ingredients(vec!["calabaza".into(), "elote".into()]);
        assert!(is_vegetarian(&veggie));

        let meaty = Recipe::new("m", "Tinga", RecipeCategory::MainDish)
            .with_ingredients(vec!["cebolla".into(), "Pollo deshebrado".into()]);
        assert!(!is_vegetarian(&meaty));
    }

    #[test]
    fn test_quick_and_easy_counts() {
        let mut days: Vec<Recipe> = (0..5).map(|i| day(&format!("r{i}"), 300, 5.0)).collect();
        days[0].prep_time = "1 h 30 min".into();
        days[1].prep_time = "40 min".into();
        days[2].prep_time = "sin datos".into();
        days[0].difficulty = Difficulty::Easy;
        days[1].difficulty = Difficulty::Easy;
        days[2].difficulty = Difficulty::Easy;

        let summary = aggregate(&menu(days), &PlannerConfig::default());
        // Days 1 (40 min) and the two untouched 30-min days are quick.
        assert_eq!(summary.quick_count, 3);
        assert_eq!(summary.easy_count, 3);
    }

    #[test]
    fn test_parse_prep_minutes_formats() {
        assert_eq!(parse_prep_minutes("60 min"), Some(60));
        assert_eq!(parse_prep_minutes("45 minutos"), Some(45));
        assert_eq!(parse_prep_minutes("1 h 30 min"), Some(90));
        assert_eq!(parse_prep_minutes("2 horas"), Some(120));
        assert_eq!(parse_prep_minutes("1h15"), Some(75));
        assert_eq!(parse_prep_minutes("90"), Some(90));
        assert_eq!(parse_prep_minutes("rápido"), None);
        assert_eq!(parse_prep_minutes(""), None);
    }
}
