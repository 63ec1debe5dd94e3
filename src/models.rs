// ABOUTME: Core data models for recipes, nutrition facts, and weekly menus
// ABOUTME: Defines Recipe, NutritionalInfo, Difficulty, RecipeCategory, and WeeklyMenu
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Data Models
//!
//! Common data structures for the planning engine. Original recipes are owned
//! by the catalog; composite recipes are produced by the combinator and owned
//! by the weekly plan cache. Both are immutable after creation.

use crate::constants::{nutrition, planning};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Recipe preparation difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    /// Simple recipes, basic techniques
    Easy,
    /// Moderate complexity
    #[default]
    Medium,
    /// Complex recipes, advanced techniques
    Hard,
}

/// Fixed recipe classification used to partition the catalog for selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecipeCategory {
    /// Standalone or side-requiring main dish
    MainDish,
    /// Soups and stews
    Soup,
    /// Side dishes, only served alongside a main
    SideDish,
    /// Desserts
    Dessert,
    /// Salads
    Salad,
    /// Drinks (not planned)
    Drink,
    /// Breakfast dishes (not planned)
    Breakfast,
}

/// Nutritional facts per serving
///
/// All values are non-negative. No cross-field invariant is enforced; macros
/// need not reconcile to calories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct NutritionalInfo {
    /// Calories per serving
    pub calories: u32,
    /// Protein in grams
    pub protein: f64,
    /// Carbohydrates in grams
    pub carbs: f64,
    /// Fat in grams
    pub fat: f64,
    /// Fiber in grams
    pub fiber: f64,
    /// Sodium in milligrams
    pub sodium: u32,
    /// Sugar in grams
    pub sugar: f64,
}

impl NutritionalInfo {
    /// Whether this serving counts as low-calorie (< 300 kcal)
    #[must_use]
    pub const fn is_low_calorie(&self) -> bool {
        self.calories < nutrition::LOW_CALORIE_MAX
    }

    /// Whether this serving counts as high-protein (> 20 g)
    #[must_use]
    pub fn is_high_protein(&self) -> bool {
        self.protein > nutrition::HIGH_PROTEIN_MIN
    }

    /// Whether this serving counts as low-sodium (< 140 mg)
    #[must_use]
    pub const fn is_low_sodium(&self) -> bool {
        self.sodium < nutrition::LOW_SODIUM_MAX
    }
}

/// A single dish, either an original catalog recipe or a composite produced
/// by the combinator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Unique identifier. Composites use `{primary}_{role_tag}_{secondary}`.
    pub id: String,
    /// Display name
    pub name: String,
    /// Regional origin
    pub origin: String,
    /// Free-form description
    pub description: String,
    /// Free-form preparation time, e.g. "60 min" or "1 h 30 min"
    pub prep_time: String,
    /// Preparation difficulty
    pub difficulty: Difficulty,
    /// Ordered ingredient lines; order is meaningful for display and
    /// voice read-back and must be preserved by merges
    pub ingredients: Vec<String>,
    /// Ordered preparation steps
    pub steps: Vec<String>,
    /// Nutritional facts per serving, when known
    pub nutrition: Option<NutritionalInfo>,
    /// Fixed classification
    pub category: RecipeCategory,
    /// Number of servings this recipe makes
    pub servings: u32,
    /// UI-only favorite flag; always false on composites
    pub is_favorite: bool,
}

impl Recipe {
    /// Create a new recipe with basic information
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: RecipeCategory) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            origin: String::new(),
            description: String::new(),
            prep_time: String::new(),
            difficulty: Difficulty::default(),
            ingredients: Vec::new(),
            steps: Vec::new(),
            nutrition: None,
            category,
            servings: 1,
            is_favorite: false,
        }
    }

    /// Set the description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the preparation time
    #[must_use]
    pub fn with_prep_time(mut self, prep_time: impl Into<String>) -> Self {
        self.prep_time = prep_time.into();
        self
    }

    /// Set the difficulty
    #[must_use]
    pub const fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Add ingredient lines
    #[must_use]
    pub fn with_ingredients(mut self, ingredients: Vec<String>) -> Self {
        self.ingredients.extend(ingredients);
        self
    }

    /// Add preparation steps
    #[must_use]
    pub fn with_steps(mut self, steps: Vec<String>) -> Self {
        self.steps.extend(steps);
        self
    }

    /// Set nutritional facts
    #[must_use]
    pub fn with_nutrition(mut self, nutrition: NutritionalInfo) -> Self {
        self.nutrition = Some(nutrition);
        self
    }

    /// Set the number of servings
    #[must_use]
    pub const fn with_servings(mut self, servings: u32) -> Self {
        self.servings = servings;
        self
    }
}

/// The output plan for one week: exactly five day recipes, Monday through
/// Friday, possibly composite
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyMenu {
    /// Display name, e.g. "Recetas de la Semana #12"
    pub name: String,
    /// ISO-style week-of-year, the cache key and plan identity
    pub week_number: u32,
    /// Exactly five day recipes in Monday..Friday order
    pub days: Vec<Recipe>,
}

impl WeeklyMenu {
    /// Construct a weekly menu, enforcing the five-day shape invariant
    ///
    /// # Errors
    ///
    /// Returns `InvalidMenuShape` when `days` does not hold exactly five
    /// recipes. The selection algorithm should never produce such a plan,
    /// but the invariant is checked at every construction.
    pub fn new(name: impl Into<String>, week_number: u32, days: Vec<Recipe>) -> AppResult<Self> {
        if days.len() != planning::WEEKLY_MENU_DAYS {
            return Err(AppError::invalid_menu_shape(days.len()));
        }
        Ok(Self {
            name: name.into(),
            week_number,
            days,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_recipe(id: &str) -> Recipe {
        Recipe::new(id, format!("Recipe {id}"), RecipeCategory::MainDish)
    }

    #[test]
    fn test_nutrition_predicates() {
        let info = NutritionalInfo {
            calories: 299,
            protein: 20.5,
            sodium: 139,
            ..NutritionalInfo::default()
        };
        assert!(info.is_low_calorie());
        assert!(info.is_high_protein());
        assert!(info.is_low_sodium());

        let boundary = NutritionalInfo {
            calories: 300,
            protein: 20.0,
            sodium: 140,
            ..NutritionalInfo::default()
        };
        assert!(!boundary.is_low_calorie());
        assert!(!boundary.is_high_protein());
        assert!(!boundary.is_low_sodium());
    }

    #[test]
    fn test_weekly_menu_shape_invariant() {
        let days: Vec<Recipe> = (0..5).map(|i| sample_recipe(&format!("r{i}"))).collect();
        let menu = WeeklyMenu::new("Semana 1", 1, days).unwrap();
        assert_eq!(menu.days.len(), 5);

        let short: Vec<Recipe> = (0..4).map(|i| sample_recipe(&format!("r{i}"))).collect();
        let error = WeeklyMenu::new("Semana 1", 1, short).unwrap_err();
        assert_eq!(error.code, crate::errors::ErrorCode::InvalidMenuShape);
    }
}
