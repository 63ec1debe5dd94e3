// ABOUTME: Composite recipe synthesis merging a main dish with a side, dessert, or salad
// ABOUTME: Pure and total over any two well-formed recipes; preserves ingredient order
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Recipe Combinator
//!
//! Merges two recipes into one composite with a fresh deterministic id. The
//! composite's display identity (nutrition, category, difficulty, servings,
//! origin) is the primary dish; the secondary contributes only text. Per-day
//! nutrition is aggregated later at the plan level, never pre-summed here.

use crate::models::Recipe;

/// Role the secondary recipe plays in a composite
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompanionRole {
    /// Mandatory side dish for mains that never appear alone
    Side,
    /// Optional dessert complement
    Dessert,
    /// Salad complement, attached to every day
    Salad,
}

impl CompanionRole {
    /// Id segment for composite identifiers
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Side => "con",
            Self::Dessert => "postre",
            Self::Salad => "ensalada",
        }
    }

    /// Display label used in separator marker lines
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Side => "Guarnición",
            Self::Dessert => "Postre",
            Self::Salad => "Ensalada",
        }
    }
}

/// Format the separator marker line inserted between the primary and
/// secondary ingredient/step sequences.
///
/// The marker is data carried inside the merged lists; keeping its format in
/// one place lets presentation change without touching the merge logic.
#[must_use]
pub fn companion_marker(role: CompanionRole, secondary_name: &str) -> String {
    format!("--- {}: {} ---", role.label(), secondary_name)
}

/// Merge `primary` and `secondary` into a new composite recipe.
///
/// The composite id is `{primary.id}_{tag}_{secondary.id}`, unique as long as
/// the `(primary, secondary, role)` triple is unique. Ingredients and steps
/// are the primary's sequences, a single marker line, then the secondary's
/// sequences, in that order.
#[must_use]
pub fn combine(primary: &Recipe, secondary: &Recipe, role: CompanionRole) -> Recipe {
    let marker = companion_marker(role, &secondary.name);

    let mut ingredients = primary.ingredients.clone();
    ingredients.push(marker.clone());
    ingredients.extend(secondary.ingredients.iter().cloned());

    let mut steps = primary.steps.clone();
    steps.push(marker);
    steps.extend(secondary.steps.iter().cloned());

    let name = match role {
        CompanionRole::Side => format!("{} con {}", primary.name, secondary.name),
        CompanionRole::Dessert | CompanionRole::Salad => {
            format!("{} + {}", primary.name, secondary.name)
        }
    };

    let clause = match role {
        CompanionRole::Side => format!("Acompañado de {}.", secondary.name.to_lowercase()),
        CompanionRole::Dessert => format!("Incluye postre: {}.", secondary.name.to_lowercase()),
        CompanionRole::Salad => format!("Incluye ensalada: {}.", secondary.name.to_lowercase()),
    };
    let description = if primary.description.is_empty() {
        clause
    } else {
        format!("{} {}", primary.description, clause)
    };

    Recipe {
        id: format!("{}_{}_{}", primary.id, role.tag(), secondary.id),
        name,
        origin: primary.origin.clone(),
        description,
        prep_time: primary.prep_time.clone(),
        difficulty: primary.difficulty,
        ingredients,
        steps,
        nutrition: primary.nutrition.clone(),
        category: primary.category,
        servings: primary.servings,
        is_favorite: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Difficulty, NutritionalInfo, RecipeCategory};

    fn main_dish() -> Recipe {
        Recipe::new("m1", "Enchiladas", RecipeCategory::MainDish)
            .with_description("Clásico del centro del país.")
            .with_difficulty(Difficulty::Easy)
            .with_prep_time("45 min")
            .with_ingredients(vec!["tortillas".into(), "salsa".into()])
            .with_steps(vec!["Preparar la salsa".into(), "Rellenar".into()])
            .with_nutrition(NutritionalInfo {
                calories: 450,
                protein: 18.0,
                ..NutritionalInfo::default()
            })
    }

    fn side_dish() -> Recipe {
        Recipe::new("s1", "Arroz Rojo", RecipeCategory::SideDish)
            .with_ingredients(vec!["arroz".into(), "jitomate".into()])
            .with_steps(vec!["Sofreír el arroz".into()])
    }

    #[test]
    fn test_side_combine_id_and_name() {
        let composite = combine(&main_dish(), &side_dish(), CompanionRole::Side);
        assert_eq!(composite.id, "m1_con_s1");
        assert_eq!(composite.name, "Enchiladas con Arroz Rojo");
        assert!(composite.description.contains("Acompañado de arroz rojo."));
    }

    #[test]
    fn test_merge_order_is_exact() {
        let primary = main_dish();
        let secondary = side_dish();
        let composite = combine(&primary, &secondary, CompanionRole::Side);

        let mut expected = primary.ingredients.clone();
        expected.push(companion_marker(CompanionRole::Side, &secondary.name));
        expected.extend(secondary.ingredients.clone());
        assert_eq!(composite.ingredients, expected);

        let mut expected_steps = primary.steps.clone();
        expected_steps.push(companion_marker(CompanionRole::Side, &secondary.name));
        expected_steps.extend(secondary.steps.clone());
        assert_eq!(composite.steps, expected_steps);
    }

    #[test]
    fn test_composite_inherits_primary_identity() {
        let composite = combine(&main_dish(), &side_dish(), CompanionRole::Dessert);
        assert_eq!(composite.category, RecipeCategory::MainDish);
        assert_eq!(composite.difficulty, Difficulty::Easy);
        assert_eq!(composite.prep_time, "45 min");
        assert_eq!(composite.servings, 1);
        // Secondary nutrition is not summed in; plan-level aggregation only.
        assert_eq!(composite.nutrition.unwrap().calories, 450);
        assert!(!composite.is_favorite);
    }

    #[test]
    fn test_dessert_and_salad_naming() {
        let dessert = Recipe::new("d1", "Flan", RecipeCategory::Dessert);
        let composite = combine(&main_dish(), &dessert, CompanionRole::Dessert);
        assert_eq!(composite.id, "m1_postre_d1");
        assert_eq!(composite.name, "Enchiladas + Flan");
        assert!(composite.description.contains("Incluye postre: flan."));

        let salad = Recipe::new("l1", "Ensalada Verde", RecipeCategory::Salad);
        let stacked = combine(&composite, &salad, CompanionRole::Salad);
        assert_eq!(stacked.id, "m1_postre_d1_ensalada_l1");
        assert!(stacked.description.contains("Incluye ensalada: ensalada verde."));
    }
}
