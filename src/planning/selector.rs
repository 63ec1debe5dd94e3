// ABOUTME: Category-constrained random selection of five daily recipes per week
// ABOUTME: Generic over rand::Rng so tests can assert same-seed-same-plan directly
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Weekly Selector
//!
//! Builds one five-day plan from the catalog: a complete main, a
//! side-requiring main paired with its side, a soup, and two more
//! non-duplicate mains, then a probabilistic dessert pass and an
//! unconditional salad pass that stack composites onto the chosen days.
//!
//! Selection is randomized; determinism is a property of the plan cache,
//! not of this function. Callers inject the random source.

use crate::config::PlannerConfig;
use crate::constants::planning::{EXCLUDED_NAMES, SIDE_REQUIRED_NAMES, WEEKLY_MENU_DAYS};
use crate::errors::{AppError, AppResult};
use crate::models::{Recipe, RecipeCategory, WeeklyMenu};
use crate::planning::combinator::{combine, CompanionRole};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;
use tracing::debug;

/// Catalog recipes partitioned into the pools the selection algorithm
/// draws from, with excluded names already removed.
#[derive(Debug, Default)]
pub struct CatalogPools {
    /// Main dishes that can stand alone
    pub complete_mains: Vec<Recipe>,
    /// Main dishes that must always be paired with a side
    pub mains_requiring_side: Vec<Recipe>,
    /// Soups and stews
    pub soups: Vec<Recipe>,
    /// Side dishes
    pub sides: Vec<Recipe>,
    /// Desserts
    pub desserts: Vec<Recipe>,
    /// Salads
    pub salads: Vec<Recipe>,
}

impl CatalogPools {
    /// Partition catalog recipes into selection pools
    #[must_use]
    pub fn partition(recipes: &[Recipe]) -> Self {
        let mut pools = Self::default();
        for recipe in recipes {
            if EXCLUDED_NAMES.contains(&recipe.name.as_str()) {
                continue;
            }
            match recipe.category {
                RecipeCategory::MainDish => {
                    if SIDE_REQUIRED_NAMES.contains(&recipe.name.as_str()) {
                        pools.mains_requiring_side.push(recipe.clone());
                    } else {
                        pools.complete_mains.push(recipe.clone());
                    }
                }
                RecipeCategory::Soup => pools.soups.push(recipe.clone()),
                RecipeCategory::SideDish => pools.sides.push(recipe.clone()),
                RecipeCategory::Dessert => pools.desserts.push(recipe.clone()),
                RecipeCategory::Salad => pools.salads.push(recipe.clone()),
                RecipeCategory::Drink | RecipeCategory::Breakfast => {}
            }
        }
        pools
    }
}

/// Select the five-day plan for `week_number` from `recipes`.
///
/// Returns the constructed menu together with every composite recipe the
/// combinator produced along the way (including intermediates later replaced
/// by a stacking pass) so the cache can index them atomically with the plan.
///
/// # Errors
///
/// Returns `CatalogInsufficient` when the complete-main-dish or soup pools
/// are empty, and `InvalidMenuShape` when the eligible pools cannot fill
/// five days.
pub fn select<R: Rng>(
    week_number: u32,
    recipes: &[Recipe],
    config: &PlannerConfig,
    rng: &mut R,
) -> AppResult<(WeeklyMenu, Vec<Recipe>)> {
    let pools = CatalogPools::partition(recipes);
    let mut composites: Vec<Recipe> = Vec::new();
    let mut days: Vec<Recipe> = Vec::with_capacity(WEEKLY_MENU_DAYS);

    // Day 1: complete main dish
    let day_one = pools
        .complete_mains
        .choose(rng)
        .ok_or_else(|| AppError::catalog_insufficient("complete main dishes"))?;
    days.push(day_one.clone());

    // Day 2: side-requiring main paired with its side, or another complete main
    if let (Some(main), Some(side)) = (
        pools.mains_requiring_side.choose(rng),
        pools.sides.choose(rng),
    ) {
        let paired = combine(main, side, CompanionRole::Side);
        debug!(id = %paired.id, "paired side-requiring main");
        composites.push(paired.clone());
        days.push(paired);
    } else {
        let fallback = pools
            .complete_mains
            .choose(rng)
            .ok_or_else(|| AppError::catalog_insufficient("complete main dishes"))?;
        days.push(fallback.clone());
    }

    // Day 3: soup or stew
    let soup = pools
        .soups
        .choose(rng)
        .ok_or_else(|| AppError::catalog_insufficient("soups and stews"))?;
    days.push(soup.clone());

    // Days 4-5: non-duplicate complete mains, skipped when the pool is exhausted
    for _ in 0..2 {
        let used: HashSet<&str> = days.iter().map(|r| r.id.as_str()).collect();
        let fresh: Vec<&Recipe> = pools
            .complete_mains
            .iter()
            .filter(|r| !used.contains(r.id.as_str()))
            .collect();
        if let Some(pick) = fresh.choose(rng) {
            days.push((*pick).clone());
        }
    }

    // Backfill from the full post-exclusion catalog until five days exist.
    // Side-requiring mains stay out: they must never appear alone.
    while days.len() < WEEKLY_MENU_DAYS {
        let used: HashSet<&str> = days.iter().map(|r| r.id.as_str()).collect();
        let candidates: Vec<&Recipe> = recipes
            .iter()
            .filter(|r| {
                !EXCLUDED_NAMES.contains(&r.name.as_str())
                    && !SIDE_REQUIRED_NAMES.contains(&r.name.as_str())
                    && !used.contains(r.id.as_str())
            })
            .collect();
        match candidates.choose(rng) {
            Some(pick) => days.push((*pick).clone()),
            None => break,
        }
    }

    // Dessert pass: attach desserts to two days with the configured
    // probability, otherwise to one
    if !pools.desserts.is_empty() && !days.is_empty() {
        let attach_count = if rng.gen_bool(config.dessert_double_probability) {
            2
        } else {
            1
        };
        let mut indices: Vec<usize> = (0..days.len()).collect();
        indices.shuffle(rng);
        for &index in indices.iter().take(attach_count) {
            if let Some(dessert) = pools.desserts.choose(rng) {
                let sweetened = combine(&days[index], dessert, CompanionRole::Dessert);
                composites.push(sweetened.clone());
                days[index] = sweetened;
            }
        }
    }

    // Salad pass: always runs after the dessert pass, stacking onto whatever
    // each day currently holds. Salads are distinct whenever the pool allows.
    if !pools.salads.is_empty() && !days.is_empty() {
        let mut shuffled_salads = pools.salads.clone();
        shuffled_salads.shuffle(rng);
        let mut order: Vec<usize> = (0..days.len()).collect();
        order.shuffle(rng);
        for (position, &index) in order.iter().enumerate() {
            let salad = &shuffled_salads[position % shuffled_salads.len()];
            let dressed = combine(&days[index], salad, CompanionRole::Salad);
            composites.push(dressed.clone());
            days[index] = dressed;
        }
    }

    debug!(
        week_number,
        days = days.len(),
        composites = composites.len(),
        "weekly selection complete"
    );

    let menu = WeeklyMenu::new(
        format!("Recetas de la Semana #{week_number}"),
        week_number,
        days,
    )?;
    Ok((menu, composites))
}
