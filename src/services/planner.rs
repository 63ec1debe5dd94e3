// ABOUTME: Planner service facade: plan generation, recipe lookup, summary, advisories
// ABOUTME: Owns the week-number derivation and the seedable RNG wiring for selection
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Planner Service
//!
//! The plan interface exposed to collaborators. The first caller for a
//! not-yet-cached week performs the selection synchronously; everyone else
//! (including concurrent racers) receives the identical stored plan. A failed
//! week is never cached, so a later call with a richer catalog may succeed.

use crate::cache::WeeklyPlanCache;
use crate::catalog::RecipeCatalog;
use crate::config::PlannerConfig;
use crate::errors::AppResult;
use crate::models::{Recipe, WeeklyMenu};
use crate::planning::aggregator::{aggregate, WeeklySummary};
use crate::planning::recommendations::recommend;
use crate::planning::selector::select;
use chrono::{DateTime, Datelike, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::sync::Arc;
use tracing::{debug, info};

/// Facade over the planning engine, wired by the composition root
pub struct PlannerService {
    catalog: Arc<dyn RecipeCatalog>,
    cache: WeeklyPlanCache,
    config: PlannerConfig,
    seed: Option<u64>,
}

impl PlannerService {
    /// Create a planner over a catalog with the given configuration
    #[must_use]
    pub fn new(catalog: Arc<dyn RecipeCatalog>, config: PlannerConfig) -> Self {
        Self {
            catalog,
            cache: WeeklyPlanCache::new(),
            config,
            seed: None,
        }
    }

    /// Fix the random seed so selection is reproducible. Each week draws
    /// from a stream derived from the seed and the week number.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The underlying plan cache
    #[must_use]
    pub const fn cache(&self) -> &WeeklyPlanCache {
        &self.cache
    }

    /// Get (or compute once) the weekly plan. Defaults to the current week.
    ///
    /// # Errors
    ///
    /// Returns `CatalogInsufficient` or `InvalidMenuShape` when the catalog
    /// cannot supply a valid five-day plan; the failure is not cached.
    pub async fn get_weekly_plan(&self, week_number: Option<u32>) -> AppResult<WeeklyMenu> {
        let week_number = week_number.unwrap_or_else(current_week_number);

        if let Some(plan) = self.cache.plan(week_number).await {
            debug!(week_number, "weekly plan cache hit");
            return Ok(plan);
        }

        let recipes = self.catalog.get_all().await;
        let (menu, composites) = match self.seed {
            Some(seed) => {
                let mut rng = ChaCha8Rng::seed_from_u64(seed ^ u64::from(week_number));
                select(week_number, &recipes, &self.config, &mut rng)?
            }
            None => {
                let mut rng = StdRng::from_entropy();
                select(week_number, &recipes, &self.config, &mut rng)?
            }
        };
        info!(
            week_number,
            composites = composites.len(),
            "generated weekly plan"
        );

        // insert() re-checks under the write lock; a race loser adopts the
        // winner's plan here instead of its own discarded computation.
        Ok(self.cache.insert(week_number, menu, composites).await)
    }

    /// Look up a recipe by id: composite index first, then the catalog
    pub async fn get_recipe_by_id(&self, id: &str) -> Option<Recipe> {
        if let Some(composite) = self.cache.composite(id).await {
            return Some(composite);
        }
        self.catalog.get_by_id(id).await
    }

    /// Aggregated nutritional summary for a week's plan
    ///
    /// # Errors
    ///
    /// Propagates plan-generation failures for uncached weeks.
    pub async fn get_summary(&self, week_number: Option<u32>) -> AppResult<WeeklySummary> {
        let menu = self.get_weekly_plan(week_number).await?;
        Ok(aggregate(&menu, &self.config))
    }

    /// Advisory lines for a week's plan
    ///
    /// # Errors
    ///
    /// Propagates plan-generation failures for uncached weeks.
    pub async fn get_recommendations(&self, week_number: Option<u32>) -> AppResult<Vec<String>> {
        let summary = self.get_summary(week_number).await?;
        Ok(recommend(&summary, &self.config))
    }
}

/// ISO week-of-year for the current date, used as the default plan key
#[must_use]
pub fn current_week_number() -> u32 {
    week_number_for(Utc::now())
}

fn week_number_for(now: DateTime<Utc>) -> u32 {
    let week = now.iso_week().week();
    if (1..=53).contains(&week) {
        week
    } else {
        fallback_week_number(now)
    }
}

// Degraded but deterministic substitute when the calendar calculation
// produces an out-of-range week.
fn fallback_week_number(now: DateTime<Utc>) -> u32 {
    let epoch_days = now.timestamp().div_euclid(86_400);
    u32::try_from((epoch_days / 7).rem_euclid(52) + 1).unwrap_or(1)
}
