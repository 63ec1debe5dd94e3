// ABOUTME: In-memory weekly plan cache keyed by week number with a composite recipe index
// ABOUTME: Single RwLock over both maps so plan storage and composite indexing are atomic
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Weekly Plan Cache
//!
//! Memoizes one [`WeeklyMenu`] per week number and indexes every composite
//! recipe by id for independent lookup. Explicitly constructed and injectable
//! rather than a module-level singleton, so tests get a fresh cache each.
//!
//! The cache is unbounded by design: a cached week is never recomputed or
//! evicted for the process lifetime (bounded in practice by ~52 distinct
//! weeks per year). [`WeeklyPlanCache::plan_count`] exposes growth to the
//! embedding process.

use crate::models::{Recipe, WeeklyMenu};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

#[derive(Debug, Default)]
struct CacheInner {
    plans: HashMap<u32, WeeklyMenu>,
    composites: HashMap<String, Recipe>,
}

/// Shared in-memory store for weekly plans and their composite recipes
#[derive(Debug, Clone, Default)]
pub struct WeeklyPlanCache {
    inner: Arc<RwLock<CacheInner>>,
}

impl WeeklyPlanCache {
    /// Create an empty cache
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the cached plan for a week
    pub async fn plan(&self, week_number: u32) -> Option<WeeklyMenu> {
        self.inner.read().await.plans.get(&week_number).cloned()
    }

    /// Look up a composite recipe by its generated id
    pub async fn composite(&self, id: &str) -> Option<Recipe> {
        self.inner.read().await.composites.get(id).cloned()
    }

    /// Store a freshly computed plan together with its composite recipes.
    ///
    /// The check-then-insert is atomic under the write lock: when another
    /// caller already stored a plan for this week, that stored plan is
    /// returned and the argument is discarded, so concurrent misses for the
    /// same week can never yield two different plans. Composite indexing
    /// happens under the same lock acquisition as plan storage, leaving no
    /// window where a day's composite is in the plan but not yet lookupable.
    pub async fn insert(
        &self,
        week_number: u32,
        menu: WeeklyMenu,
        composites: Vec<Recipe>,
    ) -> WeeklyMenu {
        let mut inner = self.inner.write().await;
        if let Some(existing) = inner.plans.get(&week_number) {
            debug!(week_number, "discarding losing plan computation");
            return existing.clone();
        }
        for composite in composites {
            inner.composites.insert(composite.id.clone(), composite);
        }
        inner.plans.insert(week_number, menu.clone());
        debug!(week_number, "stored weekly plan");
        menu
    }

    /// Number of cached weekly plans
    pub async fn plan_count(&self) -> usize {
        self.inner.read().await.plans.len()
    }

    /// Number of indexed composite recipes
    pub async fn composite_count(&self) -> usize {
        self.inner.read().await.composites.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecipeCategory;

    fn menu(week: u32, day_id: &str) -> WeeklyMenu {
        let days = (0..5)
            .map(|i| {
                Recipe::new(
                    format!("{day_id}{i}"),
                    format!("Platillo {i}"),
                    RecipeCategory::MainDish,
                )
            })
            .collect();
        WeeklyMenu::new("Semana", week, days).unwrap()
    }

    #[tokio::test]
    async fn test_insert_is_first_writer_wins() {
        let cache = WeeklyPlanCache::new();
        let first = cache.insert(1, menu(1, "a"), Vec::new()).await;
        let second = cache.insert(1, menu(1, "b"), Vec::new()).await;
        assert_eq!(first, second);
        assert_eq!(cache.plan(1).await.unwrap().days[0].id, "a0");
        assert_eq!(cache.plan_count().await, 1);
    }

    #[tokio::test]
    async fn test_composites_indexed_with_plan() {
        let cache = WeeklyPlanCache::new();
        let composite = Recipe::new("m1_con_s1", "Combinado", RecipeCategory::MainDish);
        cache.insert(2, menu(2, "c"), vec![composite]).await;
        assert!(cache.composite("m1_con_s1").await.is_some());
        assert!(cache.composite("unknown").await.is_none());
        assert_eq!(cache.composite_count().await, 1);
    }
}
