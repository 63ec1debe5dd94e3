// ABOUTME: Recipe catalog seam consumed by the planning engine
// ABOUTME: RecipeCatalog trait plus the Vec-backed InMemoryCatalog adapter
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Recipe Catalog Interface
//!
//! The catalog is an external collaborator: it owns the original recipes and
//! is never mutated by the engine. Embedding applications implement
//! [`RecipeCatalog`]; [`InMemoryCatalog`] covers the common static-list case.

use crate::models::{Recipe, RecipeCategory};
use async_trait::async_trait;

/// Read-only recipe catalog consumed by the planning engine
#[async_trait]
pub trait RecipeCatalog: Send + Sync {
    /// All candidate recipes
    async fn get_all(&self) -> Vec<Recipe>;

    /// Look up a single recipe by id
    async fn get_by_id(&self, id: &str) -> Option<Recipe>;

    /// All recipes with the given category
    async fn get_by_category(&self, category: RecipeCategory) -> Vec<Recipe>;
}

/// Static catalog backed by an in-memory recipe list
pub struct InMemoryCatalog {
    recipes: Vec<Recipe>,
}

impl InMemoryCatalog {
    /// Create a catalog from a static recipe list
    ///
    /// Recipe ids must be unique; duplicates are kept (first wins on lookup)
    /// and reported via a warning.
    #[must_use]
    pub fn new(recipes: Vec<Recipe>) -> Self {
        let mut seen = std::collections::HashSet::new();
        for recipe in &recipes {
            if !seen.insert(recipe.id.as_str()) {
                tracing::warn!(id = %recipe.id, "duplicate recipe id in catalog");
            }
        }
        Self { recipes }
    }

    /// Number of recipes in the catalog
    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Whether the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

#[async_trait]
impl RecipeCatalog for InMemoryCatalog {
    async fn get_all(&self) -> Vec<Recipe> {
        self.recipes.clone()
    }

    async fn get_by_id(&self, id: &str) -> Option<Recipe> {
        self.recipes.iter().find(|r| r.id == id).cloned()
    }

    async fn get_by_category(&self, category: RecipeCategory) -> Vec<Recipe> {
        self.recipes
            .iter()
            .filter(|r| r.category == category)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory_catalog_lookups() {
        let catalog = InMemoryCatalog::new(vec![
            Recipe::new("m1", "Tacos", RecipeCategory::MainDish),
            Recipe::new("q1", "Pozole", RecipeCategory::Soup),
        ]);

        assert_eq!(catalog.get_all().await.len(), 2);
        assert_eq!(catalog.get_by_id("q1").await.unwrap().name, "Pozole");
        assert!(catalog.get_by_id("missing").await.is_none());
        assert_eq!(
            catalog.get_by_category(RecipeCategory::MainDish).await.len(),
            1
        );
    }
}
