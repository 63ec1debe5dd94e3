// ABOUTME: Planning engine namespace: selection, combination, aggregation, advisories
// ABOUTME: Pure algorithms over catalog recipes; stateful caching lives in crate::cache
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Planning Engine
//!
//! Pure planning algorithms: the recipe combinator that synthesizes composite
//! dishes, the category-constrained weekly selector, the nutritional
//! aggregator, and the rule-based recommendation generator.

/// Nutritional aggregation over a weekly plan
pub mod aggregator;

/// Composite-recipe synthesis (main + side/dessert/salad)
pub mod combinator;

/// Rule-based advisory generation from a weekly summary
pub mod recommendations;

/// Category-constrained weekly selection
pub mod selector;

pub use aggregator::{aggregate, parse_prep_minutes, WeeklySummary};
pub use combinator::{combine, companion_marker, CompanionRole};
pub use recommendations::recommend;
pub use selector::{select, CatalogPools};
