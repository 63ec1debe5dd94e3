// ABOUTME: Library entry point for the weekly menu planning engine
// ABOUTME: Deterministic-per-week plan generation with nutritional aggregation
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![deny(unsafe_code)]

//! # Menu Planner
//!
//! Weekly menu planning and nutritional aggregation engine for recipe
//! catalogs. Given a read-only catalog of recipes with category tags and
//! nutritional metadata, the engine:
//!
//! - selects five daily recipes per week under category constraints,
//! - synthesizes composite dishes that merge a main with mandatory sides,
//!   optional desserts, and a salad,
//! - memoizes the result per week number so repeated requests return an
//!   identical plan, and
//! - aggregates nutritional data across the plan, with a rule-based
//!   recommendation generator on top.
//!
//! ## Architecture
//!
//! - **Models**: recipe, nutrition, and weekly menu data structures
//! - **Catalog**: the read-only recipe source, injected by the embedder
//! - **Planning**: pure selection, combination, aggregation, and advisory
//!   algorithms
//! - **Cache**: per-week memoization with a composite recipe index
//! - **Services**: the [`services::PlannerService`] facade wiring it together
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use menu_planner::catalog::InMemoryCatalog;
//! use menu_planner::config::PlannerConfig;
//! use menu_planner::services::PlannerService;
//! use std::sync::Arc;
//!
//! # async fn example() -> menu_planner::errors::AppResult<()> {
//! let catalog = Arc::new(InMemoryCatalog::new(vec![/* recipes */]));
//! let planner = PlannerService::new(catalog, PlannerConfig::from_env());
//!
//! let plan = planner.get_weekly_plan(None).await?;
//! let advice = planner.get_recommendations(Some(plan.week_number)).await?;
//! println!("{}: {} consejos", plan.name, advice.len());
//! # Ok(())
//! # }
//! ```

/// Weekly plan cache with composite recipe index
pub mod cache;

/// Recipe catalog interface and in-memory adapter
pub mod catalog;

/// Planner configuration with environment overrides
pub mod config;

/// Planning-domain constants and classification keywords
pub mod constants;

/// Unified error handling system with standard error codes
pub mod errors;

/// Production logging and structured output
pub mod logging;

/// Common data models for recipes and weekly menus
pub mod models;

/// Pure planning algorithms: selection, combination, aggregation, advisories
pub mod planning;

/// Domain service layer exposed to UI and other collaborators
pub mod services;
