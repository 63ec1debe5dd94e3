// ABOUTME: Domain service layer exposed to UI and other collaborators
// ABOUTME: Hosts the planner facade wiring catalog, selector, cache, and aggregation
//
// SPDX-License-Identifier: MIT OR Apache-2.0

/// Weekly plan facade: generation, lookup, summary, and recommendations
pub mod planner;

pub use planner::{current_week_number, PlannerService};
