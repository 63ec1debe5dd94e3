// ABOUTME: Rule-based advisory generation from an aggregated weekly summary
// ABOUTME: Ordered threshold rules, each appending zero or one advisory line
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Recommendation Generator
//!
//! Maps a [`WeeklySummary`] to human-readable advisory strings. Pure and
//! order-stable: rules are evaluated in a fixed order and the calorie rule
//! always produces a line, so the result is never empty.

use crate::config::PlannerConfig;
use crate::planning::aggregator::WeeklySummary;

/// Generate advisory lines for a weekly summary.
///
/// Rules, in order:
/// 1. Calorie band: low warning, high warning, or balanced confirmation.
/// 2. Vegetarian variety: suggestion at zero, confirmation at two or more.
/// 3. Beginner-friendliness at three or more Easy days.
/// 4. Busy-day suitability at three or more quick days.
#[must_use]
pub fn recommend(summary: &WeeklySummary, config: &PlannerConfig) -> Vec<String> {
    let mut lines = Vec::new();

    if summary.avg_calories < config.low_calorie_avg {
        lines.push(format!(
            "El promedio semanal es de {:.0} calorías por día, algo bajo. Considera porciones más generosas o una colación nutritiva.",
            summary.avg_calories
        ));
    } else if summary.avg_calories > config.high_calorie_avg {
        lines.push(format!(
            "El promedio semanal es de {:.0} calorías por día, algo alto. Considera platillos más ligeros.",
            summary.avg_calories
        ));
    } else {
        lines.push(format!(
            "El menú de esta semana tiene un balance calórico adecuado ({:.0} calorías por día en promedio).",
            summary.avg_calories
        ));
    }

    if summary.vegetarian_count == 0 {
        lines.push(
            "No hay platillos vegetarianos esta semana. Agrega variedad vegetariana a tu menú."
                .to_owned(),
        );
    } else if summary.vegetarian_count >= config.vegetarian_variety_min {
        lines.push(format!(
            "Buena variedad vegetariana esta semana ({} platillos sin carne).",
            summary.vegetarian_count
        ));
    }

    if summary.easy_count >= config.easy_day_threshold {
        lines.push(
            "La mayoría de los platillos son fáciles de preparar, ideal para principiantes."
                .to_owned(),
        );
    }

    if summary.quick_count >= config.quick_day_threshold {
        lines.push(format!(
            "Varios platillos se preparan en {} minutos o menos, perfecto para días ocupados.",
            config.quick_meal_max_minutes
        ));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(avg_calories: f64) -> WeeklySummary {
        WeeklySummary {
            total_calories: (avg_calories * 5.0) as u32,
            avg_calories,
            total_protein: 0,
            total_carbs: 0,
            total_fat: 0,
            vegetarian_count: 1,
            quick_count: 0,
            easy_count: 0,
        }
    }

    #[test]
    fn test_calorie_band_monotonicity() {
        let config = PlannerConfig::default();

        let low = recommend(&summary(350.0), &config);
        assert!(low.iter().any(|l| l.contains("algo bajo")));

        let high = recommend(&summary(900.0), &config);
        assert!(high.iter().any(|l| l.contains("algo alto")));

        let balanced = recommend(&summary(600.0), &config);
        assert!(balanced.iter().any(|l| l.contains("balance calórico adecuado")));
    }

    #[test]
    fn test_always_returns_at_least_one_line() {
        let config = PlannerConfig::default();
        assert!(!recommend(&summary(0.0), &config).is_empty());
    }

    #[test]
    fn test_vegetarian_rules() {
        let config = PlannerConfig::default();

        let mut none = summary(600.0);
        none.vegetarian_count = 0;
        assert!(recommend(&none, &config)
            .iter()
            .any(|l| l.contains("Agrega variedad vegetariana")));

        let mut one = summary(600.0);
        one.vegetarian_count = 1;
        assert!(!recommend(&one, &config)
            .iter()
            .any(|l| l.contains("vegetariana")));

        let mut two = summary(600.0);
        two.vegetarian_count = 2;
        assert!(recommend(&two, &config)
            .iter()
            .any(|l| l.contains("Buena variedad vegetariana")));
    }

    #[test]
    fn test_easy_and_quick_rules() {
        let config = PlannerConfig::default();
        let mut s = summary(600.0);
        s.easy_count = 3;
        s.quick_count = 3;
        let lines = recommend(&s, &config);
        assert!(lines.iter().any(|l| l.contains("principiantes")));
        assert!(lines.iter().any(|l| l.contains("días ocupados")));
        // Order-stable: calorie line is always first.
        assert!(lines[0].contains("calorías"));
    }
}
