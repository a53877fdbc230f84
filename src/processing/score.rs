//! Score combiner: merges skill and experience signals into a 0-100 score

use crate::config::ScoringConfig;
use serde::{Deserialize, Serialize};

/// How a total score was put together, for rendering next to the score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub skill_fraction: f64,
    pub skill_points: f64,
    pub experience_points: f64,
    pub total_score: u8,
}

#[derive(Debug, Clone, Copy)]
pub struct ScoreCombiner {
    weights: ScoringConfig,
}

impl ScoreCombiner {
    pub fn new(weights: ScoringConfig) -> Self {
        Self { weights }
    }

    pub fn skill_points(&self, skill_fraction: f64) -> f64 {
        skill_fraction * self.weights.skill_weight
    }

    /// Full credit when there is no minimum or it is met. Below the minimum the
    /// prorated share is discounted again by `partial_experience_factor`, so a
    /// candidate at half the required tenure gets a quarter of the points with
    /// default weights. No detected experience earns nothing.
    pub fn experience_points(&self, minimum_years: u32, detected_years: u32) -> f64 {
        let weight = self.weights.experience_weight;

        if minimum_years == 0 || detected_years >= minimum_years {
            weight
        } else if detected_years > 0 {
            (detected_years as f64 / minimum_years as f64)
                * weight
                * self.weights.partial_experience_factor
        } else {
            0.0
        }
    }

    pub fn combine(
        &self,
        skill_fraction: f64,
        minimum_years: u32,
        detected_years: u32,
    ) -> ScoreBreakdown {
        let skill_points = self.skill_points(skill_fraction);
        let experience_points = self.experience_points(minimum_years, detected_years);

        ScoreBreakdown {
            skill_fraction,
            skill_points,
            experience_points,
            total_score: clamp_score(skill_points + experience_points),
        }
    }
}

impl Default for ScoreCombiner {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}

/// Round half up and clamp into [0, 100]. NaN maps to 0.
pub fn clamp_score(raw: f64) -> u8 {
    raw.round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_experience_points_branches() {
        let combiner = ScoreCombiner::default();

        assert_eq!(combiner.experience_points(0, 0), 30.0);
        assert_eq!(combiner.experience_points(0, 12), 30.0);
        assert_eq!(combiner.experience_points(5, 5), 30.0);
        assert_eq!(combiner.experience_points(5, 9), 30.0);
        assert!((combiner.experience_points(5, 2) - 6.0).abs() < 1e-9);
        assert_eq!(combiner.experience_points(5, 0), 0.0);
    }

    #[test]
    fn test_partial_experience_is_double_discounted() {
        let combiner = ScoreCombiner::default();
        // half the tenure: 0.5 prorate * 0.5 discount = a quarter of 30
        assert!((combiner.experience_points(10, 5) - 7.5).abs() < 1e-9);
    }

    #[test]
    fn test_combine_rounds() {
        let combiner = ScoreCombiner::default();

        let breakdown = combiner.combine(2.0 / 3.0, 5, 6);
        assert!((breakdown.skill_points - 46.666_666).abs() < 1e-3);
        assert_eq!(breakdown.total_score, 77);

        let breakdown = combiner.combine(1.0 / 3.0, 5, 2);
        assert_eq!(breakdown.total_score, 29);
    }

    #[test]
    fn test_monotonic_in_detected_years() {
        let combiner = ScoreCombiner::default();
        for minimum in 1..=15 {
            let mut previous = 0;
            for detected in 0..=minimum + 2 {
                let score = combiner.combine(0.5, minimum, detected).total_score;
                assert!(score >= previous, "score dropped at {}/{}", detected, minimum);
                previous = score;
            }
        }
    }

    #[test]
    fn test_clamp_score() {
        assert_eq!(clamp_score(-12.0), 0);
        assert_eq!(clamp_score(0.49), 0);
        assert_eq!(clamp_score(0.5), 1);
        assert_eq!(clamp_score(99.5), 100);
        assert_eq!(clamp_score(250.0), 100);
        assert_eq!(clamp_score(f64::NAN), 0);
    }

    #[test]
    fn test_oversized_weights_are_clamped() {
        let combiner = ScoreCombiner::new(ScoringConfig {
            skill_weight: 90.0,
            experience_weight: 40.0,
            partial_experience_factor: 0.5,
        });
        assert_eq!(combiner.combine(1.0, 0, 0).total_score, 100);
    }
}
