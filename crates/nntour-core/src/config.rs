//! Run configuration: how many points to draw and over what grid.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::types::TourError;

/// Configuration for a single routing run.
///
/// The point count is drawn uniformly from `min_points..max_points`
/// (half-open) and every coordinate uniformly from
/// `0..coordinate_bound`.
///
/// Fields are public; call [`validate`](Self::validate) (or go through
/// [`crate::route`], which does) before using a hand-built value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteConfig {
    /// Smallest point count that may be drawn.
    pub min_points: usize,

    /// Exclusive upper bound on the drawn point count.
    pub max_points: usize,

    /// Exclusive upper bound on both coordinates.
    pub coordinate_bound: i64,

    /// Seed for the random source. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl RouteConfig {
    /// Default for [`min_points`](Self::min_points).
    pub const DEFAULT_MIN_POINTS: usize = 4;
    /// Default for [`max_points`](Self::max_points).
    pub const DEFAULT_MAX_POINTS: usize = 24;
    /// Default for [`coordinate_bound`](Self::coordinate_bound).
    pub const DEFAULT_COORDINATE_BOUND: i64 = 100;

    /// Check the configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`TourError::InvalidConfig`] if `min_points` is zero, if
    /// `min_points >= max_points`, or if `coordinate_bound < 1`.
    pub fn validate(&self) -> Result<(), TourError> {
        if self.min_points < 1 {
            return Err(TourError::InvalidConfig(
                "min_points must be at least 1".to_string(),
            ));
        }
        if self.min_points >= self.max_points {
            return Err(TourError::InvalidConfig(format!(
                "min_points ({}) must be less than max_points ({})",
                self.min_points, self.max_points,
            )));
        }
        if self.coordinate_bound < 1 {
            return Err(TourError::InvalidConfig(format!(
                "coordinate_bound must be at least 1, got {}",
                self.coordinate_bound,
            )));
        }
        Ok(())
    }

    /// Random source for this run: seeded when `seed` is set.
    #[must_use]
    pub fn rng(&self) -> StdRng {
        self.seed
            .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64)
    }

    /// Draw a point count from `min_points..max_points`.
    ///
    /// # Errors
    ///
    /// Returns [`TourError::InvalidConfig`] if the configuration is invalid.
    pub fn draw_point_count<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<usize, TourError> {
        self.validate()?;
        Ok(rng.gen_range(self.min_points..self.max_points))
    }
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            min_points: Self::DEFAULT_MIN_POINTS,
            max_points: Self::DEFAULT_MAX_POINTS,
            coordinate_bound: Self::DEFAULT_COORDINATE_BOUND,
            seed: None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(RouteConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_min_points_rejected() {
        let config = RouteConfig {
            min_points: 0,
            ..RouteConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(TourError::InvalidConfig(msg)) if msg.contains("min_points")
        ));
    }

    #[test]
    fn min_equal_to_max_rejected() {
        let config = RouteConfig {
            min_points: 10,
            max_points: 10,
            ..RouteConfig::default()
        };
        assert!(matches!(config.validate(), Err(TourError::InvalidConfig(_))));
    }

    #[test]
    fn min_above_max_rejected() {
        let config = RouteConfig {
            min_points: 30,
            max_points: 10,
            ..RouteConfig::default()
        };
        assert!(matches!(config.validate(), Err(TourError::InvalidConfig(_))));
    }

    #[test]
    fn non_positive_bound_rejected() {
        let config = RouteConfig {
            coordinate_bound: 0,
            ..RouteConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(TourError::InvalidConfig(msg)) if msg.contains("coordinate_bound")
        ));
    }

    #[test]
    fn drawn_count_stays_in_range() {
        let config = RouteConfig {
            min_points: 3,
            max_points: 7,
            ..RouteConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let n = config.draw_point_count(&mut rng).unwrap();
            assert!((3..7).contains(&n), "drawn count {n} out of range");
        }
    }

    #[test]
    fn draw_rejects_invalid_config() {
        let config = RouteConfig {
            min_points: 5,
            max_points: 2,
            ..RouteConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(0);
        assert!(config.draw_point_count(&mut rng).is_err());
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let config = RouteConfig {
            seed: Some(42),
            ..RouteConfig::default()
        };
        let mut first = config.rng();
        let mut second = config.rng();
        let from_first: Vec<u32> = (0..5).map(|_| first.gen_range(0..1000)).collect();
        let from_second: Vec<u32> = (0..5).map(|_| second.gen_range(0..1000)).collect();
        assert_eq!(from_first, from_second);
    }

    #[test]
    fn serde_fills_missing_fields_with_defaults() {
        let config: RouteConfig = serde_json::from_str(r#"{"max_points": 50}"#).unwrap();
        assert_eq!(config.max_points, 50);
        assert_eq!(config.min_points, RouteConfig::DEFAULT_MIN_POINTS);
        assert_eq!(
            config.coordinate_bound,
            RouteConfig::DEFAULT_COORDINATE_BOUND
        );
        assert_eq!(config.seed, None);
    }
}
