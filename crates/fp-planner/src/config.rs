//! Planner configuration.

use fp_core::{Real, ensure_non_negative};
use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, PlannerResult};

/// What to do when two vertices sit at exactly the same location.
///
/// The force laws need the direction between the two points, which does not
/// exist at zero distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoincidencePolicy {
    /// The coincident pair exerts no force on each other.
    #[default]
    Skip,

    /// Normalise anyway. The resulting NaN/Infinity spreads through the
    /// layout; callers detect it with `Layout::is_finite`.
    Propagate,
}

impl CoincidencePolicy {
    /// Convert policy to human-readable name for diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            CoincidencePolicy::Skip => "skip",
            CoincidencePolicy::Propagate => "propagate",
        }
    }
}

/// Force-directed planner configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Iteration budget
    pub max_iterations: usize,
    /// Repulsion constant: force magnitude is `repulsion_strength / d²`
    pub repulsion_strength: Real,
    /// Spring constant: force magnitude is `attraction_strength * max(d - weight, 0)`
    pub attraction_strength: Real,
    /// Zero-distance handling
    pub coincidence: CoincidencePolicy,
    /// Stop early once the aggregate displacement (sum of squared net forces)
    /// of an iteration drops below this value. `None` always runs the full budget.
    pub convergence_threshold: Option<Real>,
    /// Compute per-vertex forces on the rayon thread pool
    pub parallel: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            repulsion_strength: 1.0,
            attraction_strength: 0.1,
            coincidence: CoincidencePolicy::default(),
            convergence_threshold: None,
            parallel: false,
        }
    }
}

impl PlannerConfig {
    /// Check that every parameter is usable.
    pub fn validate(&self) -> PlannerResult<()> {
        if self.max_iterations == 0 {
            return Err(PlannerError::InvalidConfig {
                what: "max_iterations must be at least 1".to_string(),
            });
        }

        for (value, what) in [
            (self.repulsion_strength, "repulsion_strength"),
            (self.attraction_strength, "attraction_strength"),
        ] {
            ensure_non_negative(value, what).map_err(|e| PlannerError::InvalidConfig {
                what: e.to_string(),
            })?;
        }

        if let Some(threshold) = self.convergence_threshold {
            if !(threshold.is_finite() && threshold > 0.0) {
                return Err(PlannerError::InvalidConfig {
                    what: format!("convergence_threshold must be finite and > 0, got {threshold}"),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_constants() {
        let config = PlannerConfig::default();
        assert_eq!(config.max_iterations, 1000);
        assert_eq!(config.repulsion_strength, 1.0);
        assert_eq!(config.attraction_strength, 0.1);
        assert_eq!(config.coincidence, CoincidencePolicy::Skip);
        assert_eq!(CoincidencePolicy::default(), CoincidencePolicy::Skip);
        assert!(config.convergence_threshold.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_iterations_rejected() {
        let config = PlannerConfig {
            max_iterations: 0,
            ..PlannerConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(PlannerError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn negative_strength_rejected() {
        let config = PlannerConfig {
            attraction_strength: -0.1,
            ..PlannerConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("attraction_strength"));
    }

    #[test]
    fn non_positive_threshold_rejected() {
        for threshold in [0.0, -1.0, f64::NAN] {
            let config = PlannerConfig {
                convergence_threshold: Some(threshold),
                ..PlannerConfig::default()
            };
            assert!(config.validate().is_err(), "threshold {threshold} accepted");
        }
    }

    #[test]
    fn partial_yaml_fills_defaults() {
        let config: PlannerConfig =
            serde_yaml::from_str("max_iterations: 50\ncoincidence: propagate\n").unwrap();
        assert_eq!(config.max_iterations, 50);
        assert_eq!(config.coincidence, CoincidencePolicy::Propagate);
        assert_eq!(config.repulsion_strength, 1.0);
        assert!(!config.parallel);
    }

    #[test]
    fn policy_names_are_stable() {
        assert_eq!(CoincidencePolicy::Skip.as_str(), "skip");
        assert_eq!(CoincidencePolicy::Propagate.as_str(), "propagate");
    }
}
