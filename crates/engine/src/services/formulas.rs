//! One-rep-max estimation formulas.
//!
//! Each formula is a pure mapping from a performed set (reps, weight) to an
//! estimated 1RM. Evaluation goes through `f64` for the transcendental parts
//! and comes back as a `Decimal` rounded to 2 decimal places.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{EngineError, Result};
use crate::models::Formula;

/// Epley's per-rep coefficient: `weight × (1 + 0.0333 × reps)`.
const EPLEY_COEFFICIENT: f64 = 0.0333;

/// Estimates a one-rep max from a performed set.
///
/// Inputs are validated rather than assumed: zero reps or a non-positive
/// weight is a caller contract violation and fails with an explicit error,
/// never a silently wrong estimate. Brzycki is undefined at 37+ reps
/// (non-positive denominator) and fails fast there.
pub fn estimate_one_rep_max(formula: Formula, reps: u32, weight: Decimal) -> Result<Decimal> {
    if reps == 0 {
        return Err(EngineError::InvalidInput(
            "reps must be at least 1".to_string(),
        ));
    }
    if weight <= Decimal::ZERO {
        return Err(EngineError::InvalidInput(
            "weight must be positive".to_string(),
        ));
    }

    let w = weight
        .to_f64()
        .ok_or_else(|| EngineError::InvalidInput("weight is not representable".to_string()))?;
    let r = f64::from(reps);

    let estimate = match formula {
        Formula::Epley => w * (1.0 + EPLEY_COEFFICIENT * r),
        Formula::Brzycki => {
            if reps >= 37 {
                return Err(EngineError::FormulaDomain {
                    formula: formula.name().to_string(),
                    reps,
                });
            }
            w * 36.0 / (37.0 - r)
        }
        Formula::Lander => w * 100.0 / (101.3 - 2.67123 * r),
        Formula::Lombardi => w * r.powf(0.1),
        Formula::Custom { coefficient } => w * (1.0 + coefficient * r),
    };

    let estimate = Decimal::from_f64_retain(estimate)
        .ok_or_else(|| EngineError::InvalidInput("estimate is not representable".to_string()))?;

    Ok(estimate.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
}

/// Estimates an updated 1RM from an AMRAP set's actual performance.
///
/// Always uses Epley; this is the value offered back to the user as a
/// candidate new personal record after a rep-out set.
pub fn amrap_estimate(reps: u32, weight: Decimal) -> Result<Decimal> {
    estimate_one_rep_max(Formula::Epley, reps, weight)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epley() {
        // 225 × (1 + 0.0333 × 5) = 262.4625
        let est = estimate_one_rep_max(Formula::Epley, 5, Decimal::from(225)).unwrap();
        assert_eq!(est, Decimal::new(26246, 2));
    }

    #[test]
    fn test_brzycki() {
        // 225 × 36 / 32 = 253.125
        let est = estimate_one_rep_max(Formula::Brzycki, 5, Decimal::from(225)).unwrap();
        assert_eq!(est, Decimal::new(25313, 2));
    }

    #[test]
    fn test_brzycki_domain_error() {
        let err = estimate_one_rep_max(Formula::Brzycki, 37, Decimal::from(100)).unwrap_err();
        assert!(matches!(err, EngineError::FormulaDomain { reps: 37, .. }));

        assert!(estimate_one_rep_max(Formula::Brzycki, 50, Decimal::from(100)).is_err());
    }

    #[test]
    fn test_lander() {
        // 200 × 100 / (101.3 − 2.67123 × 3) = 214.3937...
        let est = estimate_one_rep_max(Formula::Lander, 3, Decimal::from(200)).unwrap();
        assert_eq!(est, Decimal::new(21439, 2));
    }

    #[test]
    fn test_lombardi_single_rep_is_identity() {
        // 1^0.1 = 1
        let est = estimate_one_rep_max(Formula::Lombardi, 1, Decimal::from(300)).unwrap();
        assert_eq!(est, Decimal::from(300));
    }

    #[test]
    fn test_invalid_inputs_are_rejected() {
        assert!(estimate_one_rep_max(Formula::Epley, 0, Decimal::from(225)).is_err());
        assert!(estimate_one_rep_max(Formula::Epley, 5, Decimal::ZERO).is_err());
        assert!(estimate_one_rep_max(Formula::Epley, 5, Decimal::from(-10)).is_err());
    }

    #[test]
    fn test_amrap_estimate_uses_epley() {
        let weight = Decimal::from(305);
        assert_eq!(
            amrap_estimate(8, weight).unwrap(),
            estimate_one_rep_max(Formula::Epley, 8, weight).unwrap()
        );
    }
}
