//! Training-max derivation and plate-increment weight rounding.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Fraction of the true 1RM used as the training max.
const TRAINING_MAX_FACTOR: Decimal = Decimal::from_parts(9, 0, 0, false, 1);

/// Plate-rounding rules for converting a percentage of the training max
/// into a loadable bar weight.
///
/// The defaults encode a pounds-and-standard-plates gym: fractional 2.5 lb
/// jumps are practical under the threshold, heavier bars are loaded in 5 lb
/// jumps. Kilogram setups should supply their own values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlateRounding {
    /// Raw weights below this round to `small_increment`, at or above it to
    /// `large_increment`.
    pub threshold: Decimal,
    pub small_increment: Decimal,
    pub large_increment: Decimal,
}

impl Default for PlateRounding {
    fn default() -> Self {
        Self {
            threshold: Decimal::from(200),
            small_increment: Decimal::new(25, 1),
            large_increment: Decimal::from(5),
        }
    }
}

/// Derives the training max: `one_rep_max × 0.9`, rounded half-up to a
/// whole unit. Always `<= one_rep_max` for positive input.
pub fn training_max(one_rep_max: Decimal) -> Decimal {
    (one_rep_max * TRAINING_MAX_FACTOR)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Computes the bar weight for a percentage of the training max, rounded
/// half-up to the nearest usable plate increment.
pub fn weight_for_percentage(
    training_max: Decimal,
    percentage: u32,
    rounding: &PlateRounding,
) -> Decimal {
    let raw = training_max * Decimal::from(percentage) / Decimal::from(100);
    let increment = if raw < rounding.threshold {
        rounding.small_increment
    } else {
        rounding.large_increment
    };

    (raw / increment).round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero) * increment
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_training_max_rounds_half_up() {
        assert_eq!(training_max(Decimal::from(400)), Decimal::from(360));
        // 315 × 0.9 = 283.5
        assert_eq!(training_max(Decimal::from(315)), Decimal::from(284));
    }

    #[test]
    fn test_training_max_never_exceeds_one_rep_max() {
        for orm in 1..=500 {
            let orm = Decimal::from(orm);
            assert!(training_max(orm) <= orm);
        }
    }

    #[test]
    fn test_heavy_weights_round_to_five() {
        let rounding = PlateRounding::default();
        // 360 × 85% = 306 → nearest 5 is 305
        assert_eq!(
            weight_for_percentage(Decimal::from(360), 85, &rounding),
            Decimal::from(305)
        );
        // 450 × 85% = 382.5 → half-up to nearest 5 is 385
        assert_eq!(
            weight_for_percentage(Decimal::from(450), 85, &rounding),
            Decimal::from(385)
        );
    }

    #[test]
    fn test_light_weights_round_to_two_point_five() {
        let rounding = PlateRounding::default();
        // 180 × 65% = 117 → nearest 2.5 is 117.5
        assert_eq!(
            weight_for_percentage(Decimal::from(180), 65, &rounding),
            Decimal::new(1175, 1)
        );
    }

    #[test]
    fn test_custom_increments() {
        // A kilogram setup loading in 1.25 / 2.5 kg jumps
        let rounding = PlateRounding {
            threshold: Decimal::from(100),
            small_increment: Decimal::new(125, 2),
            large_increment: Decimal::new(25, 1),
        };
        // 90 × 75% = 67.5, already on a 1.25 boundary
        assert_eq!(
            weight_for_percentage(Decimal::from(90), 75, &rounding),
            Decimal::new(675, 1)
        );
    }
}
