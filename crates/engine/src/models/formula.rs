use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One-rep-max estimation formula.
///
/// A closed set of named estimators. `Custom` is an Epley-shaped linear
/// estimator with a caller-supplied per-rep coefficient, for users who want
/// to tune the slope to their own rep-max history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Formula {
    Epley,
    Brzycki,
    Lander,
    Lombardi,
    Custom { coefficient: f64 },
}

impl Formula {
    /// Formulas selectable by name. `Custom` is excluded since it needs a
    /// coefficient.
    pub const NAMED: [Formula; 4] = [
        Formula::Epley,
        Formula::Brzycki,
        Formula::Lander,
        Formula::Lombardi,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Formula::Epley => "Epley",
            Formula::Brzycki => "Brzycki",
            Formula::Lander => "Lander",
            Formula::Lombardi => "Lombardi",
            Formula::Custom { .. } => "Custom",
        }
    }
}

impl Default for Formula {
    /// Epley is the implicit formula everywhere the system estimates a max
    /// on the user's behalf (e.g. after an AMRAP set).
    fn default() -> Self {
        Formula::Epley
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Formula {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "epley" => Ok(Formula::Epley),
            "brzycki" => Ok(Formula::Brzycki),
            "lander" => Ok(Formula::Lander),
            "lombardi" => Ok(Formula::Lombardi),
            other => Err(format!("Unknown formula: {other}")),
        }
    }
}
