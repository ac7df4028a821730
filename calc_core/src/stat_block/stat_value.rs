//! StatValue - The base/flat/percent triple for one stat family

use serde::{Deserialize, Serialize};

/// Represents a stat family that follows the Base → Flat → Percent model
///
/// Final value is calculated as:
/// `(base + flat) × (1 + percent)`
///
/// - `base`: Base value (character + weapon base stats)
/// - `flat`: Sum of all flat additions
/// - `percent`: Sum of all percent bonuses (as decimal, e.g., 0.40 = 40%)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StatValue {
    pub base: f64,
    pub flat: f64,
    pub percent: f64,
}

impl StatValue {
    pub fn new(base: f64, flat: f64, percent: f64) -> Self {
        StatValue { base, flat, percent }
    }

    /// Calculate final value: (base + flat) × (1 + percent)
    pub fn compute(&self) -> f64 {
        self.total_flat() * self.total_percent_multiplier()
    }

    /// Get the total flat value (base + flat additions)
    pub fn total_flat(&self) -> f64 {
        self.base + self.flat
    }

    /// Get the total percent multiplier (1 + sum of percent)
    pub fn total_percent_multiplier(&self) -> f64 {
        1.0 + self.percent
    }
}
