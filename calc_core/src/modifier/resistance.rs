//! Resistance - Per-element enemy resistance

use crate::types::Element;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Default resistance of a standard enemy (10%)
pub const DEFAULT_RESISTANCE: f64 = 0.1;

/// Per-element resistance map
///
/// Values are fractions. Missing elements read as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Resistance {
    values: BTreeMap<Element, f64>,
}

impl Default for Resistance {
    /// Every element at the standard 10%
    fn default() -> Self {
        Resistance::uniform(DEFAULT_RESISTANCE)
    }
}

impl Resistance {
    /// Same value for every element
    pub fn uniform(value: f64) -> Self {
        Resistance {
            values: Element::all().iter().map(|e| (*e, value)).collect(),
        }
    }

    /// Zero for every element, used for resistance reduction
    pub fn zero() -> Self {
        Resistance::uniform(0.0)
    }

    pub fn get(&self, element: Element) -> f64 {
        self.values.get(&element).copied().unwrap_or(0.0)
    }

    pub fn set(&mut self, element: Element, value: f64) {
        self.values.insert(element, value);
    }

    pub fn add(&mut self, element: Element, value: f64) {
        *self.values.entry(element).or_insert(0.0) += value;
    }

    /// Add the same amount to every element
    pub fn add_all(&mut self, value: f64) {
        for element in Element::all() {
            self.add(*element, value);
        }
    }
}
