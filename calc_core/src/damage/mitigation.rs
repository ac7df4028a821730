//! Mitigation - Enemy defense, resistance and amplifying reactions
//!
//! Formulas:
//! - defense: (L + 100) / ((L + 100) + (E + 100) * (1 - def_reduction))
//! - resistance r: r < 0 gives 1 - r/2, r < 0.75 gives 1 - r, else 1 / (4r + 1)
//! - amplifying: base * (1 + 2.78 * EM / (EM + 1400) + bonus)

use crate::types::{Element, Reaction};

/// Level offset used by the defense formula
const LEVEL_OFFSET: f64 = 100.0;

/// Resistance above which the diminishing formula applies
const HIGH_RESISTANCE: f64 = 0.75;

const AMPLIFYING_EM_SCALE: f64 = 2.78;
const AMPLIFYING_EM_OFFSET: f64 = 1400.0;

/// Damage multiplier from enemy defense
pub fn defense_multiplier(character_level: u32, enemy_level: u32, def_reduction: f64) -> f64 {
    let attacker = character_level as f64 + LEVEL_OFFSET;
    let defender = (enemy_level as f64 + LEVEL_OFFSET) * (1.0 - def_reduction.clamp(0.0, 1.0));
    attacker / (attacker + defender)
}

/// Damage multiplier from enemy resistance, after reduction
pub fn resistance_multiplier(resistance: f64) -> f64 {
    if resistance < 0.0 {
        1.0 - resistance / 2.0
    } else if resistance < HIGH_RESISTANCE {
        1.0 - resistance
    } else {
        1.0 / (4.0 * resistance + 1.0)
    }
}

/// Base multiplier of an amplifying reaction on a hit of this element
///
/// Returns None when the reaction does not trigger on the element.
pub fn reaction_base(reaction: Reaction, element: Element) -> Option<f64> {
    match (reaction, element) {
        (Reaction::Vaporize, Element::Hydro) => Some(2.0),
        (Reaction::Vaporize, Element::Pyro) => Some(1.5),
        (Reaction::Melt, Element::Pyro) => Some(2.0),
        (Reaction::Melt, Element::Cryo) => Some(1.5),
        _ => None,
    }
}

/// Damage multiplier from an amplifying reaction
///
/// `bonus` is the summed amplifying reaction bonus stat.
pub fn amplifying_multiplier(reaction: Reaction, element: Element, elemental_mastery: f64, bonus: f64) -> f64 {
    match reaction_base(reaction, element) {
        Some(base) => {
            let em_bonus = AMPLIFYING_EM_SCALE * elemental_mastery / (elemental_mastery + AMPLIFYING_EM_OFFSET);
            base * (1.0 + em_bonus + bonus)
        }
        None => 1.0,
    }
}
