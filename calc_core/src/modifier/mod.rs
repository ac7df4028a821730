//! DamageModifier - Combat context consumed by talent formulas

mod aggregator;
mod resistance;

pub use aggregator::compute_damage_modifier;
pub use resistance::{Resistance, DEFAULT_RESISTANCE};

use crate::types::{CritType, Element, Reaction, TalentLevels};
use serde::{Deserialize, Serialize};

/// Global combat inputs set by the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatInputs {
    pub enemy_level: u32,
    /// Fraction of enemy DEF ignored (0.0 to 1.0)
    pub enemy_def_reduction: f64,
    pub enemy_res: Resistance,
    pub crit_type: CritType,
    /// Flat damage added to every hit
    pub flat_dmg: f64,
    pub reaction: Reaction,
    pub talent_levels: TalentLevels,
}

impl Default for CombatInputs {
    fn default() -> Self {
        CombatInputs {
            enemy_level: 1,
            enemy_def_reduction: 0.0,
            enemy_res: Resistance::default(),
            crit_type: CritType::None,
            flat_dmg: 0.0,
            reaction: Reaction::None,
            talent_levels: TalentLevels::default(),
        }
    }
}

/// Combat context for one computation pass
///
/// Seeded from [`CombatInputs`] and then folded through modifier mixins.
/// Base resistance and resistance reduction stay separate; they are combined
/// by the damage formula.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DamageModifier {
    pub character_level: u32,
    pub enemy_level: u32,
    pub enemy_res: Resistance,
    pub enemy_res_reduction: Resistance,
    pub enemy_def_reduction: f64,
    pub crit_type: CritType,
    pub flat_dmg: f64,
    pub reaction: Reaction,
    pub talent_levels: TalentLevels,
    /// Element forced onto normal, charged and plunging attacks
    pub infusion: Option<Element>,
}

impl Default for DamageModifier {
    fn default() -> Self {
        DamageModifier::seed(&CombatInputs::default(), 1)
    }
}

impl DamageModifier {
    /// Build the starting modifier from combat inputs
    pub fn seed(inputs: &CombatInputs, character_level: u32) -> Self {
        DamageModifier {
            character_level,
            enemy_level: inputs.enemy_level,
            enemy_res: inputs.enemy_res.clone(),
            enemy_res_reduction: Resistance::zero(),
            enemy_def_reduction: inputs.enemy_def_reduction,
            crit_type: inputs.crit_type,
            flat_dmg: inputs.flat_dmg,
            reaction: inputs.reaction,
            talent_levels: inputs.talent_levels,
            infusion: None,
        }
    }

    /// Enemy resistance after reduction for an element
    pub fn effective_res(&self, element: Element) -> f64 {
        self.enemy_res.get(element) - self.enemy_res_reduction.get(element)
    }
}
