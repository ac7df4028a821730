//! Damage - Turning a talent hit, stats and the damage modifier into numbers

mod mitigation;

pub use mitigation::{amplifying_multiplier, defense_multiplier, reaction_base, resistance_multiplier};

use crate::modifier::DamageModifier;
use crate::stat_block::{StatBlock, StatType};
use crate::types::{AttackCategory, CritType, Element};
use serde::{Deserialize, Serialize};

/// Stat a talent multiplier scales from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalingStat {
    Atk,
    Hp,
    Def,
    ElementalMastery,
}

impl ScalingStat {
    /// Effective value of the scaling stat
    pub fn value(self, stats: &StatBlock) -> f64 {
        match self {
            ScalingStat::Atk => stats.total_atk(),
            ScalingStat::Hp => stats.total_hp(),
            ScalingStat::Def => stats.total_def(),
            ScalingStat::ElementalMastery => stats.get(StatType::ElementalMastery),
        }
    }
}

/// A single talent hit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hit {
    pub scaling: ScalingStat,
    /// Talent multiplier, 1.0 = 100% of the scaling stat
    pub multiplier: f64,
    pub element: Element,
    pub category: AttackCategory,
}

impl Hit {
    /// ATK-scaling hit
    pub fn atk(multiplier: f64, element: Element, category: AttackCategory) -> Self {
        Hit {
            scaling: ScalingStat::Atk,
            multiplier,
            element,
            category,
        }
    }

    /// Element the hit lands with once infusion is applied
    ///
    /// Infusion only replaces physical damage on normal, charged and
    /// plunging attacks.
    pub fn resolved_element(&self, modifier: &DamageModifier) -> Element {
        match modifier.infusion {
            Some(infusion) if self.element == Element::Physical && self.category.is_infusable() => infusion,
            _ => self.element,
        }
    }
}

/// Damage of one hit in every crit outcome
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DamageValue {
    pub non_crit: f64,
    pub crit: f64,
    /// Crit-rate weighted expectation
    pub average: f64,
}

impl DamageValue {
    /// Value reported for a crit type
    pub fn value(&self, crit_type: CritType) -> f64 {
        match crit_type {
            CritType::None => self.average,
            CritType::Crit => self.crit,
            CritType::NonCrit => self.non_crit,
        }
    }
}

/// Calculate the damage of a hit
pub fn calculate_damage(hit: &Hit, stats: &StatBlock, modifier: &DamageModifier) -> DamageValue {
    let element = hit.resolved_element(modifier);

    let base = hit.scaling.value(stats) * hit.multiplier + modifier.flat_dmg;
    let bonus = 1.0 + stats.damage_bonus(element, hit.category);
    let defense = defense_multiplier(
        modifier.character_level,
        modifier.enemy_level,
        modifier.enemy_def_reduction,
    );
    let resistance = resistance_multiplier(modifier.effective_res(element));
    let amplifying = amplifying_multiplier(
        modifier.reaction,
        element,
        stats.get(StatType::ElementalMastery),
        stats.get(StatType::AmplifyingBonus),
    );

    let non_crit = base * bonus * defense * resistance * amplifying;
    let crit_dmg = stats.get(StatType::CritDmg);
    let crit_rate = stats.crit_rate_for(hit.category).clamp(0.0, 1.0);

    DamageValue {
        non_crit,
        crit: non_crit * (1.0 + crit_dmg),
        average: non_crit * (1.0 + crit_rate * crit_dmg),
    }
}

/// Healing from a base amount, scaled by healing bonus
pub fn calculate_healing(base: f64, stats: &StatBlock) -> f64 {
    base * (1.0 + stats.get(StatType::HealingBonus))
}
