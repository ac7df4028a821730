//! Computed/derived stat values for StatBlock

use crate::stat_block::{StatBlock, StatType, StatValue};
use crate::types::{AttackCategory, Element};

impl StatBlock {
    /// HP family
    pub fn hp(&self) -> StatValue {
        StatValue::new(
            self.get(StatType::BaseHp),
            self.get(StatType::FlatHp),
            self.get(StatType::HpPercent),
        )
    }

    /// ATK family
    pub fn atk(&self) -> StatValue {
        StatValue::new(
            self.get(StatType::BaseAtk),
            self.get(StatType::FlatAtk),
            self.get(StatType::AtkPercent),
        )
    }

    /// DEF family
    pub fn def(&self) -> StatValue {
        StatValue::new(
            self.get(StatType::BaseDef),
            self.get(StatType::FlatDef),
            self.get(StatType::DefPercent),
        )
    }

    pub fn total_hp(&self) -> f64 {
        self.hp().compute()
    }

    pub fn total_atk(&self) -> f64 {
        self.atk().compute()
    }

    pub fn total_def(&self) -> f64 {
        self.def().compute()
    }

    /// Summed damage bonus applying to a hit of this element and category
    pub fn damage_bonus(&self, element: Element, category: AttackCategory) -> f64 {
        self.get(StatType::damage_bonus(element))
            + self.get(StatType::category_bonus(category))
            + self.get(StatType::AllDmgBonus)
    }

    /// Crit rate for a hit of this category, including category-only crit rate
    pub fn crit_rate_for(&self, category: AttackCategory) -> f64 {
        let mut rate = self.get(StatType::CritRate);
        if category == AttackCategory::Charged {
            rate += self.get(StatType::ChargedCritRate);
        }
        rate
    }
}
