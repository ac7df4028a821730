//! Weapon kits

use super::WeaponKit;
use crate::mixin::StatMixin;
use crate::option::{GameOption, OptionOwner};
use crate::source::Weapon;
use crate::stat_block::{StatBlock, StatType};
use crate::types::Priority;

pub const STAFF_OF_HOMA: &str = "staff_of_homa";
pub const DRAGONS_BANE: &str = "dragons_bane";

/// Value of a refinement-scaled effect
fn by_refinement(rank1: f64, step: f64, refinement: u32) -> f64 {
    rank1 + step * refinement.saturating_sub(1) as f64
}

/// Staff of Homa: HP% passive and HP-to-ATK conversion
pub struct StaffOfHomaKit;

impl WeaponKit for StaffOfHomaKit {
    fn options(&self, refinement: u32) -> Vec<GameOption> {
        let ratio = by_refinement(0.01, 0.002, refinement);
        vec![GameOption::boolean("belowHalfHp", OptionOwner::Weapon, false)
            .on_stats(move |mut stats, value, _| {
                if value.as_bool() {
                    let bonus = stats.total_hp() * ratio;
                    stats.add(StatType::FlatAtk, bonus);
                }
                stats
            })
            .with_priority(Priority::Last)]
    }

    fn passive_stat_mixins(&self, weapon: &Weapon) -> Vec<StatMixin> {
        let hp_percent = by_refinement(0.20, 0.05, weapon.refinement());
        let ratio = by_refinement(0.008, 0.002, weapon.refinement());
        vec![
            StatMixin::additive("staffOfHomaHp", StatBlock::new().with(StatType::HpPercent, hp_percent)),
            StatMixin::new("staffOfHomaAtk", move |mut stats, _| {
                let bonus = stats.total_hp() * ratio;
                stats.add(StatType::FlatAtk, bonus);
                stats
            })
            .with_priority(Priority::Last),
        ]
    }
}

/// Dragon's Bane: damage bonus against hydro or pyro affected enemies
pub struct DragonsBaneKit;

impl WeaponKit for DragonsBaneKit {
    fn options(&self, refinement: u32) -> Vec<GameOption> {
        let bonus = by_refinement(0.20, 0.04, refinement);
        vec![GameOption::boolean("enemyAffectedByHydroOrPyro", OptionOwner::Weapon, false)
            .on_stats(move |mut stats, value, _| {
                if value.as_bool() {
                    stats.add(StatType::AllDmgBonus, bonus);
                }
                stats
            })]
    }
}
