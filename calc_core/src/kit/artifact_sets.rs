//! Artifact set kits
//!
//! Plain stat bonuses come from the set bonus table. Kits add the
//! conditional parts as options and the non-stat parts as passives.

use super::ArtifactSetKit;
use crate::mixin::StatMixin;
use crate::option::{GameOption, OptionOwner};
use crate::stat_block::{StatBlock, StatType};
use crate::types::Element;

pub const CRIMSON_WITCH: &str = "crimson_witch_of_flames";
pub const BLIZZARD_STRAYER: &str = "blizzard_strayer";
pub const BERSERKER: &str = "berserker";
pub const VIRIDESCENT_VENERER: &str = "viridescent_venerer";

fn owner(set_id: &str, threshold: u32) -> OptionOwner {
    OptionOwner::ArtifactSet {
        set_id: set_id.to_string(),
        threshold,
    }
}

/// Boolean set option adding a fixed stat when enabled
fn toggle(id: &str, set_id: &str, threshold: u32, stat: StatType, amount: f64) -> GameOption {
    GameOption::boolean(id, owner(set_id, threshold), false).on_stats(move |mut stats, value, _| {
        if value.as_bool() {
            stats.add(stat, amount);
        }
        stats
    })
}

/// Crimson Witch of Flames: stacking pyro bonus and reaction bonus
pub struct CrimsonWitchKit;

impl ArtifactSetKit for CrimsonWitchKit {
    fn options(&self) -> Vec<GameOption> {
        vec![GameOption::integer("crimsonWitchStacks", owner(CRIMSON_WITCH, 4), 0, 3, 0)
            .on_stats(|mut stats, value, _| {
                stats.add(StatType::PyroDmgBonus, 0.075 * value.as_f64());
                stats
            })]
    }

    fn passive_stat_mixins(&self, pieces: u32) -> Vec<StatMixin> {
        if pieces < 4 {
            return Vec::new();
        }
        vec![StatMixin::additive(
            "crimsonWitchReactions",
            StatBlock::new().with(StatType::AmplifyingBonus, 0.15),
        )]
    }
}

/// Blizzard Strayer: crit rate against cryo-affected and frozen enemies
pub struct BlizzardStrayerKit;

impl ArtifactSetKit for BlizzardStrayerKit {
    fn options(&self) -> Vec<GameOption> {
        vec![
            toggle("enemyCryoAffected", BLIZZARD_STRAYER, 4, StatType::CritRate, 0.2),
            toggle("enemyFrozen", BLIZZARD_STRAYER, 4, StatType::CritRate, 0.2),
        ]
    }
}

/// Berserker: crit rate while HP is low
pub struct BerserkerKit;

impl ArtifactSetKit for BerserkerKit {
    fn options(&self) -> Vec<GameOption> {
        vec![toggle("belowSeventyPercentHp", BERSERKER, 4, StatType::CritRate, 0.24)]
    }
}

/// Viridescent Venerer: resistance shred on the swirled element
pub struct ViridescentVenererKit;

impl ArtifactSetKit for ViridescentVenererKit {
    fn options(&self) -> Vec<GameOption> {
        vec![GameOption::choice(
            "swirledElement",
            owner(VIRIDESCENT_VENERER, 4),
            &["none", "pyro", "hydro", "electro", "cryo"],
            "none",
        )
        .on_modifier(|mut modifier, value, _| {
            let element = match value.as_choice() {
                Some("pyro") => Some(Element::Pyro),
                Some("hydro") => Some(Element::Hydro),
                Some("electro") => Some(Element::Electro),
                Some("cryo") => Some(Element::Cryo),
                _ => None,
            };
            if let Some(element) = element {
                modifier.enemy_res_reduction.add(element, 0.4);
            }
            modifier
        })]
    }
}
