//! Stat aggregation - Base stats, gear and set bonuses folded through mixins

use crate::library::GameData;
use crate::mixin::StatMixin;
use crate::source::{Artifact, Character, Weapon};
use crate::stat_block::StatBlock;
use crate::types::TalentLevels;
use tracing::trace;

/// Sum every additive contribution before any mixin runs
///
/// Character base stats, weapon base stats, each artifact piece and the set
/// bonus total.
pub fn sum_base_stats(
    data: &dyn GameData,
    character: &Character,
    weapon: &Weapon,
    set_bonus_total: &StatBlock,
    artifacts: &[Artifact],
) -> StatBlock {
    let mut stats = data.base_stats_at(character.id(), character.level(), character.ascended());
    stats.merge(&data.base_stats_at(weapon.id(), weapon.level(), weapon.ascended()));
    for artifact in artifacts {
        stats.merge(&artifact.stats(data));
    }
    stats.merge(set_bonus_total);
    stats
}

/// Compute the total stat record
///
/// Mixins must already be in application order (see
/// [`collect_stat_mixins`](crate::mixin::collect_stat_mixins)). Flat and
/// percent stats stay separate in the result.
pub fn compute_total_stats(
    data: &dyn GameData,
    character: &Character,
    weapon: &Weapon,
    set_bonus_total: &StatBlock,
    artifacts: &[Artifact],
    talent_levels: &TalentLevels,
    mixins: &[StatMixin],
) -> StatBlock {
    let stats = sum_base_stats(data, character, weapon, set_bonus_total, artifacts);
    mixins.iter().fold(stats, |stats, mixin| {
        trace!(source = mixin.source(), "applying stat mixin");
        mixin.apply(stats, talent_levels)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SetBonusTable;
    use crate::kit::Catalog;
    use crate::source::SubStat;
    use crate::stat_block::StatType;
    use crate::talent::Talents;
    use crate::types::{ArtifactSlot, Priority};

    /// Fixed numbers: character 100 ATK, weapon 50 ATK, every main stat 10
    struct FixedData;

    impl GameData for FixedData {
        fn base_stats_at(&self, entity_id: &str, _level: u32, _ascended: bool) -> StatBlock {
            match entity_id {
                "hero" => StatBlock::new().with(StatType::BaseAtk, 100.0),
                "blade" => StatBlock::new().with(StatType::BaseAtk, 50.0),
                _ => StatBlock::new(),
            }
        }

        fn set_bonus_table(&self, _set_id: &str) -> Option<&SetBonusTable> {
            None
        }

        fn talent_formulas(&self, _character_id: &str) -> Talents {
            Talents::new()
        }

        fn artifact_main_stat_at(&self, _rarity: u32, _level: u32, _stat: StatType) -> f64 {
            10.0
        }
    }

    fn hero() -> (Character, Weapon) {
        let catalog = Catalog::new();
        (
            Character::new("hero", 90, true, &catalog),
            Weapon::new("blade", 90, true, &catalog),
        )
    }

    #[test]
    fn test_base_sum_with_percent_bonus() {
        let (character, weapon) = hero();
        let set_bonus = StatBlock::new().with(StatType::AtkPercent, 0.2);
        let artifacts = vec![Artifact {
            slot: ArtifactSlot::Sands,
            rarity: 5,
            level: 0,
            main_stat: "atkPercent".to_string(),
            sub_stats: vec![SubStat::new("atkPercent", 10.0)],
        }];

        let stats = compute_total_stats(
            &FixedData,
            &character,
            &weapon,
            &set_bonus,
            &artifacts,
            &TalentLevels::default(),
            &[],
        );
        assert!((stats.get(StatType::BaseAtk) - 150.0).abs() < 1e-9);
        // 0.2 set + 10.0 main stat from FixedData + 0.1 substat
        assert!((stats.get(StatType::AtkPercent) - 10.3).abs() < 1e-9);
    }

    #[test]
    fn test_percent_stays_separate_until_computed() {
        let (character, weapon) = hero();
        let mixins = vec![StatMixin::additive(
            "bonus",
            StatBlock::new()
                .with(StatType::AtkPercent, 0.3)
                .with(StatType::FlatAtk, 20.0),
        )];
        let stats = compute_total_stats(
            &FixedData,
            &character,
            &weapon,
            &StatBlock::new(),
            &[],
            &TalentLevels::default(),
            &mixins,
        );
        assert!((stats.get(StatType::FlatAtk) - 20.0).abs() < 1e-9);
        assert!((stats.get(StatType::AtkPercent) - 0.3).abs() < 1e-9);
        assert!((stats.total_atk() - 221.0).abs() < 1e-9);
    }

    #[test]
    fn test_mixins_fold_in_order() {
        let (character, weapon) = hero();
        let double = StatMixin::new("double", |mut stats, _| {
            let atk = stats.get(StatType::FlatAtk);
            stats.set(StatType::FlatAtk, atk * 2.0);
            stats
        })
        .with_priority(Priority::Last);
        let add = StatMixin::additive("add", StatBlock::new().with(StatType::FlatAtk, 5.0));

        let stats = compute_total_stats(
            &FixedData,
            &character,
            &weapon,
            &StatBlock::new(),
            &[],
            &TalentLevels::default(),
            &[add, double],
        );
        assert!((stats.get(StatType::FlatAtk) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_mixins_see_talent_levels() {
        let (character, weapon) = hero();
        let per_level = StatMixin::new("perLevel", |mut stats, talents| {
            stats.add(StatType::ElementalMastery, talents.skill as f64 * 10.0);
            stats
        });
        let stats = compute_total_stats(
            &FixedData,
            &character,
            &weapon,
            &StatBlock::new(),
            &[],
            &TalentLevels::new(1, 8, 1),
            &[per_level],
        );
        assert!((stats.get(StatType::ElementalMastery) - 80.0).abs() < 1e-9);
    }
}
