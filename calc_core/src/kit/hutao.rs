//! Hu Tao - HP-scaling pyro polearm user

use super::{hit_value, talent_scale, CharacterKit};
use crate::damage::{calculate_healing, Hit};
use crate::option::{GameOption, OptionOwner};
use crate::stat_block::StatType;
use crate::talent::{TalentValue, Talents};
use crate::types::{AttackCategory, Element, Priority, TalentCategory};

pub const ID: &str = "hutao";

/// ATK gained per point of max HP in Paramita Papilio state, at skill level 1
const PARAMITA_HP_TO_ATK: f64 = 0.0384;
/// ATK gained from Paramita Papilio is capped at this multiple of base ATK
const PARAMITA_ATK_CAP: f64 = 4.0;
/// Pyro damage bonus while HP is below half
const SANGUINE_ROUGE_PYRO: f64 = 0.33;

pub struct HuTaoKit;

impl CharacterKit for HuTaoKit {
    fn options(&self) -> Vec<GameOption> {
        vec![
            GameOption::boolean("paramitaPapilioState", OptionOwner::Character, false)
                .on_stats(|mut stats, value, talents| {
                    if value.as_bool() {
                        let gained = stats.total_hp() * talent_scale(PARAMITA_HP_TO_ATK, talents.skill);
                        let cap = stats.get(StatType::BaseAtk) * PARAMITA_ATK_CAP;
                        stats.add(StatType::FlatAtk, gained.min(cap));
                    }
                    stats
                })
                .on_modifier(|mut modifier, value, _| {
                    if value.as_bool() {
                        modifier.infusion = Some(Element::Pyro);
                    }
                    modifier
                })
                .with_priority(Priority::Last),
            GameOption::boolean("sanguineRouge", OptionOwner::Character, false).on_stats(
                |mut stats, value, _| {
                    if value.as_bool() {
                        stats.add(StatType::PyroDmgBonus, SANGUINE_ROUGE_PYRO);
                    }
                    stats
                },
            ),
        ]
    }

    fn talents(&self) -> Talents {
        Talents::new()
            .with(TalentCategory::Attack, "normal1", |input| {
                let level = input.modifier.talent_levels.attack;
                hit_value(input, Hit::atk(talent_scale(0.4689, level), Element::Physical, AttackCategory::Normal))
            })
            .with(TalentCategory::Attack, "normal5", |input| {
                let level = input.modifier.talent_levels.attack;
                let hit = Hit::atk(talent_scale(0.3337, level), Element::Physical, AttackCategory::Normal);
                TalentValue::List(vec![hit_value(input, hit), hit_value(input, hit)])
            })
            .with(TalentCategory::Attack, "charged", |input| {
                let level = input.modifier.talent_levels.attack;
                hit_value(input, Hit::atk(talent_scale(1.3596, level), Element::Physical, AttackCategory::Charged))
            })
            .with(TalentCategory::Attack, "plunge", |input| {
                let level = input.modifier.talent_levels.attack;
                hit_value(input, Hit::atk(talent_scale(0.6542, level), Element::Physical, AttackCategory::Plunge))
            })
            .with(TalentCategory::Skill, "bloodBlossom", |input| {
                let level = input.modifier.talent_levels.skill;
                hit_value(input, Hit::atk(talent_scale(0.64, level), Element::Pyro, AttackCategory::Skill))
            })
            .with(TalentCategory::Burst, "spiritSoother", |input| {
                let level = input.modifier.talent_levels.burst;
                hit_value(input, Hit::atk(talent_scale(3.0327, level), Element::Pyro, AttackCategory::Burst))
            })
            .with(TalentCategory::Burst, "lowHpSpiritSoother", |input| {
                let level = input.modifier.talent_levels.burst;
                hit_value(input, Hit::atk(talent_scale(3.7909, level), Element::Pyro, AttackCategory::Burst))
            })
            .with(TalentCategory::Burst, "spiritSootherHealing", |input| {
                let level = input.modifier.talent_levels.burst;
                let base = input.stats.total_hp() * talent_scale(0.0626, level);
                TalentValue::Number(calculate_healing(base, input.stats))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modifier::DamageModifier;
    use crate::option::OptionValue;
    use crate::stat_block::StatBlock;
    use crate::types::TalentLevels;

    fn paramita(on: bool) -> GameOption {
        let mut option = HuTaoKit.options().remove(0);
        option.set_value(OptionValue::Boolean(on));
        option
    }

    #[test]
    fn test_paramita_converts_hp_to_atk() {
        let stats = StatBlock::new()
            .with(StatType::BaseHp, 10000.0)
            .with(StatType::BaseAtk, 100.0);
        let mixin = paramita(true).stat_mixin().unwrap();
        let out = mixin.apply(stats, &TalentLevels::default());
        assert!((out.get(StatType::FlatAtk) - 384.0).abs() < 1e-9);
    }

    #[test]
    fn test_paramita_is_capped() {
        let stats = StatBlock::new()
            .with(StatType::BaseHp, 30000.0)
            .with(StatType::BaseAtk, 100.0);
        let mixin = paramita(true).stat_mixin().unwrap();
        let out = mixin.apply(stats, &TalentLevels::new(1, 10, 1));
        assert!((out.get(StatType::FlatAtk) - 400.0).abs() < 1e-9);
    }

    #[test]
    fn test_paramita_off_does_nothing() {
        let option = paramita(false);
        let stats = StatBlock::new().with(StatType::BaseHp, 10000.0);
        let out = option.stat_mixin().unwrap().apply(stats.clone(), &TalentLevels::default());
        assert_eq!(out, stats);
        let modifier = option.modifier_mixin().unwrap().apply(DamageModifier::default(), &stats);
        assert!(modifier.infusion.is_none());
    }

    #[test]
    fn test_paramita_infuses_pyro_at_last_priority() {
        let option = paramita(true);
        let mixin = option.modifier_mixin().unwrap();
        assert_eq!(crate::mixin::Prioritized::priority(&mixin), Priority::Last);
        let modifier = mixin.apply(DamageModifier::default(), &StatBlock::new());
        assert_eq!(modifier.infusion, Some(Element::Pyro));
    }

    #[test]
    fn test_talent_ids() {
        let talents = HuTaoKit.talents();
        let ids: Vec<(TalentCategory, usize)> = talents.iter().map(|(c, f)| (c, f.len())).collect();
        assert_eq!(
            ids,
            vec![
                (TalentCategory::Attack, 4),
                (TalentCategory::Skill, 1),
                (TalentCategory::Burst, 3)
            ]
        );
    }
}
