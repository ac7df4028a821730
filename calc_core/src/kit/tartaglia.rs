//! Tartaglia - Hydro bow user with a melee stance

use super::{hit_value, talent_scale, CharacterKit};
use crate::damage::Hit;
use crate::mixin::ModifierMixin;
use crate::option::{GameOption, OptionOwner};
use crate::source::Character;
use crate::talent::{TalentValue, Talents};
use crate::types::{AttackCategory, Element, TalentCategory};

pub const ID: &str = "tartaglia";

pub struct TartagliaKit;

impl CharacterKit for TartagliaKit {
    fn options(&self) -> Vec<GameOption> {
        vec![GameOption::boolean("foulLegacyRagingTide", OptionOwner::Character, false)
            .on_modifier(|mut modifier, value, _| {
                if value.as_bool() {
                    modifier.infusion = Some(Element::Hydro);
                }
                modifier
            })]
    }

    /// Master of Weaponry: normal attack talent level +1
    fn passive_modifier_mixins(&self, _character: &Character) -> Vec<ModifierMixin> {
        vec![ModifierMixin::new("masterOfWeaponry", |mut modifier, _| {
            modifier.talent_levels.attack += 1;
            modifier
        })]
    }

    fn talents(&self) -> Talents {
        Talents::new()
            .with(TalentCategory::Attack, "normal1", |input| {
                let level = input.modifier.talent_levels.attack;
                hit_value(input, Hit::atk(talent_scale(0.4128, level), Element::Physical, AttackCategory::Normal))
            })
            .with(TalentCategory::Attack, "aimedShot", |input| {
                let level = input.modifier.talent_levels.attack;
                hit_value(input, Hit::atk(talent_scale(0.4386, level), Element::Physical, AttackCategory::Charged))
            })
            .with(TalentCategory::Attack, "fullyChargedAimedShot", |input| {
                let level = input.modifier.talent_levels.attack;
                hit_value(input, Hit::atk(talent_scale(1.24, level), Element::Hydro, AttackCategory::Charged))
            })
            .with(TalentCategory::Attack, "riptideFlash", |input| {
                let level = input.modifier.talent_levels.attack;
                let hit = Hit::atk(talent_scale(0.124, level), Element::Hydro, AttackCategory::Normal);
                TalentValue::List(vec![hit_value(input, hit); 3])
            })
            .with(TalentCategory::Skill, "stanceChange", |input| {
                let level = input.modifier.talent_levels.skill;
                hit_value(input, Hit::atk(talent_scale(0.72, level), Element::Hydro, AttackCategory::Skill))
            })
            .with(TalentCategory::Skill, "meleeNormal1", |input| {
                let level = input.modifier.talent_levels.skill;
                hit_value(input, Hit::atk(talent_scale(0.3887, level), Element::Hydro, AttackCategory::Normal))
            })
            .with(TalentCategory::Skill, "meleeCharged", |input| {
                let level = input.modifier.talent_levels.skill;
                TalentValue::List(vec![
                    hit_value(input, Hit::atk(talent_scale(0.602, level), Element::Hydro, AttackCategory::Charged)),
                    hit_value(input, Hit::atk(talent_scale(0.72, level), Element::Hydro, AttackCategory::Charged)),
                ])
            })
            .with(TalentCategory::Burst, "flashOfHavoc", |input| {
                let level = input.modifier.talent_levels.burst;
                hit_value(input, Hit::atk(talent_scale(3.784, level), Element::Hydro, AttackCategory::Burst))
            })
            .with(TalentCategory::Burst, "lightOfObliteration", |input| {
                let level = input.modifier.talent_levels.burst;
                hit_value(input, Hit::atk(talent_scale(4.64, level), Element::Hydro, AttackCategory::Burst))
            })
    }
}
