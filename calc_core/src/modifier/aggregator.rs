//! Damage modifier aggregation

use super::{CombatInputs, DamageModifier};
use crate::mixin::ModifierMixin;
use crate::stat_block::StatBlock;
use tracing::trace;

/// Seed the damage modifier from combat inputs and fold every modifier mixin
///
/// Mixins must already be in application order (see
/// [`collect_modifier_mixins`](crate::mixin::collect_modifier_mixins)).
/// `stats` is the finalized stat record and is only read. When several
/// mixins set an infusion the last one applied wins.
pub fn compute_damage_modifier(
    inputs: &CombatInputs,
    character_level: u32,
    mixins: &[ModifierMixin],
    stats: &StatBlock,
) -> DamageModifier {
    mixins
        .iter()
        .fold(DamageModifier::seed(inputs, character_level), |modifier, mixin| {
            trace!(source = mixin.source(), "applying modifier mixin");
            mixin.apply(modifier, stats)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stat_block::StatType;
    use crate::types::{Element, Priority};

    fn infuse(element: Element) -> ModifierMixin {
        ModifierMixin::new("infuse", move |mut modifier, _| {
            modifier.infusion = Some(element);
            modifier
        })
    }

    #[test]
    fn test_no_mixins_returns_seed() {
        let inputs = CombatInputs::default();
        let modifier = compute_damage_modifier(&inputs, 90, &[], &StatBlock::new());
        assert_eq!(modifier, DamageModifier::seed(&inputs, 90));
    }

    #[test]
    fn test_infusion_last_writer_wins() {
        let mixins = vec![infuse(Element::Pyro), infuse(Element::Hydro)];
        let modifier = compute_damage_modifier(&CombatInputs::default(), 1, &mixins, &StatBlock::new());
        assert_eq!(modifier.infusion, Some(Element::Hydro));
    }

    #[test]
    fn test_res_reduction_accumulates_separately() {
        let shred = ModifierMixin::new("shred", |mut modifier, _| {
            modifier.enemy_res_reduction.add(Element::Pyro, 0.2);
            modifier
        });
        let mixins = vec![shred.clone(), shred];
        let modifier = compute_damage_modifier(&CombatInputs::default(), 1, &mixins, &StatBlock::new());
        assert!((modifier.enemy_res.get(Element::Pyro) - 0.1).abs() < 1e-9);
        assert!((modifier.enemy_res_reduction.get(Element::Pyro) - 0.4).abs() < 1e-9);
    }

    #[test]
    fn test_mixins_read_finalized_stats() {
        let scaling = ModifierMixin::new("em_flat", |mut modifier, stats| {
            modifier.flat_dmg += stats.get(StatType::ElementalMastery) * 2.0;
            modifier
        })
        .with_priority(Priority::Last);
        let stats = StatBlock::new().with(StatType::ElementalMastery, 150.0);
        let modifier = compute_damage_modifier(&CombatInputs::default(), 1, &[scaling], &stats);
        assert!((modifier.flat_dmg - 300.0).abs() < 1e-9);
    }
}
