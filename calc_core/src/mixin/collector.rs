//! Mixin collection and priority grouping

use super::{ModifierMixin, Prioritized, StatMixin};
use crate::option::GameOption;
use crate::source::{ArtifactSet, Character, MixinSource, Weapon};
use crate::types::Priority;
use tracing::trace;

/// Borrowed view of every entity that can contribute mixins
#[derive(Debug, Clone, Copy)]
pub struct Contributors<'a> {
    pub character: &'a Character,
    pub weapon: &'a Weapon,
    pub artifact_sets: &'a [ArtifactSet],
    pub character_options: &'a [GameOption],
    pub weapon_options: &'a [GameOption],
}

impl<'a> Contributors<'a> {
    /// Options owned by the equipped artifact sets, in set order
    pub fn artifact_set_options(&self) -> impl Iterator<Item = &'a GameOption> {
        self.artifact_sets.iter().flat_map(|set| set.options().iter())
    }
}

/// Order mixins into the Normal tier followed by the Last tier
///
/// Relative collection order is preserved inside each tier.
pub fn arrange_by_priority<T: Prioritized>(mixins: Vec<T>) -> Vec<T> {
    let (normal, last): (Vec<T>, Vec<T>) = mixins
        .into_iter()
        .partition(|mixin| mixin.priority() == Priority::Normal);
    normal.into_iter().chain(last).collect()
}

fn passive_stats(source: &dyn MixinSource) -> Vec<StatMixin> {
    let mixins = source.passive_stat_mixins();
    trace!(source = source.source_id(), count = mixins.len(), "collected passive stat mixins");
    mixins
}

fn passive_modifiers(source: &dyn MixinSource) -> Vec<ModifierMixin> {
    let mixins = source.passive_modifier_mixins();
    trace!(source = source.source_id(), count = mixins.len(), "collected passive modifier mixins");
    mixins
}

/// Collect every stat mixin in application order
///
/// Collection order: character passives, weapon passives, artifact set
/// passives, character options, weapon options, artifact set options.
pub fn collect_stat_mixins(contributors: &Contributors<'_>) -> Vec<StatMixin> {
    let mut mixins = passive_stats(contributors.character);
    mixins.extend(passive_stats(contributors.weapon));
    for set in contributors.artifact_sets {
        mixins.extend(passive_stats(set));
    }
    mixins.extend(contributors.character_options.iter().filter_map(GameOption::stat_mixin));
    mixins.extend(contributors.weapon_options.iter().filter_map(GameOption::stat_mixin));
    mixins.extend(contributors.artifact_set_options().filter_map(GameOption::stat_mixin));

    arrange_by_priority(mixins)
}

/// Collect every modifier mixin in application order
///
/// Uses the same collection order as [`collect_stat_mixins`].
pub fn collect_modifier_mixins(contributors: &Contributors<'_>) -> Vec<ModifierMixin> {
    let mut mixins = passive_modifiers(contributors.character);
    mixins.extend(passive_modifiers(contributors.weapon));
    for set in contributors.artifact_sets {
        mixins.extend(passive_modifiers(set));
    }
    mixins.extend(contributors.character_options.iter().filter_map(GameOption::modifier_mixin));
    mixins.extend(contributors.weapon_options.iter().filter_map(GameOption::modifier_mixin));
    mixins.extend(contributors.artifact_set_options().filter_map(GameOption::modifier_mixin));

    arrange_by_priority(mixins)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stat_block::StatBlock;

    fn named(source: &str, priority: Priority) -> StatMixin {
        StatMixin::additive(source, StatBlock::new()).with_priority(priority)
    }

    #[test]
    fn test_arrange_keeps_order_within_tier() {
        let mixins = vec![
            named("a", Priority::Last),
            named("b", Priority::Normal),
            named("c", Priority::Last),
            named("d", Priority::Normal),
        ];
        let sources: Vec<String> = arrange_by_priority(mixins)
            .iter()
            .map(|m| m.source().to_string())
            .collect();
        assert_eq!(sources, vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn test_arrange_empty() {
        let arranged: Vec<StatMixin> = arrange_by_priority(Vec::new());
        assert!(arranged.is_empty());
    }
}
