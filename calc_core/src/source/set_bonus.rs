//! Set bonus resolution and the special bonus registry

use crate::config::SetBonusTable;
use crate::source::ArtifactSet;
use crate::stat_block::{StatBlock, StatType};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Handler for a non-additive set bonus, given its parameters
pub type SetBonusFn = Arc<dyn Fn(&[f64]) -> StatBlock + Send + Sync>;

/// Id of the handler that contributes nothing
pub const DEFAULT_SET_BONUS: &str = "defaultSetBonus";

/// Registry of special set bonus handlers
#[derive(Clone, Default)]
pub struct SetBonusRegistry {
    handlers: HashMap<String, SetBonusFn>,
}

impl SetBonusRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        SetBonusRegistry::default()
    }

    /// Create a registry with the built-in handlers
    pub fn with_defaults() -> Self {
        let mut registry = SetBonusRegistry::new();
        registry.register(DEFAULT_SET_BONUS, |_| StatBlock::new());
        registry.register("Relic_ExtraAtkCritUp", |params| {
            StatBlock::new().with(StatType::ChargedCritRate, params.first().copied().unwrap_or(0.0))
        });
        // Conditional part is an option on the set
        registry.register("Relic_GiantKiller", |_| StatBlock::new());
        registry
    }

    /// Register or replace a handler
    pub fn register<F>(&mut self, kind: impl Into<String>, handler: F)
    where
        F: Fn(&[f64]) -> StatBlock + Send + Sync + 'static,
    {
        self.handlers.insert(kind.into(), Arc::new(handler));
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.handlers.contains_key(kind)
    }

    /// Resolve a special bonus, contributing nothing for unknown kinds
    pub fn resolve(&self, kind: &str, params: &[f64]) -> StatBlock {
        match self.handlers.get(kind) {
            Some(handler) => handler(params),
            None => {
                debug!(kind, "unknown set bonus type, using default");
                StatBlock::new()
            }
        }
    }
}

impl fmt::Debug for SetBonusRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut kinds: Vec<&String> = self.handlers.keys().collect();
        kinds.sort();
        f.debug_struct("SetBonusRegistry").field("kinds", &kinds).finish()
    }
}

/// Stats granted by a set with `pieces` pieces equipped
///
/// Walks thresholds in ascending order and stops at the first one above
/// `pieces`. Each reached threshold adds its plain stats, then its special
/// bonus through the registry.
pub fn resolve_set_bonus(table: &SetBonusTable, pieces: u32, registry: &SetBonusRegistry) -> StatBlock {
    let mut stats = StatBlock::new();

    for threshold in &table.bonus_thresholds {
        if *threshold > pieces {
            break;
        }
        let Some(bonus) = table.bonus_at(*threshold) else {
            continue;
        };
        for (stat, value) in &bonus.stats {
            stats.add_by_id(stat, *value);
        }
        if let Some(extra) = &bonus.extra {
            stats.merge(&registry.resolve(&extra.kind, &extra.params));
        }
    }

    stats
}

/// Sum of the resolved bonuses of every set
pub fn sum_set_bonuses(sets: &[ArtifactSet]) -> StatBlock {
    let mut total = StatBlock::new();
    for set in sets {
        total.merge(set.stats());
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SetBonus, SpecialBonus};
    use std::collections::BTreeMap;

    fn duo_table() -> SetBonusTable {
        SetBonusTable {
            name: "Duo".to_string(),
            bonus_thresholds: vec![2, 4],
            bonuses: vec![
                SetBonus {
                    threshold: 2,
                    stats: BTreeMap::from([("critRate".to_string(), 0.12)]),
                    extra: None,
                },
                SetBonus {
                    threshold: 4,
                    stats: BTreeMap::new(),
                    extra: Some(SpecialBonus {
                        kind: "Relic_ExtraAtkCritUp".to_string(),
                        params: vec![0.3],
                    }),
                },
            ],
        }
    }

    #[test]
    fn test_below_first_threshold() {
        let registry = SetBonusRegistry::with_defaults();
        assert!(resolve_set_bonus(&duo_table(), 1, &registry).is_empty());
    }

    #[test]
    fn test_two_piece_only() {
        let registry = SetBonusRegistry::with_defaults();
        let stats = resolve_set_bonus(&duo_table(), 3, &registry);
        assert!((stats.get(StatType::CritRate) - 0.12).abs() < 1e-9);
        assert!(stats.get(StatType::ChargedCritRate).abs() < 1e-9);
    }

    #[test]
    fn test_four_piece_special() {
        let registry = SetBonusRegistry::with_defaults();
        let stats = resolve_set_bonus(&duo_table(), 4, &registry);
        assert!((stats.get(StatType::CritRate) - 0.12).abs() < 1e-9);
        assert!((stats.get(StatType::ChargedCritRate) - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_special_is_noop() {
        let mut table = duo_table();
        if let Some(extra) = table.bonuses[1].extra.as_mut() {
            extra.kind = "NoSuchBonus".to_string();
        }
        let stats = resolve_set_bonus(&table, 4, &SetBonusRegistry::with_defaults());
        assert_eq!(stats, StatBlock::new().with(StatType::CritRate, 0.12));
    }

    #[test]
    fn test_giant_killer_and_default_are_noops() {
        let registry = SetBonusRegistry::with_defaults();
        assert!(registry.resolve("Relic_GiantKiller", &[]).is_empty());
        assert!(registry.resolve(DEFAULT_SET_BONUS, &[1.0]).is_empty());
    }

    #[test]
    fn test_custom_handler() {
        let mut registry = SetBonusRegistry::new();
        registry.register("doubleAtk", |params| {
            StatBlock::new().with(StatType::AtkPercent, params.iter().sum::<f64>() * 2.0)
        });
        assert!(registry.contains("doubleAtk"));
        let stats = registry.resolve("doubleAtk", &[0.1, 0.05]);
        assert!((stats.get(StatType::AtkPercent) - 0.3).abs() < 1e-9);
    }
}
