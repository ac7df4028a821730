//! StatBlock - The sparse stat record passed between every component

mod aggregator;
mod computed;
mod stat_type;
mod stat_value;

pub use aggregator::{compute_total_stats, sum_base_stats};
pub use stat_type::StatType;
pub use stat_value::StatValue;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Mapping from stat to value
///
/// Keys are sparse and an absent key reads as zero. Contributions are
/// summed; nothing here combines flat and percent parts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatBlock {
    values: BTreeMap<StatType, f64>,
}

impl StatBlock {
    /// Create an empty record
    pub fn new() -> Self {
        StatBlock::default()
    }

    /// Value of a stat, zero when absent
    pub fn get(&self, stat: StatType) -> f64 {
        self.values.get(&stat).copied().unwrap_or(0.0)
    }

    /// Overwrite a stat
    pub fn set(&mut self, stat: StatType, value: f64) {
        self.values.insert(stat, value);
    }

    /// Add to a stat
    pub fn add(&mut self, stat: StatType, value: f64) {
        *self.values.entry(stat).or_insert(0.0) += value;
    }

    /// Builder form of [`StatBlock::add`]
    pub fn with(mut self, stat: StatType, value: f64) -> Self {
        self.add(stat, value);
        self
    }

    /// Add to a stat named by its string id
    ///
    /// Unknown ids contribute nothing. Returns whether the id resolved.
    pub fn add_by_id(&mut self, id: &str, value: f64) -> bool {
        match StatType::from_id(id) {
            Some(stat) => {
                self.add(stat, value);
                true
            }
            None => {
                debug!(stat = id, "ignoring contribution to unknown stat");
                false
            }
        }
    }

    /// Add every value of another record into this one
    pub fn merge(&mut self, other: &StatBlock) {
        for (stat, value) in other.iter() {
            self.add(stat, value);
        }
    }

    /// Iterate stats in a stable order
    pub fn iter(&self) -> impl Iterator<Item = (StatType, f64)> + '_ {
        self.values.iter().map(|(stat, value)| (*stat, *value))
    }

    /// Whether no stat has been written
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of stats present
    pub fn len(&self) -> usize {
        self.values.len()
    }
}

impl FromIterator<(StatType, f64)> for StatBlock {
    fn from_iter<I: IntoIterator<Item = (StatType, f64)>>(iter: I) -> Self {
        let mut block = StatBlock::new();
        for (stat, value) in iter {
            block.add(stat, value);
        }
        block
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_reads_zero() {
        let block = StatBlock::new();
        assert!(block.get(StatType::CritRate).abs() < f64::EPSILON);
        assert!(block.is_empty());
    }

    #[test]
    fn test_add_accumulates() {
        let mut block = StatBlock::new();
        block.add(StatType::AtkPercent, 0.2);
        block.add(StatType::AtkPercent, 0.1);
        assert!((block.get(StatType::AtkPercent) - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_add_by_unknown_id_is_noop() {
        let mut block = StatBlock::new();
        assert!(!block.add_by_id("notAStat", 10.0));
        assert!(block.is_empty());
        assert!(block.add_by_id("flatAtk", 10.0));
        assert!((block.get(StatType::FlatAtk) - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_merge() {
        let mut a = StatBlock::new().with(StatType::CritRate, 0.05);
        let b = StatBlock::new()
            .with(StatType::CritRate, 0.10)
            .with(StatType::CritDmg, 0.5);
        a.merge(&b);
        assert!((a.get(StatType::CritRate) - 0.15).abs() < 1e-9);
        assert!((a.get(StatType::CritDmg) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_serializes_as_id_map() {
        let block = StatBlock::new().with(StatType::FlatAtk, 20.0);
        let json = serde_json::to_string(&block).unwrap();
        assert_eq!(json, r#"{"flatAtk":20.0}"#);
        let back: StatBlock = serde_json::from_str(&json).unwrap();
        assert_eq!(back, block);
    }
}
