//! Artifact - Equipped artifact pieces

use crate::library::GameData;
use crate::stat_block::{StatBlock, StatType};
use crate::types::ArtifactSlot;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A substat roll
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubStat {
    /// Stat id
    pub stat: String,
    /// Value as entered, percent stats in whole percent
    pub value: f64,
    /// Value added to the stat record, percent stats as a fraction
    pub raw_value: f64,
}

impl SubStat {
    /// Create a substat from a user-entered value
    pub fn new(stat: impl Into<String>, value: f64) -> Self {
        let stat = stat.into();
        let raw_value = match StatType::from_id(&stat) {
            Some(kind) if kind.is_percent() => value / 100.0,
            _ => value,
        };
        SubStat { stat, value, raw_value }
    }
}

/// One artifact piece
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artifact {
    pub slot: ArtifactSlot,
    pub rarity: u32,
    pub level: u32,
    /// Main stat id, empty when unset
    pub main_stat: String,
    pub sub_stats: Vec<SubStat>,
}

impl Artifact {
    /// Unset piece for a slot, contributing nothing
    pub fn empty(slot: ArtifactSlot) -> Self {
        Artifact {
            slot,
            rarity: 1,
            level: 0,
            main_stat: String::new(),
            sub_stats: Vec::new(),
        }
    }

    /// One unset piece per slot
    pub fn empty_set() -> Vec<Artifact> {
        ArtifactSlot::all().iter().map(|slot| Artifact::empty(*slot)).collect()
    }

    /// Main stat and substat contributions of this piece
    pub fn stats(&self, data: &dyn GameData) -> StatBlock {
        let mut stats = StatBlock::new();

        if !self.main_stat.is_empty() {
            match StatType::from_id(&self.main_stat) {
                Some(stat) => stats.add(stat, data.artifact_main_stat_at(self.rarity, self.level, stat)),
                None => debug!(stat = %self.main_stat, "ignoring unknown artifact main stat"),
            }
        }

        for sub in &self.sub_stats {
            stats.add_by_id(&sub.stat, sub.raw_value);
        }

        stats
    }
}
