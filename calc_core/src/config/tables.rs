//! Game data tables: base stat curves, set bonuses and artifact main stats

use super::ConfigError;
use crate::stat_block::{StatBlock, StatType};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

/// All numeric game data, keyed by entity id
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataTables {
    #[serde(default)]
    pub characters: HashMap<String, EntityTable>,
    #[serde(default)]
    pub weapons: HashMap<String, EntityTable>,
    #[serde(default)]
    pub artifact_sets: HashMap<String, SetBonusTable>,
    #[serde(default)]
    pub artifact_main_stats: Vec<MainStatTable>,
}

/// Base stats of a character or weapon across levels
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntityTable {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub levels: Vec<LevelRow>,
}

/// Base stats at one level/ascension breakpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelRow {
    pub level: u32,
    #[serde(default)]
    pub ascended: bool,
    /// Stat id to value
    #[serde(default)]
    pub stats: BTreeMap<String, f64>,
}

/// Bonus table of one artifact set
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SetBonusTable {
    #[serde(default)]
    pub name: String,
    /// Piece counts that unlock a bonus, ascending
    #[serde(default)]
    pub bonus_thresholds: Vec<u32>,
    #[serde(default)]
    pub bonuses: Vec<SetBonus>,
}

/// Bonus unlocked at one threshold
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SetBonus {
    pub threshold: u32,
    /// Plain additive stat bonuses, stat id to value
    #[serde(default)]
    pub stats: BTreeMap<String, f64>,
    /// Non-additive effect resolved through the set bonus registry
    #[serde(default)]
    pub extra: Option<SpecialBonus>,
}

/// Reference to a special bonus handler
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpecialBonus {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub params: Vec<f64>,
}

/// Main stat values for one rarity and stat, indexed by artifact level
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MainStatTable {
    pub rarity: u32,
    pub stat: String,
    pub values: Vec<f64>,
}

impl SetBonusTable {
    /// Bonus entry for a threshold
    pub fn bonus_at(&self, threshold: u32) -> Option<&SetBonus> {
        self.bonuses.iter().find(|bonus| bonus.threshold == threshold)
    }
}

impl DataTables {
    /// Sample tables shipped with the crate
    pub fn bundled() -> Result<DataTables, ConfigError> {
        DataTables::parse(include_str!("../../config/data.toml"))
    }

    /// Load and validate tables from a TOML file
    pub fn load(path: &Path) -> Result<DataTables, ConfigError> {
        let tables: DataTables = super::load_toml(path)?;
        tables.validate()?;
        Ok(tables)
    }

    /// Parse and validate tables from a TOML string
    pub fn parse(content: &str) -> Result<DataTables, ConfigError> {
        let tables: DataTables = super::parse_toml(content)?;
        tables.validate()?;
        Ok(tables)
    }

    /// Check that every set lists ascending thresholds with a bonus for each
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (id, set) in &self.artifact_sets {
            if set.bonus_thresholds.windows(2).any(|pair| pair[0] >= pair[1]) {
                return Err(ConfigError::ValidationError(format!(
                    "artifact set {} has thresholds out of order",
                    id
                )));
            }
            if let Some(missing) = set
                .bonus_thresholds
                .iter()
                .find(|threshold| set.bonus_at(**threshold).is_none())
            {
                return Err(ConfigError::ValidationError(format!(
                    "artifact set {} has no bonus for threshold {}",
                    id, missing
                )));
            }
        }
        Ok(())
    }

    /// Base stats of a character or weapon
    ///
    /// Uses the exact `(level, ascended)` row when present, otherwise the
    /// highest row at or below `level` that the ascension state allows.
    /// Unknown ids yield an empty record.
    pub fn base_stats_at(&self, entity_id: &str, level: u32, ascended: bool) -> StatBlock {
        let Some(table) = self
            .characters
            .get(entity_id)
            .or_else(|| self.weapons.get(entity_id))
        else {
            return StatBlock::new();
        };

        let row = table
            .levels
            .iter()
            .find(|row| row.level == level && row.ascended == ascended)
            .or_else(|| {
                table
                    .levels
                    .iter()
                    .filter(|row| row.level <= level && (ascended || !row.ascended))
                    .max_by_key(|row| (row.level, row.ascended))
            });

        let mut stats = StatBlock::new();
        if let Some(row) = row {
            for (stat, value) in &row.stats {
                stats.add_by_id(stat, *value);
            }
        }
        stats
    }

    /// Main stat value of an artifact, zero when the table has no entry
    ///
    /// Levels past the end of the table use the last value.
    pub fn main_stat_at(&self, rarity: u32, level: u32, stat: StatType) -> f64 {
        self.artifact_main_stats
            .iter()
            .find(|table| table.rarity == rarity && table.stat == stat.id())
            .and_then(|table| {
                let index = (level as usize).min(table.values.len().saturating_sub(1));
                table.values.get(index).copied()
            })
            .unwrap_or(0.0)
    }
}
