//! Library - Data tables, kits and set bonus handlers behind one lookup

use crate::config::{ConfigError, DataTables, SetBonusTable};
use crate::kit::Catalog;
use crate::source::{resolve_set_bonus, SetBonusRegistry};
use crate::stat_block::{StatBlock, StatType};
use crate::talent::Talents;

/// Read-only game data consumed by the engines
pub trait GameData {
    /// Base stats of a character or weapon at a level and ascension state
    fn base_stats_at(&self, entity_id: &str, level: u32, ascended: bool) -> StatBlock;

    /// Bonus table of an artifact set
    fn set_bonus_table(&self, set_id: &str) -> Option<&SetBonusTable>;

    /// Talent formulas of a character, empty for unknown ids
    fn talent_formulas(&self, character_id: &str) -> Talents;

    /// Main stat value of an artifact
    fn artifact_main_stat_at(&self, rarity: u32, level: u32, stat: StatType) -> f64;
}

/// Everything the calculator needs to know about the game
#[derive(Debug, Clone, Default)]
pub struct Library {
    pub tables: DataTables,
    pub catalog: Catalog,
    pub set_bonuses: SetBonusRegistry,
}

impl Library {
    pub fn new(tables: DataTables, catalog: Catalog, set_bonuses: SetBonusRegistry) -> Self {
        Library {
            tables,
            catalog,
            set_bonuses,
        }
    }

    /// Bundled tables with the built-in kits and set bonus handlers
    pub fn bundled() -> Result<Library, ConfigError> {
        Ok(Library::new(
            DataTables::bundled()?,
            Catalog::with_defaults(),
            SetBonusRegistry::with_defaults(),
        ))
    }

    /// Stats granted by a set with `pieces` pieces, empty for unknown sets
    pub fn resolve_set_bonus(&self, set_id: &str, pieces: u32) -> StatBlock {
        self.set_bonus_table(set_id)
            .map(|table| resolve_set_bonus(table, pieces, &self.set_bonuses))
            .unwrap_or_default()
    }
}

impl GameData for Library {
    fn base_stats_at(&self, entity_id: &str, level: u32, ascended: bool) -> StatBlock {
        self.tables.base_stats_at(entity_id, level, ascended)
    }

    fn set_bonus_table(&self, set_id: &str) -> Option<&SetBonusTable> {
        self.tables.artifact_sets.get(set_id)
    }

    fn talent_formulas(&self, character_id: &str) -> Talents {
        self.catalog.character(character_id).talents()
    }

    fn artifact_main_stat_at(&self, rarity: u32, level: u32, stat: StatType) -> f64 {
        self.tables.main_stat_at(rarity, level, stat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_library() {
        let library = Library::bundled().unwrap();
        let stats = library.base_stats_at("hutao", 90, true);
        assert!((stats.get(StatType::BaseHp) - 15552.0).abs() < 1e-9);
        assert!(!library.talent_formulas("hutao").is_empty());
        assert!(library.talent_formulas("nobody").is_empty());
    }

    #[test]
    fn test_resolve_set_bonus_by_id() {
        let library = Library::bundled().unwrap();
        let stats = library.resolve_set_bonus("resolution_of_sojourner", 4);
        assert!((stats.get(StatType::AtkPercent) - 0.18).abs() < 1e-9);
        assert!((stats.get(StatType::ChargedCritRate) - 0.3).abs() < 1e-9);
        assert!(library.resolve_set_bonus("unknown", 4).is_empty());
    }
}
