//! Weapon - The equipped weapon and its kit

use crate::kit::{Catalog, WeaponKit};
use crate::mixin::{ModifierMixin, StatMixin};
use crate::option::GameOption;
use crate::source::MixinSource;
use std::fmt;
use std::sync::Arc;

/// Highest refinement rank
pub const MAX_REFINEMENT: u32 = 5;

/// The equipped weapon
#[derive(Clone)]
pub struct Weapon {
    id: String,
    level: u32,
    ascended: bool,
    refinement: u32,
    kit: Arc<dyn WeaponKit>,
}

impl Weapon {
    /// Create a weapon at refinement 1, looking up its kit in the catalog
    pub fn new(id: impl Into<String>, level: u32, ascended: bool, catalog: &Catalog) -> Self {
        let id = id.into();
        let kit = catalog.weapon(&id);
        Weapon {
            id,
            level,
            ascended,
            refinement: 1,
            kit,
        }
    }

    /// No weapon selected
    pub fn empty(catalog: &Catalog) -> Self {
        Weapon::new("", 1, false, catalog)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn ascended(&self) -> bool {
        self.ascended
    }

    pub fn refinement(&self) -> u32 {
        self.refinement
    }

    /// Switch to another weapon, keeping level, ascension and refinement
    pub fn set_id(&mut self, id: impl Into<String>, catalog: &Catalog) {
        self.id = id.into();
        self.kit = catalog.weapon(&self.id);
    }

    pub fn set_level(&mut self, level: u32) {
        self.level = level;
    }

    pub fn set_ascended(&mut self, ascended: bool) {
        self.ascended = ascended;
    }

    /// Set refinement, clamped to 1..=5
    pub fn set_refinement(&mut self, refinement: u32) {
        self.refinement = refinement.clamp(1, MAX_REFINEMENT);
    }

    /// Fresh option instances for the current refinement
    pub fn options(&self) -> Vec<GameOption> {
        self.kit.options(self.refinement)
    }
}

impl MixinSource for Weapon {
    fn source_id(&self) -> &str {
        &self.id
    }

    fn passive_stat_mixins(&self) -> Vec<StatMixin> {
        self.kit.passive_stat_mixins(self)
    }

    fn passive_modifier_mixins(&self) -> Vec<ModifierMixin> {
        self.kit.passive_modifier_mixins(self)
    }
}

impl fmt::Debug for Weapon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Weapon")
            .field("id", &self.id)
            .field("level", &self.level)
            .field("ascended", &self.ascended)
            .field("refinement", &self.refinement)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refinement_is_clamped() {
        let mut weapon = Weapon::empty(&Catalog::new());
        assert_eq!(weapon.refinement(), 1);
        weapon.set_refinement(9);
        assert_eq!(weapon.refinement(), 5);
        weapon.set_refinement(0);
        assert_eq!(weapon.refinement(), 1);
    }

    #[test]
    fn test_homa_has_passives() {
        let weapon = Weapon::new("staff_of_homa", 90, true, &Catalog::with_defaults());
        assert!(!weapon.passive_stat_mixins().is_empty());
        assert!(weapon.passive_modifier_mixins().is_empty());
    }
}
