//! Character - The active character and its kit

use crate::kit::{Catalog, CharacterKit};
use crate::mixin::{ModifierMixin, StatMixin};
use crate::option::GameOption;
use crate::source::MixinSource;
use crate::talent::Talents;
use std::fmt;
use std::sync::Arc;

/// The character being built
#[derive(Clone)]
pub struct Character {
    id: String,
    level: u32,
    ascended: bool,
    constellation: u32,
    kit: Arc<dyn CharacterKit>,
}

impl Character {
    /// Create a character, looking up its kit in the catalog
    pub fn new(id: impl Into<String>, level: u32, ascended: bool, catalog: &Catalog) -> Self {
        let id = id.into();
        let kit = catalog.character(&id);
        Character {
            id,
            level,
            ascended,
            constellation: 0,
            kit,
        }
    }

    /// No character selected
    pub fn empty(catalog: &Catalog) -> Self {
        Character::new("", 1, false, catalog)
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

    pub fn constellation(&self) -> u32 {
        self.constellation
    }

    /// Switch to another character, keeping level and ascension
    pub fn set_id(&mut self, id: impl Into<String>, catalog: &Catalog) {
        self.id = id.into();
        self.kit = catalog.character(&self.id);
        self.constellation = 0;
    }

    pub fn set_level(&mut self, level: u32) {
        self.level = level;
    }

    pub fn set_ascended(&mut self, ascended: bool) {
        self.ascended = ascended;
    }

    pub fn set_constellation(&mut self, constellation: u32) {
        self.constellation = constellation;
    }

    /// Fresh option instances with their initial values
    pub fn options(&self) -> Vec<GameOption> {
        self.kit.options()
    }

    /// Talent formulas declared by the kit
    pub fn talents(&self) -> Talents {
        self.kit.talents()
    }
}

impl MixinSource for Character {
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

impl fmt::Debug for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Character")
            .field("id", &self.id)
            .field("level", &self.level)
            .field("ascended", &self.ascended)
            .field("constellation", &self.constellation)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_character_has_empty_kit() {
        let character = Character::new("nobody", 90, true, &Catalog::with_defaults());
        assert!(character.options().is_empty());
        assert!(character.passive_stat_mixins().is_empty());
        assert!(character.talents().is_empty());
    }

    #[test]
    fn test_set_id_swaps_kit() {
        let catalog = Catalog::with_defaults();
        let mut character = Character::new("nobody", 80, true, &catalog);
        character.set_id("hutao", &catalog);
        assert_eq!(character.id(), "hutao");
        assert_eq!(character.level(), 80);
        assert!(character.options().iter().any(|o| o.id() == "paramitaPapilioState"));
    }
}
