//! AppState - Everything the user has configured

use crate::kit::Catalog;
use crate::mixin::Contributors;
use crate::modifier::CombatInputs;
use crate::option::{find_option, GameOption};
use crate::source::{Artifact, ArtifactSet, Character, Weapon};

/// Number of artifact set slots
pub const ARTIFACT_SET_SLOTS: usize = 3;

/// Which option list an option id refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionFamily {
    Character,
    Weapon,
    /// Options of every equipped set, searched in set order
    ArtifactSet,
}

/// Complete calculator input
#[derive(Debug, Clone)]
pub struct AppState {
    pub character: Character,
    pub weapon: Weapon,
    /// One piece per slot
    pub artifacts: Vec<Artifact>,
    pub artifact_sets: Vec<ArtifactSet>,
    pub combat: CombatInputs,
    pub character_options: Vec<GameOption>,
    pub weapon_options: Vec<GameOption>,
}

impl AppState {
    /// Nothing selected: empty character and weapon, unset artifacts and sets
    pub fn new(catalog: &Catalog) -> Self {
        let character = Character::empty(catalog);
        let weapon = Weapon::empty(catalog);
        AppState {
            character_options: character.options(),
            weapon_options: weapon.options(),
            character,
            weapon,
            artifacts: Artifact::empty_set(),
            artifact_sets: (0..ARTIFACT_SET_SLOTS).map(|_| ArtifactSet::empty()).collect(),
            combat: CombatInputs::default(),
        }
    }

    /// Borrowed view used by mixin collection
    pub fn contributors(&self) -> Contributors<'_> {
        Contributors {
            character: &self.character,
            weapon: &self.weapon,
            artifact_sets: &self.artifact_sets,
            character_options: &self.character_options,
            weapon_options: &self.weapon_options,
        }
    }

    /// Find an option by family and id
    pub fn find_option_mut(&mut self, family: OptionFamily, id: &str) -> Option<&mut GameOption> {
        match family {
            OptionFamily::Character => find_option(&mut self.character_options, id),
            OptionFamily::Weapon => find_option(&mut self.weapon_options, id),
            OptionFamily::ArtifactSet => self
                .artifact_sets
                .iter_mut()
                .find_map(|set| find_option(set.options_mut(), id)),
        }
    }

    /// Options of every equipped set, in set order
    pub fn artifact_set_options(&self) -> impl Iterator<Item = &GameOption> {
        self.artifact_sets.iter().flat_map(|set| set.options().iter())
    }
}
