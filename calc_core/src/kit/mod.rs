//! Kits - Per-entity behavior plugged into characters, weapons and sets
//!
//! Numbers live in the data tables. A kit supplies what tables cannot
//! express: options, passive mixins and talent formulas.

mod artifact_sets;
mod hutao;
mod tartaglia;
mod weapons;

pub use artifact_sets::{BerserkerKit, BlizzardStrayerKit, CrimsonWitchKit, ViridescentVenererKit};
pub use hutao::HuTaoKit;
pub use tartaglia::TartagliaKit;
pub use weapons::{DragonsBaneKit, StaffOfHomaKit};

use crate::damage::{calculate_damage, Hit};
use crate::mixin::{ModifierMixin, StatMixin};
use crate::option::GameOption;
use crate::source::{Character, Weapon};
use crate::talent::{TalentInput, TalentValue, Talents};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Talent multiplier growth per talent level, level 1 first
const TALENT_GROWTH: [f64; 15] = [
    1.0, 1.075, 1.15, 1.25, 1.325, 1.4, 1.5, 1.6, 1.7, 1.8, 1.9, 2.0, 2.125, 2.25, 2.375,
];

/// Scale a level 1 talent multiplier to a talent level (clamped to 1..=15)
pub fn talent_scale(base: f64, level: u32) -> f64 {
    let index = (level.clamp(1, TALENT_GROWTH.len() as u32) - 1) as usize;
    base * TALENT_GROWTH[index]
}

/// Evaluate a hit as a talent value
pub(crate) fn hit_value(input: &TalentInput<'_>, hit: Hit) -> TalentValue {
    TalentValue::Damage(calculate_damage(&hit, input.stats, input.modifier))
}

/// Behavior of a character
pub trait CharacterKit: Send + Sync {
    /// Fresh options with initial values
    fn options(&self) -> Vec<GameOption> {
        Vec::new()
    }

    fn passive_stat_mixins(&self, _character: &Character) -> Vec<StatMixin> {
        Vec::new()
    }

    fn passive_modifier_mixins(&self, _character: &Character) -> Vec<ModifierMixin> {
        Vec::new()
    }

    fn talents(&self) -> Talents {
        Talents::new()
    }
}

/// Behavior of a weapon
pub trait WeaponKit: Send + Sync {
    /// Fresh options for a refinement rank
    fn options(&self, _refinement: u32) -> Vec<GameOption> {
        Vec::new()
    }

    fn passive_stat_mixins(&self, _weapon: &Weapon) -> Vec<StatMixin> {
        Vec::new()
    }

    fn passive_modifier_mixins(&self, _weapon: &Weapon) -> Vec<ModifierMixin> {
        Vec::new()
    }
}

/// Behavior of an artifact set
pub trait ArtifactSetKit: Send + Sync {
    /// Every option of the set, each tagged with its unlocking threshold
    fn options(&self) -> Vec<GameOption> {
        Vec::new()
    }

    fn passive_stat_mixins(&self, _pieces: u32) -> Vec<StatMixin> {
        Vec::new()
    }

    fn passive_modifier_mixins(&self, _pieces: u32) -> Vec<ModifierMixin> {
        Vec::new()
    }
}

/// Kit with no behavior, used for unknown ids
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyKit;

impl CharacterKit for EmptyKit {}
impl WeaponKit for EmptyKit {}
impl ArtifactSetKit for EmptyKit {}

/// Registry of kits by entity id
#[derive(Clone, Default)]
pub struct Catalog {
    characters: HashMap<String, Arc<dyn CharacterKit>>,
    weapons: HashMap<String, Arc<dyn WeaponKit>>,
    artifact_sets: HashMap<String, Arc<dyn ArtifactSetKit>>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Catalog::default()
    }

    /// Create a catalog with the built-in kits
    pub fn with_defaults() -> Self {
        let mut catalog = Catalog::new();
        catalog.register_character(hutao::ID, Arc::new(HuTaoKit));
        catalog.register_character(tartaglia::ID, Arc::new(TartagliaKit));
        catalog.register_weapon(weapons::STAFF_OF_HOMA, Arc::new(StaffOfHomaKit));
        catalog.register_weapon(weapons::DRAGONS_BANE, Arc::new(DragonsBaneKit));
        catalog.register_artifact_set(artifact_sets::CRIMSON_WITCH, Arc::new(CrimsonWitchKit));
        catalog.register_artifact_set(artifact_sets::BLIZZARD_STRAYER, Arc::new(BlizzardStrayerKit));
        catalog.register_artifact_set(artifact_sets::BERSERKER, Arc::new(BerserkerKit));
        catalog.register_artifact_set(artifact_sets::VIRIDESCENT_VENERER, Arc::new(ViridescentVenererKit));
        catalog
    }

    pub fn register_character(&mut self, id: impl Into<String>, kit: Arc<dyn CharacterKit>) {
        self.characters.insert(id.into(), kit);
    }

    pub fn register_weapon(&mut self, id: impl Into<String>, kit: Arc<dyn WeaponKit>) {
        self.weapons.insert(id.into(), kit);
    }

    pub fn register_artifact_set(&mut self, id: impl Into<String>, kit: Arc<dyn ArtifactSetKit>) {
        self.artifact_sets.insert(id.into(), kit);
    }

    /// Kit of a character, empty when unregistered
    pub fn character(&self, id: &str) -> Arc<dyn CharacterKit> {
        match self.characters.get(id) {
            Some(kit) => Arc::clone(kit),
            None => Arc::new(EmptyKit),
        }
    }

    /// Kit of a weapon, empty when unregistered
    pub fn weapon(&self, id: &str) -> Arc<dyn WeaponKit> {
        match self.weapons.get(id) {
            Some(kit) => Arc::clone(kit),
            None => Arc::new(EmptyKit),
        }
    }

    /// Kit of an artifact set, empty when unregistered
    pub fn artifact_set(&self, id: &str) -> Arc<dyn ArtifactSetKit> {
        match self.artifact_sets.get(id) {
            Some(kit) => Arc::clone(kit),
            None => Arc::new(EmptyKit),
        }
    }
}

impl fmt::Debug for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Catalog")
            .field("characters", &sorted_ids(&self.characters))
            .field("weapons", &sorted_ids(&self.weapons))
            .field("artifact_sets", &sorted_ids(&self.artifact_sets))
            .finish()
    }
}

fn sorted_ids<V>(kits: &HashMap<String, V>) -> Vec<&str> {
    let mut ids: Vec<&str> = kits.keys().map(String::as_str).collect();
    ids.sort_unstable();
    ids
}
