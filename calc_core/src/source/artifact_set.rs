//! ArtifactSet - An equipped set, its resolved bonus and its options

use crate::config::SetBonusTable;
use crate::kit::{ArtifactSetKit, EmptyKit};
use crate::library::{GameData, Library};
use crate::mixin::{ModifierMixin, StatMixin};
use crate::option::GameOption;
use crate::source::{resolve_set_bonus, MixinSource};
use crate::stat_block::StatBlock;
use std::fmt;
use std::sync::Arc;

/// An artifact set with a piece count
///
/// Owns its set bonus stats and the options its reached thresholds unlock.
/// Both are re-evaluated whenever the id or piece count changes.
#[derive(Clone)]
pub struct ArtifactSet {
    id: String,
    pieces: u32,
    table: SetBonusTable,
    kit: Arc<dyn ArtifactSetKit>,
    options: Vec<GameOption>,
    stats: StatBlock,
}

impl ArtifactSet {
    /// Create a set and evaluate it for the first time
    pub fn new(id: impl Into<String>, pieces: u32, library: &Library) -> Self {
        let mut set = ArtifactSet::empty();
        set.id = id.into();
        set.pieces = pieces;
        set.load(library);
        set
    }

    /// No set selected
    pub fn empty() -> Self {
        ArtifactSet {
            id: String::new(),
            pieces: 0,
            table: SetBonusTable::default(),
            kit: Arc::new(EmptyKit),
            options: Vec::new(),
            stats: StatBlock::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn pieces(&self) -> u32 {
        self.pieces
    }

    pub fn bonus_thresholds(&self) -> &[u32] {
        &self.table.bonus_thresholds
    }

    /// Resolved set bonus for the current piece count
    pub fn stats(&self) -> &StatBlock {
        &self.stats
    }

    /// Options unlocked by the current piece count
    pub fn options(&self) -> &[GameOption] {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut [GameOption] {
        &mut self.options
    }

    /// Switch to another set, instantiating fresh options for it
    pub fn set_id(&mut self, id: impl Into<String>, library: &Library) {
        self.id = id.into();
        self.load(library);
    }

    /// Change the piece count
    ///
    /// Existing option instances keep their values while their threshold is
    /// still reached. Options newly unlocked are appended with initial values.
    pub fn set_pieces(&mut self, pieces: u32, library: &Library) {
        let previous = self.pieces;
        self.pieces = pieces;

        if pieces > previous {
            let unlocked = self
                .kit
                .options()
                .into_iter()
                .filter(|option| option.threshold() > previous && option.threshold() <= pieces);
            self.options.extend(unlocked);
        } else if pieces < previous {
            self.options.retain(|option| option.threshold() <= pieces);
        }

        self.stats = resolve_set_bonus(&self.table, pieces, &library.set_bonuses);
    }

    fn load(&mut self, library: &Library) {
        self.table = library.set_bonus_table(&self.id).cloned().unwrap_or_default();
        self.kit = library.catalog.artifact_set(&self.id);
        let pieces = self.pieces;
        self.options = self
            .kit
            .options()
            .into_iter()
            .filter(|option| option.threshold() <= pieces)
            .collect();
        self.stats = resolve_set_bonus(&self.table, pieces, &library.set_bonuses);
    }
}

impl MixinSource for ArtifactSet {
    fn source_id(&self) -> &str {
        &self.id
    }

    fn passive_stat_mixins(&self) -> Vec<StatMixin> {
        self.kit.passive_stat_mixins(self.pieces)
    }

    fn passive_modifier_mixins(&self) -> Vec<ModifierMixin> {
        self.kit.passive_modifier_mixins(self.pieces)
    }
}

impl fmt::Debug for ArtifactSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArtifactSet")
            .field("id", &self.id)
            .field("pieces", &self.pieces)
            .field("options", &self.options)
            .field("stats", &self.stats)
            .finish()
    }
}
