//! Mixins - Pure transforms contributed by characters, weapons, sets and options
//!
//! A stat mixin folds into the running [`StatBlock`]; a modifier mixin folds
//! into the [`DamageModifier`] and reads the finalized stats. Both take and
//! return their record by value.

mod collector;

pub use collector::{arrange_by_priority, collect_modifier_mixins, collect_stat_mixins, Contributors};

use crate::modifier::DamageModifier;
use crate::stat_block::StatBlock;
use crate::types::{Priority, TalentLevels};
use std::fmt;
use std::sync::Arc;

type StatApply = dyn Fn(StatBlock, &TalentLevels) -> StatBlock + Send + Sync;
type ModifierApply = dyn Fn(DamageModifier, &StatBlock) -> DamageModifier + Send + Sync;

/// Anything that declares an application tier
pub trait Prioritized {
    fn priority(&self) -> Priority;
}

/// Transform over the stat record
#[derive(Clone)]
pub struct StatMixin {
    source: String,
    priority: Priority,
    apply: Arc<StatApply>,
}

impl StatMixin {
    /// Create a Normal-priority mixin
    pub fn new<F>(source: impl Into<String>, apply: F) -> Self
    where
        F: Fn(StatBlock, &TalentLevels) -> StatBlock + Send + Sync + 'static,
    {
        StatMixin {
            source: source.into(),
            priority: Priority::Normal,
            apply: Arc::new(apply),
        }
    }

    /// Mixin that adds a fixed set of stats
    pub fn additive(source: impl Into<String>, bonus: StatBlock) -> Self {
        StatMixin::new(source, move |mut stats, _| {
            stats.merge(&bonus);
            stats
        })
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Label of the contributor that produced this mixin
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn apply(&self, stats: StatBlock, talents: &TalentLevels) -> StatBlock {
        (self.apply)(stats, talents)
    }
}

impl Prioritized for StatMixin {
    fn priority(&self) -> Priority {
        self.priority
    }
}

impl fmt::Debug for StatMixin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StatMixin")
            .field("source", &self.source)
            .field("priority", &self.priority)
            .finish()
    }
}

/// Transform over the damage modifier, reading the finalized stats
#[derive(Clone)]
pub struct ModifierMixin {
    source: String,
    priority: Priority,
    apply: Arc<ModifierApply>,
}

impl ModifierMixin {
    /// Create a Normal-priority mixin
    pub fn new<F>(source: impl Into<String>, apply: F) -> Self
    where
        F: Fn(DamageModifier, &StatBlock) -> DamageModifier + Send + Sync + 'static,
    {
        ModifierMixin {
            source: source.into(),
            priority: Priority::Normal,
            apply: Arc::new(apply),
        }
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Label of the contributor that produced this mixin
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn apply(&self, modifier: DamageModifier, stats: &StatBlock) -> DamageModifier {
        (self.apply)(modifier, stats)
    }
}

impl Prioritized for ModifierMixin {
    fn priority(&self) -> Priority {
        self.priority
    }
}

impl fmt::Debug for ModifierMixin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModifierMixin")
            .field("source", &self.source)
            .field("priority", &self.priority)
            .finish()
    }
}
