//! Prelude module for convenient imports
//!
//! ```rust
//! use calc_core::prelude::*;
//! ```

// Core types
pub use crate::stat_block::{StatBlock, StatType, StatValue};
pub use crate::types::{
    ArtifactSlot, AttackCategory, CritType, Element, Priority, Reaction, TalentCategory, TalentLevels,
};

// Entities
pub use crate::source::{Artifact, ArtifactSet, Character, MixinSource, SubStat, Weapon};

// Options and mixins
pub use crate::mixin::{ModifierMixin, Prioritized, StatMixin};
pub use crate::option::{GameOption, OptionKind, OptionOwner, OptionValue};

// Damage
pub use crate::damage::{calculate_damage, DamageValue, Hit, ScalingStat};
pub use crate::modifier::{CombatInputs, DamageModifier, Resistance};
pub use crate::talent::{TalentValue, TalentValueSet, Talents};

// Session
pub use crate::calculator::{recompute_all, AppState, Calculator, Computation, OptionFamily};
pub use crate::library::{GameData, Library};
pub use crate::save::{create_save, load_save, Save, SaveBook};
