//! calc_core - Character build calculator core
//!
//! This library provides:
//! - StatBlock: Sparse stat record with flat and percent stats kept apart
//! - Mixins: Pure transforms contributed by characters, weapons, sets and options
//! - Aggregation: Total stats, damage modifier and talent values in one pass
//! - Calculator: Stateful session with cached set bonuses and mixins
//! - Save: Flat JSON snapshots of the calculator state

pub mod calculator;
pub mod config;
pub mod damage;
pub mod kit;
pub mod library;
pub mod mixin;
pub mod modifier;
pub mod option;
pub mod prelude;
pub mod save;
pub mod source;
pub mod stat_block;
pub mod talent;
pub mod types;

// Re-export core types for convenience
pub use calculator::{recompute_all, AppState, Calculator, Computation, OptionFamily};
pub use config::{ConfigError, DataTables};
pub use damage::{calculate_damage, DamageValue, Hit};
pub use kit::Catalog;
pub use library::{GameData, Library};
pub use mixin::{collect_modifier_mixins, collect_stat_mixins, ModifierMixin, StatMixin};
pub use modifier::{compute_damage_modifier, CombatInputs, DamageModifier, Resistance};
pub use option::{GameOption, OptionKind, OptionOwner, OptionValue};
pub use save::{create_save, load_save, Save, SaveBook, SaveError};
pub use source::{resolve_set_bonus, Artifact, ArtifactSet, Character, SetBonusRegistry, SubStat, Weapon};
pub use stat_block::{compute_total_stats, StatBlock, StatType, StatValue};
pub use talent::{evaluate_talents, TalentValue, TalentValueSet, Talents};
