//! Sources - Entities that contribute stats and mixins

mod artifact;
mod artifact_set;
mod character;
mod set_bonus;
mod weapon;

pub use artifact::{Artifact, SubStat};
pub use artifact_set::ArtifactSet;
pub use character::Character;
pub use set_bonus::{resolve_set_bonus, sum_set_bonuses, SetBonusFn, SetBonusRegistry, DEFAULT_SET_BONUS};
pub use weapon::Weapon;

use crate::mixin::{ModifierMixin, StatMixin};

/// Anything that contributes passive mixins
///
/// Passives are always active. Toggleable effects are exposed as options
/// instead and collected separately.
pub trait MixinSource {
    /// Identifier of the entity, used to label mixins in logs
    fn source_id(&self) -> &str;

    /// Always-on stat transforms
    fn passive_stat_mixins(&self) -> Vec<StatMixin> {
        Vec::new()
    }

    /// Always-on damage modifier transforms
    fn passive_modifier_mixins(&self) -> Vec<ModifierMixin> {
        Vec::new()
    }
}
