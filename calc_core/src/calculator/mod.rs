//! Calculator - Recomputation of stats, damage modifier and talent values

mod state;

pub use state::{AppState, OptionFamily, ARTIFACT_SET_SLOTS};

use crate::library::{GameData, Library};
use crate::mixin::{collect_modifier_mixins, collect_stat_mixins, ModifierMixin, StatMixin};
use crate::modifier::{compute_damage_modifier, CombatInputs, DamageModifier};
use crate::option::{find_option, GameOption, OptionValue};
use crate::source::{sum_set_bonuses, Artifact};
use crate::stat_block::{compute_total_stats, StatBlock};
use crate::talent::{evaluate_talents, TalentValueSet};
use crate::types::TalentLevels;
use serde::Serialize;
use tracing::{debug, trace};

/// Output of one recomputation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Computation {
    pub stats: StatBlock,
    pub modifier: DamageModifier,
    pub talent_values: TalentValueSet,
}

/// Run every pass from scratch
pub fn recompute_all(library: &Library, state: &AppState) -> Computation {
    let set_bonus_total = sum_set_bonuses(&state.artifact_sets);
    let contributors = state.contributors();
    let stat_mixins = collect_stat_mixins(&contributors);
    let modifier_mixins = collect_modifier_mixins(&contributors);
    run_passes(library, state, &set_bonus_total, &stat_mixins, &modifier_mixins)
}

fn run_passes(
    library: &Library,
    state: &AppState,
    set_bonus_total: &StatBlock,
    stat_mixins: &[StatMixin],
    modifier_mixins: &[ModifierMixin],
) -> Computation {
    debug!(
        character = state.character.id(),
        stat_mixins = stat_mixins.len(),
        modifier_mixins = modifier_mixins.len(),
        "recompute started"
    );

    let stats = compute_total_stats(
        library,
        &state.character,
        &state.weapon,
        set_bonus_total,
        &state.artifacts,
        &state.combat.talent_levels,
        stat_mixins,
    );
    let modifier = compute_damage_modifier(&state.combat, state.character.level(), modifier_mixins, &stats);
    let talents = library.talent_formulas(state.character.id());
    let talent_values = evaluate_talents(&talents, &stats, &modifier);

    debug!(stats = stats.len(), "recompute finished");
    Computation {
        stats,
        modifier,
        talent_values,
    }
}

/// Derived values reused between recomputations
#[derive(Debug, Default)]
struct Cache {
    set_bonus_total: Option<StatBlock>,
    stat_mixins: Option<Vec<StatMixin>>,
    modifier_mixins: Option<Vec<ModifierMixin>>,
}

impl Cache {
    fn invalidate_mixins(&mut self) {
        self.stat_mixins = None;
        self.modifier_mixins = None;
    }

    fn invalidate_all(&mut self) {
        self.set_bonus_total = None;
        self.invalidate_mixins();
    }
}

/// Stateful calculator session
///
/// Setters mutate the state and mark derived caches stale.
/// [`Calculator::recompute`] rebuilds only what is stale, then always runs
/// the three passes.
#[derive(Debug)]
pub struct Calculator {
    library: Library,
    state: AppState,
    cache: Cache,
    computation: Option<Computation>,
}

impl Calculator {
    /// Start a session with nothing selected
    pub fn new(library: Library) -> Self {
        let state = AppState::new(&library.catalog);
        Calculator::with_state(library, state)
    }

    /// Start a session from an existing state, such as a loaded save
    pub fn with_state(library: Library, state: AppState) -> Self {
        Calculator {
            library,
            state,
            cache: Cache::default(),
            computation: None,
        }
    }

    pub fn library(&self) -> &Library {
        &self.library
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Result of the last recomputation
    pub fn computation(&self) -> Option<&Computation> {
        self.computation.as_ref()
    }

    /// Cached set bonus total, if fresh
    pub fn set_bonus_total(&self) -> Option<&StatBlock> {
        self.cache.set_bonus_total.as_ref()
    }

    /// Cached stat mixins, if fresh
    pub fn stat_mixins(&self) -> Option<&[StatMixin]> {
        self.cache.stat_mixins.as_deref()
    }

    /// Cached modifier mixins, if fresh
    pub fn modifier_mixins(&self) -> Option<&[ModifierMixin]> {
        self.cache.modifier_mixins.as_deref()
    }

    /// Replace the whole state
    pub fn load_state(&mut self, state: AppState) {
        self.state = state;
        self.cache.invalidate_all();
    }

    // === Character ===

    /// Select a character, replacing its options with fresh instances
    pub fn set_character_id(&mut self, id: &str) {
        self.state.character.set_id(id, &self.library.catalog);
        self.state.character_options = self.state.character.options();
        self.cache.invalidate_mixins();
    }

    pub fn set_character_level(&mut self, level: u32) {
        self.state.character.set_level(level);
        self.cache.invalidate_mixins();
    }

    pub fn set_character_ascended(&mut self, ascended: bool) {
        self.state.character.set_ascended(ascended);
        self.cache.invalidate_mixins();
    }

    pub fn set_character_constellation(&mut self, constellation: u32) {
        self.state.character.set_constellation(constellation);
        self.cache.invalidate_mixins();
    }

    // === Weapon ===

    /// Select a weapon, replacing its options with fresh instances
    pub fn set_weapon_id(&mut self, id: &str) {
        self.state.weapon.set_id(id, &self.library.catalog);
        self.state.weapon_options = self.state.weapon.options();
        self.cache.invalidate_mixins();
    }

    pub fn set_weapon_level(&mut self, level: u32) {
        self.state.weapon.set_level(level);
        self.cache.invalidate_mixins();
    }

    pub fn set_weapon_ascended(&mut self, ascended: bool) {
        self.state.weapon.set_ascended(ascended);
        self.cache.invalidate_mixins();
    }

    /// Change refinement, rebuilding weapon options while keeping their values
    pub fn set_weapon_refinement(&mut self, refinement: u32) {
        self.state.weapon.set_refinement(refinement);
        let previous = std::mem::take(&mut self.state.weapon_options);
        self.state.weapon_options = self.state.weapon.options();
        for old in &previous {
            if let Some(option) = find_option(&mut self.state.weapon_options, old.id()) {
                option.set_value(old.value().clone());
            }
        }
        self.cache.invalidate_mixins();
    }

    // === Artifacts ===

    /// Replace the artifact at a slot index
    pub fn set_artifact(&mut self, index: usize, artifact: Artifact) -> bool {
        match self.state.artifacts.get_mut(index) {
            Some(slot) => {
                *slot = artifact;
                true
            }
            None => false,
        }
    }

    pub fn set_artifact_set_id(&mut self, index: usize, id: &str) -> bool {
        let Some(set) = self.state.artifact_sets.get_mut(index) else {
            return false;
        };
        set.set_id(id, &self.library);
        self.cache.invalidate_all();
        true
    }

    pub fn set_artifact_set_pieces(&mut self, index: usize, pieces: u32) -> bool {
        let Some(set) = self.state.artifact_sets.get_mut(index) else {
            return false;
        };
        set.set_pieces(pieces, &self.library);
        self.cache.invalidate_all();
        true
    }

    // === Options and combat ===

    /// Set an option value. Returns false for unknown ids or ill-typed values.
    pub fn set_option_value(&mut self, family: OptionFamily, id: &str, value: OptionValue) -> bool {
        let changed = self
            .state
            .find_option_mut(family, id)
            .map(|option| option.set_value(value))
            .unwrap_or(false);
        if changed {
            self.cache.invalidate_mixins();
        }
        changed
    }

    /// Current option instances of a family
    pub fn options(&self, family: OptionFamily) -> Vec<&GameOption> {
        match family {
            OptionFamily::Character => self.state.character_options.iter().collect(),
            OptionFamily::Weapon => self.state.weapon_options.iter().collect(),
            OptionFamily::ArtifactSet => self.state.artifact_set_options().collect(),
        }
    }

    pub fn set_combat_inputs(&mut self, inputs: CombatInputs) {
        self.state.combat = inputs;
    }

    pub fn set_talent_levels(&mut self, levels: TalentLevels) {
        self.state.combat.talent_levels = levels;
    }

    // === Recomputation ===

    /// Rebuild stale caches and run every pass
    pub fn recompute(&mut self) -> &Computation {
        let state = &self.state;

        let set_bonus_total = match self.cache.set_bonus_total.take() {
            Some(total) => {
                trace!("set bonus total cache hit");
                total
            }
            None => sum_set_bonuses(&state.artifact_sets),
        };
        let stat_mixins = match self.cache.stat_mixins.take() {
            Some(mixins) => {
                trace!("stat mixin cache hit");
                mixins
            }
            None => collect_stat_mixins(&state.contributors()),
        };
        let modifier_mixins = match self.cache.modifier_mixins.take() {
            Some(mixins) => {
                trace!("modifier mixin cache hit");
                mixins
            }
            None => collect_modifier_mixins(&state.contributors()),
        };

        let computation = run_passes(&self.library, state, &set_bonus_total, &stat_mixins, &modifier_mixins);

        self.cache.set_bonus_total = Some(set_bonus_total);
        self.cache.stat_mixins = Some(stat_mixins);
        self.cache.modifier_mixins = Some(modifier_mixins);
        self.computation.insert(computation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stat_block::StatType;
    use crate::types::{Element, TalentCategory};

    fn calculator() -> Calculator {
        Calculator::new(Library::bundled().unwrap())
    }

    #[test]
    fn test_empty_state_computes() {
        let mut calc = calculator();
        let computation = calc.recompute();
        assert!(computation.stats.is_empty());
        assert!(computation.talent_values.is_empty());
        assert!(computation.modifier.infusion.is_none());
    }

    #[test]
    fn test_caches_filled_then_invalidated() {
        let mut calc = calculator();
        assert!(calc.stat_mixins().is_none());
        calc.recompute();
        assert!(calc.stat_mixins().is_some());
        assert!(calc.set_bonus_total().is_some());

        calc.set_combat_inputs(CombatInputs::default());
        assert!(calc.stat_mixins().is_some());

        calc.set_character_id("hutao");
        assert!(calc.stat_mixins().is_none());
        assert!(calc.set_bonus_total().is_some());

        calc.recompute();
        calc.set_artifact_set_pieces(0, 2);
        assert!(calc.set_bonus_total().is_none());
    }

    #[test]
    fn test_cached_result_matches_full_pass() {
        let mut calc = calculator();
        calc.set_character_id("hutao");
        calc.set_character_level(90);
        calc.set_character_ascended(true);
        calc.set_weapon_id("staff_of_homa");
        calc.set_weapon_level(90);
        calc.set_weapon_ascended(true);
        calc.set_artifact_set_id(0, "crimson_witch_of_flames");
        calc.set_artifact_set_pieces(0, 4);
        calc.recompute();

        calc.set_talent_levels(TalentLevels::new(10, 10, 10));
        let cached = calc.recompute().clone();
        assert_eq!(cached, recompute_all(calc.library(), calc.state()));
    }

    #[test]
    fn test_option_change_takes_effect() {
        let mut calc = calculator();
        calc.set_character_id("hutao");
        calc.set_character_level(90);
        calc.set_character_ascended(true);
        let before = calc.recompute().stats.total_atk();

        assert!(calc.set_option_value(OptionFamily::Character, "paramitaPapilioState", OptionValue::Boolean(true)));
        let computation = calc.recompute();
        assert!(computation.stats.total_atk() > before);
        assert_eq!(computation.modifier.infusion, Some(Element::Pyro));
        assert!(computation.talent_values.get(TalentCategory::Skill, "bloodBlossom").is_some());
    }

    #[test]
    fn test_unknown_option_is_rejected() {
        let mut calc = calculator();
        calc.recompute();
        assert!(!calc.set_option_value(OptionFamily::Character, "nope", OptionValue::Boolean(true)));
        assert!(calc.stat_mixins().is_some());
    }

    #[test]
    fn test_refinement_keeps_option_values() {
        let mut calc = calculator();
        calc.set_weapon_id("dragons_bane");
        calc.set_option_value(OptionFamily::Weapon, "enemyAffectedByHydroOrPyro", OptionValue::Boolean(true));
        calc.set_weapon_refinement(5);
        assert!(calc.options(OptionFamily::Weapon)[0].value().as_bool());
        let stats = &calc.recompute().stats;
        assert!((stats.get(StatType::AllDmgBonus) - 0.36).abs() < 1e-9);
    }

    #[test]
    fn test_out_of_range_indices() {
        let mut calc = calculator();
        assert!(!calc.set_artifact(9, Artifact::empty(crate::types::ArtifactSlot::Flower)));
        assert!(!calc.set_artifact_set_id(3, "berserker"));
        assert!(!calc.set_artifact_set_pieces(3, 4));
    }
}
