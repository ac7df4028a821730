//! Save - Flat JSON snapshots of the calculator state
//!
//! Every field is optional. Missing fields load as neutral defaults and
//! option ids that no longer exist are skipped.

use crate::calculator::AppState;
use crate::library::Library;
use crate::modifier::{CombatInputs, Resistance, DEFAULT_RESISTANCE};
use crate::option::{find_option, GameOption};
use crate::source::{Artifact, ArtifactSet, Character, SubStat, Weapon};
use crate::types::{ArtifactSlot, CritType, Element, Reaction, TalentLevels};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::debug;

/// Save (de)serialization error
#[derive(Error, Debug)]
pub enum SaveError {
    #[error("Failed to (de)serialize save: {0}")]
    Json(#[from] serde_json::Error),
}

/// A labelled snapshot of the calculator state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Save {
    pub label: String,

    pub character_id: Option<String>,
    pub character_level: Option<u32>,
    pub character_has_ascended: Option<bool>,
    pub character_constellation: Option<u32>,

    pub weapon_id: Option<String>,
    pub weapon_level: Option<u32>,
    pub weapon_has_ascended: Option<bool>,
    pub weapon_refinement: Option<u32>,

    pub artifacts: Option<Vec<ArtifactSave>>,
    pub artifact_sets: Option<Vec<ArtifactSetSave>>,

    pub talent_attack_level: Option<u32>,
    pub talent_skill_level: Option<u32>,
    pub talent_burst_level: Option<u32>,

    pub crit_type: Option<CritType>,
    pub enemy_level: Option<u32>,
    pub enemy_res: Option<EnemyResSave>,
    pub enemy_def_reduction: Option<f64>,
    pub flat_dmg: Option<f64>,
    pub reaction: Option<Reaction>,

    pub character_options: Option<Vec<OptionSave>>,
    pub weapon_options: Option<Vec<OptionSave>>,
    pub artifact_set_options: Option<Vec<OptionSave>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ArtifactSave {
    #[serde(rename = "type")]
    pub slot: Option<ArtifactSlot>,
    pub rarity: Option<u32>,
    pub level: Option<u32>,
    pub main_stat: Option<String>,
    pub sub_stats: Option<Vec<SubStatSave>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SubStatSave {
    pub stat: Option<String>,
    pub value: Option<f64>,
    pub raw_value: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ArtifactSetSave {
    pub artifact_set_id: Option<String>,
    pub artifact_set_pieces: Option<u32>,
}

/// Enemy resistance per element, missing elements load as 10%
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyResSave {
    pub anemo: Option<f64>,
    pub cryo: Option<f64>,
    pub dendro: Option<f64>,
    pub electro: Option<f64>,
    pub geo: Option<f64>,
    pub hydro: Option<f64>,
    pub pyro: Option<f64>,
    pub physical: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptionSave {
    pub id: Option<String>,
    pub value: Option<serde_json::Value>,
}

impl EnemyResSave {
    fn from_resistance(res: &Resistance) -> Self {
        EnemyResSave {
            anemo: Some(res.get(Element::Anemo)),
            cryo: Some(res.get(Element::Cryo)),
            dendro: Some(res.get(Element::Dendro)),
            electro: Some(res.get(Element::Electro)),
            geo: Some(res.get(Element::Geo)),
            hydro: Some(res.get(Element::Hydro)),
            pyro: Some(res.get(Element::Pyro)),
            physical: Some(res.get(Element::Physical)),
        }
    }

    fn to_resistance(&self) -> Resistance {
        let mut res = Resistance::default();
        let entries = [
            (Element::Anemo, self.anemo),
            (Element::Cryo, self.cryo),
            (Element::Dendro, self.dendro),
            (Element::Electro, self.electro),
            (Element::Geo, self.geo),
            (Element::Hydro, self.hydro),
            (Element::Pyro, self.pyro),
            (Element::Physical, self.physical),
        ];
        for (element, value) in entries {
            res.set(element, value.unwrap_or(DEFAULT_RESISTANCE));
        }
        res
    }
}

impl Save {
    pub fn to_json(&self) -> Result<String, SaveError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Save, SaveError> {
        Ok(serde_json::from_str(json)?)
    }
}

fn save_options<'a>(options: impl IntoIterator<Item = &'a GameOption>) -> Vec<OptionSave> {
    options
        .into_iter()
        .map(|option| OptionSave {
            id: Some(option.id().to_string()),
            value: serde_json::to_value(option.value()).ok(),
        })
        .collect()
}

/// Snapshot the state under a label
pub fn create_save(label: impl Into<String>, state: &AppState) -> Save {
    Save {
        label: label.into(),

        character_id: Some(state.character.id().to_string()),
        character_level: Some(state.character.level()),
        character_has_ascended: Some(state.character.ascended()),
        character_constellation: Some(state.character.constellation()),

        weapon_id: Some(state.weapon.id().to_string()),
        weapon_level: Some(state.weapon.level()),
        weapon_has_ascended: Some(state.weapon.ascended()),
        weapon_refinement: Some(state.weapon.refinement()),

        artifacts: Some(
            state
                .artifacts
                .iter()
                .map(|artifact| ArtifactSave {
                    slot: Some(artifact.slot),
                    rarity: Some(artifact.rarity),
                    level: Some(artifact.level),
                    main_stat: Some(artifact.main_stat.clone()),
                    sub_stats: Some(
                        artifact
                            .sub_stats
                            .iter()
                            .map(|sub| SubStatSave {
                                stat: Some(sub.stat.clone()),
                                value: Some(sub.value),
                                raw_value: Some(sub.raw_value),
                            })
                            .collect(),
                    ),
                })
                .collect(),
        ),
        artifact_sets: Some(
            state
                .artifact_sets
                .iter()
                .map(|set| ArtifactSetSave {
                    artifact_set_id: Some(set.id().to_string()),
                    artifact_set_pieces: Some(set.pieces()),
                })
                .collect(),
        ),

        talent_attack_level: Some(state.combat.talent_levels.attack),
        talent_skill_level: Some(state.combat.talent_levels.skill),
        talent_burst_level: Some(state.combat.talent_levels.burst),

        crit_type: Some(state.combat.crit_type),
        enemy_level: Some(state.combat.enemy_level),
        enemy_res: Some(EnemyResSave::from_resistance(&state.combat.enemy_res)),
        enemy_def_reduction: Some(state.combat.enemy_def_reduction),
        flat_dmg: Some(state.combat.flat_dmg),
        reaction: Some(state.combat.reaction),

        character_options: Some(save_options(&state.character_options)),
        weapon_options: Some(save_options(&state.weapon_options)),
        artifact_set_options: Some(save_options(state.artifact_set_options())),
    }
}

fn load_artifact(saved: &ArtifactSave, index: usize) -> Artifact {
    let slot = saved
        .slot
        .or_else(|| ArtifactSlot::all().get(index).copied())
        .unwrap_or(ArtifactSlot::Flower);
    let sub_stats = saved
        .sub_stats
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(|sub| {
            let stat = sub.stat.clone().unwrap_or_default();
            let value = sub.value.unwrap_or(0.0);
            match sub.raw_value {
                Some(raw_value) => SubStat { stat, value, raw_value },
                None => SubStat::new(stat, value),
            }
        })
        .collect();

    Artifact {
        slot,
        rarity: saved.rarity.unwrap_or(1),
        level: saved.level.unwrap_or(0),
        main_stat: saved.main_stat.clone().unwrap_or_default(),
        sub_stats,
    }
}

/// Apply saved option values by id, skipping ids that do not resolve
///
/// `apply` sets the value on the option with the given id and reports
/// whether such an option exists.
fn restore_options<F>(saved: Option<&[OptionSave]>, family: &str, mut apply: F)
where
    F: FnMut(&str, &serde_json::Value) -> bool,
{
    for entry in saved.unwrap_or_default() {
        let (Some(id), Some(value)) = (&entry.id, &entry.value) else {
            continue;
        };
        if !apply(id, value) {
            debug!(family, option = %id, "ignoring saved value for unknown option");
        }
    }
}

/// Set a value on the first option with a matching id
fn apply_saved(options: &mut [GameOption], id: &str, value: &serde_json::Value) -> bool {
    match find_option(options, id) {
        Some(option) => {
            option.set_value_json(value);
            true
        }
        None => false,
    }
}

/// Rebuild a full state from a save
pub fn load_save(save: &Save, library: &Library) -> AppState {
    let catalog = &library.catalog;

    let mut character = Character::new(
        save.character_id.clone().unwrap_or_default(),
        save.character_level.unwrap_or(1),
        save.character_has_ascended.unwrap_or(false),
        catalog,
    );
    character.set_constellation(save.character_constellation.unwrap_or(0));

    let mut weapon = Weapon::new(
        save.weapon_id.clone().unwrap_or_default(),
        save.weapon_level.unwrap_or(1),
        save.weapon_has_ascended.unwrap_or(false),
        catalog,
    );
    weapon.set_refinement(save.weapon_refinement.unwrap_or(1));

    let artifacts = match &save.artifacts {
        Some(saved) => saved
            .iter()
            .enumerate()
            .map(|(index, artifact)| load_artifact(artifact, index))
            .collect(),
        None => Artifact::empty_set(),
    };

    let mut state = AppState::new(catalog);
    if let Some(saved) = &save.artifact_sets {
        state.artifact_sets = saved
            .iter()
            .map(|set| {
                ArtifactSet::new(
                    set.artifact_set_id.clone().unwrap_or_default(),
                    set.artifact_set_pieces.unwrap_or(0),
                    library,
                )
            })
            .collect();
    }

    state.combat = CombatInputs {
        enemy_level: save.enemy_level.unwrap_or(1),
        enemy_def_reduction: save.enemy_def_reduction.unwrap_or(0.0),
        enemy_res: save
            .enemy_res
            .as_ref()
            .map(EnemyResSave::to_resistance)
            .unwrap_or_default(),
        crit_type: save.crit_type.unwrap_or_default(),
        flat_dmg: save.flat_dmg.unwrap_or(0.0),
        reaction: save.reaction.unwrap_or_default(),
        talent_levels: TalentLevels::new(
            save.talent_attack_level.unwrap_or(1),
            save.talent_skill_level.unwrap_or(1),
            save.talent_burst_level.unwrap_or(1),
        ),
    };

    state.character_options = character.options();
    state.weapon_options = weapon.options();
    state.character = character;
    state.weapon = weapon;
    state.artifacts = artifacts;

    restore_options(save.character_options.as_deref(), "character", |id, value| {
        apply_saved(&mut state.character_options, id, value)
    });
    restore_options(save.weapon_options.as_deref(), "weapon", |id, value| {
        apply_saved(&mut state.weapon_options, id, value)
    });
    restore_options(save.artifact_set_options.as_deref(), "artifact set", |id, value| {
        state
            .artifact_sets
            .iter_mut()
            .any(|set| apply_saved(set.options_mut(), id, value))
    });

    state
}

/// Labelled saves, keyed by label
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SaveBook {
    saves: BTreeMap<String, Save>,
}

impl SaveBook {
    pub fn new() -> Self {
        SaveBook::default()
    }

    /// Store a save under its label, replacing any save with that label
    pub fn add(&mut self, save: Save) {
        self.saves.insert(save.label.clone(), save);
    }

    pub fn get(&self, label: &str) -> Option<&Save> {
        self.saves.get(label)
    }

    pub fn delete(&mut self, label: &str) -> Option<Save> {
        self.saves.remove(label)
    }

    /// Labels in sorted order
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.saves.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.saves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.saves.is_empty()
    }

    pub fn to_json(&self) -> Result<String, SaveError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<SaveBook, SaveError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn library() -> Library {
        Library::bundled().unwrap()
    }

    #[test]
    fn test_empty_save_loads_defaults() {
        let library = library();
        let state = load_save(&Save::default(), &library);
        assert_eq!(state.character.id(), "");
        assert_eq!(state.character.level(), 1);
        assert!(!state.character.ascended());
        assert_eq!(state.weapon.refinement(), 1);
        assert_eq!(state.combat.enemy_level, 1);
        assert_eq!(state.combat.crit_type, CritType::None);
        assert_eq!(state.combat.reaction, Reaction::None);
        assert_eq!(state.combat.talent_levels, TalentLevels::default());
        assert_eq!(state.artifacts.len(), 5);
        assert_eq!(state.artifact_sets.len(), 3);
        assert!(state.artifact_sets.iter().all(|set| set.id().is_empty()));
    }

    #[test]
    fn test_camel_case_fields() {
        let save = Save::from_json(
            r#"{"label":"x","characterId":"hutao","characterLevel":80,"weaponRefinement":3,
                "artifacts":[{"type":"goblet","mainStat":"pyroDmgBonus","subStats":[{"stat":"critRate","value":3.9}]}],
                "enemyRes":{"pyro":0.5}}"#,
        )
        .unwrap();
        let state = load_save(&save, &library());
        assert_eq!(state.character.id(), "hutao");
        assert_eq!(state.character.level(), 80);
        assert_eq!(state.weapon.refinement(), 3);
        assert_eq!(state.artifacts.len(), 1);
        assert_eq!(state.artifacts[0].slot, ArtifactSlot::Goblet);
        assert!((state.artifacts[0].sub_stats[0].raw_value - 0.039).abs() < 1e-9);
        assert!((state.combat.enemy_res.get(Element::Pyro) - 0.5).abs() < 1e-9);
        assert!((state.combat.enemy_res.get(Element::Hydro) - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_missing_slot_uses_position() {
        let save = Save {
            artifacts: Some(vec![ArtifactSave::default(), ArtifactSave::default()]),
            ..Save::default()
        };
        let state = load_save(&save, &library());
        assert_eq!(state.artifacts[1].slot, ArtifactSlot::Plume);
        assert_eq!(state.artifacts[1].rarity, 1);
    }

    #[test]
    fn test_unknown_options_ignored() {
        let save = Save {
            character_id: Some("hutao".to_string()),
            character_options: Some(vec![
                OptionSave {
                    id: Some("noSuchOption".to_string()),
                    value: Some(serde_json::json!(true)),
                },
                OptionSave {
                    id: Some("paramitaPapilioState".to_string()),
                    value: Some(serde_json::json!(true)),
                },
            ]),
            ..Save::default()
        };
        let state = load_save(&save, &library());
        let option = state
            .character_options
            .iter()
            .find(|o| o.id() == "paramitaPapilioState")
            .unwrap();
        assert!(option.value().as_bool());
        assert_eq!(state.character_options.len(), 2);
    }

    #[test]
    fn test_save_book() {
        let mut book = SaveBook::new();
        book.add(Save {
            label: "b".to_string(),
            ..Save::default()
        });
        book.add(Save {
            label: "a".to_string(),
            enemy_level: Some(90),
            ..Save::default()
        });
        assert_eq!(book.labels().collect::<Vec<_>>(), vec!["a", "b"]);

        let json = book.to_json().unwrap();
        let restored = SaveBook::from_json(&json).unwrap();
        assert_eq!(restored, book);
        assert_eq!(restored.get("a").and_then(|s| s.enemy_level), Some(90));

        let mut restored = restored;
        assert!(restored.delete("a").is_some());
        assert!(restored.get("a").is_none());
        assert_eq!(restored.len(), 1);
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(matches!(Save::from_json("{not json"), Err(SaveError::Json(_))));
    }
}
