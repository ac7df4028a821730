//! Core types shared across the calculator

use serde::{Deserialize, Serialize};

/// Damage element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Element {
    Physical,
    Pyro,
    Hydro,
    Electro,
    Cryo,
    Anemo,
    Geo,
    Dendro,
}

impl Element {
    /// Get all elements
    pub fn all() -> &'static [Element] {
        &[
            Element::Physical,
            Element::Pyro,
            Element::Hydro,
            Element::Electro,
            Element::Cryo,
            Element::Anemo,
            Element::Geo,
            Element::Dendro,
        ]
    }
}

/// What kind of hit a talent produces, used to pick category damage bonuses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttackCategory {
    Normal,
    Charged,
    Plunge,
    Skill,
    Burst,
}

impl AttackCategory {
    /// Whether the hit belongs to the basic attack string and can be infused
    pub fn is_infusable(self) -> bool {
        matches!(
            self,
            AttackCategory::Normal | AttackCategory::Charged | AttackCategory::Plunge
        )
    }
}

/// Talent grouping used for talent levels and evaluated talent output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TalentCategory {
    Attack,
    Skill,
    Burst,
}

/// How crits are reported in damage output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CritType {
    /// Report the crit-rate weighted average
    #[default]
    None,
    /// Every hit crits
    Crit,
    /// No hit crits
    NonCrit,
}

/// Elemental reaction applied to talent hits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reaction {
    #[default]
    None,
    Vaporize,
    Melt,
}

/// Application tier of a mixin
///
/// Normal mixins are applied first, in collection order. Last mixins run
/// afterwards and observe the fully summed Normal result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    #[default]
    Normal,
    Last,
}

/// Talent levels of the active character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TalentLevels {
    pub attack: u32,
    pub skill: u32,
    pub burst: u32,
}

impl Default for TalentLevels {
    fn default() -> Self {
        TalentLevels {
            attack: 1,
            skill: 1,
            burst: 1,
        }
    }
}

impl TalentLevels {
    pub fn new(attack: u32, skill: u32, burst: u32) -> Self {
        TalentLevels { attack, skill, burst }
    }

    /// Level of the given talent category
    pub fn get(&self, category: TalentCategory) -> u32 {
        match category {
            TalentCategory::Attack => self.attack,
            TalentCategory::Skill => self.skill,
            TalentCategory::Burst => self.burst,
        }
    }
}

/// Artifact equipment slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactSlot {
    Flower,
    Plume,
    Sands,
    Goblet,
    Circlet,
}

impl ArtifactSlot {
    /// Get all artifact slots in display order
    pub fn all() -> &'static [ArtifactSlot] {
        &[
            ArtifactSlot::Flower,
            ArtifactSlot::Plume,
            ArtifactSlot::Sands,
            ArtifactSlot::Goblet,
            ArtifactSlot::Circlet,
        ]
    }
}
