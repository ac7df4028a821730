//! StatType - The closed set of stat names

use crate::types::{AttackCategory, Element};
use serde::{Deserialize, Serialize};

/// Every stat a contribution can target
///
/// Percent-type stats hold fractions (0.5 = +50%). HP, ATK and DEF are split
/// into base, flat and percent parts that are only combined by
/// [`StatValue`](super::StatValue).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StatType {
    // === HP ===
    BaseHp,
    FlatHp,
    HpPercent,
    // === ATK ===
    BaseAtk,
    FlatAtk,
    AtkPercent,
    // === DEF ===
    BaseDef,
    FlatDef,
    DefPercent,

    // === Scalars ===
    ElementalMastery,
    CritRate,
    CritDmg,
    EnergyRecharge,
    HealingBonus,
    IncomingHealingBonus,
    ShieldStrength,

    // === Elemental damage bonus ===
    PhysicalDmgBonus,
    PyroDmgBonus,
    HydroDmgBonus,
    ElectroDmgBonus,
    CryoDmgBonus,
    AnemoDmgBonus,
    GeoDmgBonus,
    DendroDmgBonus,
    AllDmgBonus,

    // === Category damage bonus ===
    NormalAttackDmgBonus,
    ChargedAttackDmgBonus,
    PlungeAttackDmgBonus,
    SkillDmgBonus,
    BurstDmgBonus,

    // === Conditional ===
    ChargedCritRate,
    AmplifyingBonus,
}

impl StatType {
    /// Get all stat types
    pub fn all() -> &'static [StatType] {
        use StatType::*;
        &[
            BaseHp,
            FlatHp,
            HpPercent,
            BaseAtk,
            FlatAtk,
            AtkPercent,
            BaseDef,
            FlatDef,
            DefPercent,
            ElementalMastery,
            CritRate,
            CritDmg,
            EnergyRecharge,
            HealingBonus,
            IncomingHealingBonus,
            ShieldStrength,
            PhysicalDmgBonus,
            PyroDmgBonus,
            HydroDmgBonus,
            ElectroDmgBonus,
            CryoDmgBonus,
            AnemoDmgBonus,
            GeoDmgBonus,
            DendroDmgBonus,
            AllDmgBonus,
            NormalAttackDmgBonus,
            ChargedAttackDmgBonus,
            PlungeAttackDmgBonus,
            SkillDmgBonus,
            BurstDmgBonus,
            ChargedCritRate,
            AmplifyingBonus,
        ]
    }

    /// Stable string id used in data tables and saves
    pub fn id(self) -> &'static str {
        use StatType::*;
        match self {
            BaseHp => "baseHp",
            FlatHp => "flatHp",
            HpPercent => "hpPercent",
            BaseAtk => "baseAtk",
            FlatAtk => "flatAtk",
            AtkPercent => "atkPercent",
            BaseDef => "baseDef",
            FlatDef => "flatDef",
            DefPercent => "defPercent",
            ElementalMastery => "elementalMastery",
            CritRate => "critRate",
            CritDmg => "critDmg",
            EnergyRecharge => "energyRecharge",
            HealingBonus => "healingBonus",
            IncomingHealingBonus => "incomingHealingBonus",
            ShieldStrength => "shieldStrength",
            PhysicalDmgBonus => "physicalDmgBonus",
            PyroDmgBonus => "pyroDmgBonus",
            HydroDmgBonus => "hydroDmgBonus",
            ElectroDmgBonus => "electroDmgBonus",
            CryoDmgBonus => "cryoDmgBonus",
            AnemoDmgBonus => "anemoDmgBonus",
            GeoDmgBonus => "geoDmgBonus",
            DendroDmgBonus => "dendroDmgBonus",
            AllDmgBonus => "allDmgBonus",
            NormalAttackDmgBonus => "normalAttackDmgBonus",
            ChargedAttackDmgBonus => "chargedAttackDmgBonus",
            PlungeAttackDmgBonus => "plungeAttackDmgBonus",
            SkillDmgBonus => "skillDmgBonus",
            BurstDmgBonus => "burstDmgBonus",
            ChargedCritRate => "chargedCritRate",
            AmplifyingBonus => "amplifyingBonus",
        }
    }

    /// Look up a stat by its string id
    pub fn from_id(id: &str) -> Option<StatType> {
        StatType::all().iter().copied().find(|stat| stat.id() == id)
    }

    /// Whether the stat is stored as a fraction rather than a raw amount
    pub fn is_percent(self) -> bool {
        !matches!(
            self,
            StatType::BaseHp
                | StatType::FlatHp
                | StatType::BaseAtk
                | StatType::FlatAtk
                | StatType::BaseDef
                | StatType::FlatDef
                | StatType::ElementalMastery
        )
    }

    /// Damage bonus stat for an element
    pub fn damage_bonus(element: Element) -> StatType {
        match element {
            Element::Physical => StatType::PhysicalDmgBonus,
            Element::Pyro => StatType::PyroDmgBonus,
            Element::Hydro => StatType::HydroDmgBonus,
            Element::Electro => StatType::ElectroDmgBonus,
            Element::Cryo => StatType::CryoDmgBonus,
            Element::Anemo => StatType::AnemoDmgBonus,
            Element::Geo => StatType::GeoDmgBonus,
            Element::Dendro => StatType::DendroDmgBonus,
        }
    }

    /// Damage bonus stat for an attack category
    pub fn category_bonus(category: AttackCategory) -> StatType {
        match category {
            AttackCategory::Normal => StatType::NormalAttackDmgBonus,
            AttackCategory::Charged => StatType::ChargedAttackDmgBonus,
            AttackCategory::Plunge => StatType::PlungeAttackDmgBonus,
            AttackCategory::Skill => StatType::SkillDmgBonus,
            AttackCategory::Burst => StatType::BurstDmgBonus,
        }
    }
}

impl std::fmt::Display for StatType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}
