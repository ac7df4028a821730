//! Talents - Formula registry and evaluation

use crate::damage::DamageValue;
use crate::modifier::DamageModifier;
use crate::stat_block::StatBlock;
use crate::types::TalentCategory;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// Output of a talent formula
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TalentValue {
    Number(f64),
    Damage(DamageValue),
    /// Multi-hit attacks, one entry per hit
    List(Vec<TalentValue>),
}

/// Read-only inputs of a talent formula
#[derive(Debug, Clone, Copy)]
pub struct TalentInput<'a> {
    pub stats: &'a StatBlock,
    pub modifier: &'a DamageModifier,
}

/// Pure function producing one talent value
pub type TalentFormula = Arc<dyn Fn(&TalentInput<'_>) -> TalentValue + Send + Sync>;

/// Talent formulas of a character grouped by category
///
/// Categories and formulas keep declaration order.
#[derive(Clone, Default)]
pub struct Talents {
    categories: Vec<(TalentCategory, Vec<(String, TalentFormula)>)>,
}

impl Talents {
    pub fn new() -> Self {
        Talents::default()
    }

    /// Add a formula, creating its category on first use
    pub fn with<F>(mut self, category: TalentCategory, id: impl Into<String>, formula: F) -> Self
    where
        F: Fn(&TalentInput<'_>) -> TalentValue + Send + Sync + 'static,
    {
        let formula: TalentFormula = Arc::new(formula);
        match self.categories.iter_mut().find(|(c, _)| *c == category) {
            Some((_, formulas)) => formulas.push((id.into(), formula)),
            None => self.categories.push((category, vec![(id.into(), formula)])),
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Categories with their formulas, in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (TalentCategory, &[(String, TalentFormula)])> + '_ {
        self.categories
            .iter()
            .map(|(category, formulas)| (*category, formulas.as_slice()))
    }
}

impl fmt::Debug for Talents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_map();
        for (category, formulas) in &self.categories {
            let ids: Vec<&str> = formulas.iter().map(|(id, _)| id.as_str()).collect();
            list.entry(category, &ids);
        }
        list.finish()
    }
}

/// Evaluated talent values grouped by category
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TalentValueSet {
    categories: Vec<(TalentCategory, Vec<(String, TalentValue)>)>,
}

impl TalentValueSet {
    /// Value of one formula
    pub fn get(&self, category: TalentCategory, id: &str) -> Option<&TalentValue> {
        self.category(category)?
            .iter()
            .find(|(name, _)| name == id)
            .map(|(_, value)| value)
    }

    /// Every value in a category, in declaration order
    pub fn category(&self, category: TalentCategory) -> Option<&[(String, TalentValue)]> {
        self.categories
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, values)| values.as_slice())
    }

    /// Categories in declaration order
    pub fn categories(&self) -> impl Iterator<Item = TalentCategory> + '_ {
        self.categories.iter().map(|(category, _)| *category)
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// Evaluate every formula against the finalized stats and modifier
pub fn evaluate_talents(talents: &Talents, stats: &StatBlock, modifier: &DamageModifier) -> TalentValueSet {
    let input = TalentInput { stats, modifier };
    let categories = talents
        .iter()
        .map(|(category, formulas)| {
            let values = formulas
                .iter()
                .map(|(id, formula)| (id.clone(), formula(&input)))
                .collect();
            (category, values)
        })
        .collect();
    TalentValueSet { categories }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stat_block::StatType;

    fn sample() -> Talents {
        Talents::new()
            .with(TalentCategory::Skill, "skillHit", |input| {
                TalentValue::Number(input.stats.total_atk() * 2.0)
            })
            .with(TalentCategory::Attack, "normal1", |input| {
                TalentValue::Number(input.modifier.talent_levels.attack as f64)
            })
            .with(TalentCategory::Skill, "skillLevel", |input| {
                TalentValue::Number(input.modifier.talent_levels.skill as f64)
            })
    }

    #[test]
    fn test_declaration_order_kept() {
        let values = evaluate_talents(&sample(), &StatBlock::new(), &DamageModifier::default());
        let categories: Vec<TalentCategory> = values.categories().collect();
        assert_eq!(categories, vec![TalentCategory::Skill, TalentCategory::Attack]);

        let skill: Vec<&str> = values
            .category(TalentCategory::Skill)
            .unwrap()
            .iter()
            .map(|(id, _)| id.as_str())
            .collect();
        assert_eq!(skill, vec!["skillHit", "skillLevel"]);
    }

    #[test]
    fn test_formulas_read_inputs() {
        let stats = StatBlock::new().with(StatType::BaseAtk, 50.0);
        let values = evaluate_talents(&sample(), &stats, &DamageModifier::default());
        assert_eq!(values.get(TalentCategory::Skill, "skillHit"), Some(&TalentValue::Number(100.0)));
        assert_eq!(values.get(TalentCategory::Attack, "normal1"), Some(&TalentValue::Number(1.0)));
        assert!(values.get(TalentCategory::Burst, "anything").is_none());
    }

    #[test]
    fn test_empty_talents() {
        let values = evaluate_talents(&Talents::new(), &StatBlock::new(), &DamageModifier::default());
        assert!(values.is_empty());
    }

    #[test]
    fn test_evaluation_is_pure() {
        let stats = StatBlock::new().with(StatType::BaseAtk, 50.0);
        let modifier = DamageModifier::default();
        let first = evaluate_talents(&sample(), &stats, &modifier);
        let second = evaluate_talents(&sample(), &stats, &modifier);
        assert_eq!(first, second);
        assert_eq!(stats, StatBlock::new().with(StatType::BaseAtk, 50.0));
    }
}
