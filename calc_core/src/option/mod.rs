//! GameOption - User-configurable state that can produce mixins
//!
//! Character, weapon and artifact set options share one type and differ only
//! in their [`OptionOwner`] tag. Whether an option touches stats or the damage
//! modifier is declared by registering the matching transform; the engine
//! never inspects what a transform does.

use crate::mixin::{ModifierMixin, StatMixin};
use crate::modifier::DamageModifier;
use crate::stat_block::StatBlock;
use crate::types::{Priority, TalentLevels};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

type OnStats = dyn Fn(StatBlock, &OptionValue, &TalentLevels) -> StatBlock + Send + Sync;
type OnModifier = dyn Fn(DamageModifier, &OptionValue, &StatBlock) -> DamageModifier + Send + Sync;

/// Value type an option accepts
#[derive(Debug, Clone, PartialEq)]
pub enum OptionKind {
    Boolean,
    /// Inclusive integer range
    Integer { min: i64, max: i64 },
    Number,
    /// One of a fixed list of choices
    Choice(Vec<String>),
}

/// Current value of an option
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Boolean(bool),
    Integer(i64),
    Number(f64),
    Choice(String),
}

impl OptionValue {
    /// Boolean value, false for any other variant
    pub fn as_bool(&self) -> bool {
        matches!(self, OptionValue::Boolean(true))
    }

    /// Integer value, zero for non-numeric variants
    pub fn as_i64(&self) -> i64 {
        match self {
            OptionValue::Integer(n) => *n,
            OptionValue::Number(n) => *n as i64,
            _ => 0,
        }
    }

    /// Numeric value, zero for non-numeric variants
    pub fn as_f64(&self) -> f64 {
        match self {
            OptionValue::Integer(n) => *n as f64,
            OptionValue::Number(n) => *n,
            _ => 0.0,
        }
    }

    /// Selected choice, if this is a choice value
    pub fn as_choice(&self) -> Option<&str> {
        match self {
            OptionValue::Choice(choice) => Some(choice),
            _ => None,
        }
    }
}

/// Which entity owns an option
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionOwner {
    Character,
    Weapon,
    /// Owned by an artifact set, active from `threshold` pieces
    ArtifactSet { set_id: String, threshold: u32 },
}

/// A configurable toggle or value
#[derive(Clone)]
pub struct GameOption {
    id: String,
    owner: OptionOwner,
    kind: OptionKind,
    value: OptionValue,
    priority: Priority,
    on_stats: Option<Arc<OnStats>>,
    on_modifier: Option<Arc<OnModifier>>,
}

impl GameOption {
    /// Create an option with no transforms
    pub fn new(id: impl Into<String>, owner: OptionOwner, kind: OptionKind, initial: OptionValue) -> Self {
        GameOption {
            id: id.into(),
            owner,
            kind,
            value: initial,
            priority: Priority::Normal,
            on_stats: None,
            on_modifier: None,
        }
    }

    pub fn boolean(id: impl Into<String>, owner: OptionOwner, initial: bool) -> Self {
        GameOption::new(id, owner, OptionKind::Boolean, OptionValue::Boolean(initial))
    }

    pub fn integer(id: impl Into<String>, owner: OptionOwner, min: i64, max: i64, initial: i64) -> Self {
        GameOption::new(
            id,
            owner,
            OptionKind::Integer { min, max },
            OptionValue::Integer(initial.clamp(min, max)),
        )
    }

    pub fn choice(id: impl Into<String>, owner: OptionOwner, choices: &[&str], initial: &str) -> Self {
        GameOption::new(
            id,
            owner,
            OptionKind::Choice(choices.iter().map(|c| c.to_string()).collect()),
            OptionValue::Choice(initial.to_string()),
        )
    }

    /// Register the stat transform, making the option stat-applicable
    pub fn on_stats<F>(mut self, transform: F) -> Self
    where
        F: Fn(StatBlock, &OptionValue, &TalentLevels) -> StatBlock + Send + Sync + 'static,
    {
        self.on_stats = Some(Arc::new(transform));
        self
    }

    /// Register the modifier transform, making the option modifier-applicable
    pub fn on_modifier<F>(mut self, transform: F) -> Self
    where
        F: Fn(DamageModifier, &OptionValue, &StatBlock) -> DamageModifier + Send + Sync + 'static,
    {
        self.on_modifier = Some(Arc::new(transform));
        self
    }

    /// Tier used by every mixin this option produces
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn owner(&self) -> &OptionOwner {
        &self.owner
    }

    pub fn kind(&self) -> &OptionKind {
        &self.kind
    }

    pub fn value(&self) -> &OptionValue {
        &self.value
    }

    /// Piece count an artifact set option needs, zero for other owners
    pub fn threshold(&self) -> u32 {
        match &self.owner {
            OptionOwner::ArtifactSet { threshold, .. } => *threshold,
            _ => 0,
        }
    }

    pub fn is_stats_applicable(&self) -> bool {
        self.on_stats.is_some()
    }

    pub fn is_modifier_applicable(&self) -> bool {
        self.on_modifier.is_some()
    }

    /// Set the value if it fits the option kind
    ///
    /// Integers are clamped into range. Returns false, leaving the value
    /// untouched, when the value does not fit.
    pub fn set_value(&mut self, value: OptionValue) -> bool {
        let accepted = match (&self.kind, value) {
            (OptionKind::Boolean, OptionValue::Boolean(b)) => Some(OptionValue::Boolean(b)),
            (OptionKind::Integer { min, max }, OptionValue::Integer(n)) => {
                Some(OptionValue::Integer(n.clamp(*min, *max)))
            }
            (OptionKind::Number, OptionValue::Number(n)) => Some(OptionValue::Number(n)),
            (OptionKind::Number, OptionValue::Integer(n)) => Some(OptionValue::Number(n as f64)),
            (OptionKind::Choice(choices), OptionValue::Choice(choice)) if choices.contains(&choice) => {
                Some(OptionValue::Choice(choice))
            }
            _ => None,
        };

        match accepted {
            Some(value) => {
                self.value = value;
                true
            }
            None => {
                debug!(option = %self.id, "ignoring value that does not fit option kind");
                false
            }
        }
    }

    /// Set the value from raw JSON, as stored in saves
    pub fn set_value_json(&mut self, value: &serde_json::Value) -> bool {
        match serde_json::from_value::<OptionValue>(value.clone()) {
            Ok(value) => self.set_value(value),
            Err(_) => false,
        }
    }

    /// Stat mixin capturing the current value, if stat-applicable
    pub fn stat_mixin(&self) -> Option<StatMixin> {
        let transform = self.on_stats.clone()?;
        let value = self.value.clone();
        Some(
            StatMixin::new(self.id.clone(), move |stats, talents| transform(stats, &value, talents))
                .with_priority(self.priority),
        )
    }

    /// Modifier mixin capturing the current value, if modifier-applicable
    pub fn modifier_mixin(&self) -> Option<ModifierMixin> {
        let transform = self.on_modifier.clone()?;
        let value = self.value.clone();
        Some(
            ModifierMixin::new(self.id.clone(), move |modifier, stats| transform(modifier, &value, stats))
                .with_priority(self.priority),
        )
    }
}

impl fmt::Debug for GameOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameOption")
            .field("id", &self.id)
            .field("owner", &self.owner)
            .field("kind", &self.kind)
            .field("value", &self.value)
            .field("priority", &self.priority)
            .field("stats", &self.is_stats_applicable())
            .field("modifier", &self.is_modifier_applicable())
            .finish()
    }
}

/// Find an option by id
pub fn find_option<'a>(options: &'a mut [GameOption], id: &str) -> Option<&'a mut GameOption> {
    options.iter_mut().find(|option| option.id() == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stat_block::StatType;
    use crate::types::Element;

    fn crit_toggle() -> GameOption {
        GameOption::boolean("critToggle", OptionOwner::Character, false).on_stats(|mut stats, value, _| {
            if value.as_bool() {
                stats.add(StatType::CritRate, 0.2);
            }
            stats
        })
    }

    #[test]
    fn test_capabilities() {
        let option = crit_toggle();
        assert!(option.is_stats_applicable());
        assert!(!option.is_modifier_applicable());
        assert!(option.modifier_mixin().is_none());

        let plain = GameOption::boolean("plain", OptionOwner::Weapon, true);
        assert!(!plain.is_stats_applicable());
        assert!(plain.stat_mixin().is_none());
    }

    #[test]
    fn test_mixin_captures_value_at_creation() {
        let mut option = crit_toggle();
        let before = option.stat_mixin().unwrap();
        option.set_value(OptionValue::Boolean(true));
        let after = option.stat_mixin().unwrap();

        let talents = TalentLevels::default();
        assert!(before.apply(StatBlock::new(), &talents).get(StatType::CritRate).abs() < 1e-9);
        assert!((after.apply(StatBlock::new(), &talents).get(StatType::CritRate) - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_set_value_checks_kind() {
        let mut option = GameOption::integer("stacks", OptionOwner::Character, 0, 3, 0);
        assert!(!option.set_value(OptionValue::Boolean(true)));
        assert_eq!(option.value(), &OptionValue::Integer(0));

        assert!(option.set_value(OptionValue::Integer(7)));
        assert_eq!(option.value(), &OptionValue::Integer(3));
    }

    #[test]
    fn test_choice_must_be_listed() {
        let mut option = GameOption::choice("element", OptionOwner::Weapon, &["pyro", "hydro"], "pyro");
        assert!(!option.set_value(OptionValue::Choice("geo".to_string())));
        assert!(option.set_value(OptionValue::Choice("hydro".to_string())));
        assert_eq!(option.value().as_choice(), Some("hydro"));
    }

    #[test]
    fn test_set_value_json() {
        let mut option = GameOption::boolean("flag", OptionOwner::Character, false);
        assert!(option.set_value_json(&serde_json::json!(true)));
        assert!(option.value().as_bool());
        assert!(!option.set_value_json(&serde_json::json!({"nested": 1})));
    }

    #[test]
    fn test_modifier_mixin_priority() {
        let option = GameOption::boolean("infuse", OptionOwner::Character, true)
            .on_modifier(|mut modifier, value, _| {
                if value.as_bool() {
                    modifier.infusion = Some(Element::Hydro);
                }
                modifier
            })
            .with_priority(Priority::Last);
        let mixin = option.modifier_mixin().unwrap();
        assert_eq!(crate::mixin::Prioritized::priority(&mixin), Priority::Last);
        let modifier = mixin.apply(DamageModifier::default(), &StatBlock::new());
        assert_eq!(modifier.infusion, Some(Element::Hydro));
    }

    #[test]
    fn test_threshold() {
        let option = GameOption::boolean(
            "fourPiece",
            OptionOwner::ArtifactSet { set_id: "x".to_string(), threshold: 4 },
            false,
        );
        assert_eq!(option.threshold(), 4);
        assert_eq!(crit_toggle().threshold(), 0);
    }
}
