//! Attack definitions and the catalog they are looked up from.
mod catalog;

pub use catalog::{AttackCatalog, CatalogError, StaticCatalog};

use crate::conditions::Condition;

/// Category of an attack. Determines which condition its special inflicts.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum AttackType {
    Punch,
    Slap,
    Kick,
    #[strum(to_string = "Knee Strike", serialize = "KneeStrike")]
    KneeStrike,
    #[strum(to_string = "Elbow Strike", serialize = "ElbowStrike")]
    ElbowStrike,
    Throw,
    Lock,
    Choke,
    #[strum(to_string = "Vital Strike", serialize = "VitalStrike")]
    VitalStrike,
    Custom,
}

impl AttackType {
    /// Condition inflicted on the defender when the special gate passes.
    pub const fn special(self) -> Option<Condition> {
        match self {
            Self::Punch => Some(Condition::Bruised),
            Self::Slap => Some(Condition::Insulted),
            Self::Kick => Some(Condition::CriticalHit),
            Self::KneeStrike => Some(Condition::Bleeding),
            Self::ElbowStrike => Some(Condition::Bleeding),
            Self::Throw => Some(Condition::Prone),
            Self::Lock => Some(Condition::Bruised),
            Self::Choke => Some(Condition::Disoriented),
            Self::VitalStrike => Some(Condition::Paralysed),
            Self::Custom => None,
        }
    }
}

/// A named move. Immutable once defined and shared as `Arc<Attack>`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attack {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(alias = "type"))]
    pub kind: AttackType,
    pub damage: i32,
    pub complexity: i32,
    pub hit_chance: i32,
    pub block_chance: i32,
    pub special_chance: i32,
}

impl Attack {
    pub fn new(
        name: impl Into<String>,
        kind: AttackType,
        damage: i32,
        complexity: i32,
        hit_chance: i32,
        block_chance: i32,
        special_chance: i32,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            damage,
            complexity,
            hit_chance,
            block_chance,
            special_chance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn only_custom_has_no_special() {
        for kind in AttackType::iter() {
            assert_eq!(kind.special().is_none(), kind == AttackType::Custom, "{kind}");
        }
        assert_eq!(AttackType::Throw.special(), Some(Condition::Prone));
        assert_eq!(AttackType::Choke.special(), Some(Condition::Disoriented));
    }

    #[test]
    fn type_names_round_trip_through_strings() {
        use std::str::FromStr;

        assert_eq!(AttackType::KneeStrike.to_string(), "Knee Strike");
        assert_eq!(AttackType::from_str("kneestrike"), Ok(AttackType::KneeStrike));
        assert_eq!(AttackType::from_str("Knee Strike"), Ok(AttackType::KneeStrike));
        assert_eq!(AttackType::from_str("punch"), Ok(AttackType::Punch));
    }
}
