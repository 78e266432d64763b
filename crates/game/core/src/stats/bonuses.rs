//! Bonus ledgers carried by every fighter.

/// Permanent bonuses derived once at fighter creation.
///
/// Values are percentage points added to an attack's base numbers, except
/// `damage` which scales base damage by `1 + damage / 100`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bonuses {
    pub damage: f32,
    pub complexity: f32,
    pub hit_chance: f32,
    pub block_chance: f32,
    pub special_chance: f32,
}

impl Bonuses {
    pub const ZERO: Self = Self {
        damage: 0.0,
        complexity: 0.0,
        hit_chance: 0.0,
        block_chance: 0.0,
        special_chance: 0.0,
    };
}

/// Temporary bonuses mutated only by status conditions.
///
/// Condition deltas are integers, so applying and removing a condition is
/// exactly reversible regardless of how many other conditions are active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TempBonuses {
    pub damage: i32,
    pub complexity: i32,
    pub hit_chance: i32,
    pub block_chance: i32,
    pub special_chance: i32,
}

impl TempBonuses {
    pub const ZERO: Self = Self {
        damage: 0,
        complexity: 0,
        hit_chance: 0,
        block_chance: 0,
        special_chance: 0,
    };

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}
