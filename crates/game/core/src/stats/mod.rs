//! Stat system: clamp ranges, bonus ledgers and bonus derivation.
//!
//! ```text
//! [ Balances + Physical offsets ]
//!      ↓ derive_bonuses (pure, once at creation)
//! [ Permanent Bonuses ]  +  [ Temporary Bonuses ] (conditions only)
//!      ↓ combat::EffectiveAttack (clamped per field)
//! ```
//!
//! ## Principles
//!
//! 1. **Write-once**: permanent bonuses are fixed at fighter creation
//! 2. **Reversible**: temporary bonuses are integer ledgers so every condition
//!    delta can be undone exactly
//! 3. **Deterministic**: derivation is pure, no I/O or randomness

pub mod bonuses;
pub mod bounds;
pub mod derive;

pub use bonuses::{Bonuses, TempBonuses};
pub use bounds::{Range, clamp, normalize};
pub use derive::{
    BalanceInfluence, BalanceWeights, Balances, BonusFormula, DerivationWeights,
    PhysicalInfluence, PhysicalOffsets, apply_influence, derive_bonuses,
};
