//! Attack resolution.
//!
//! One attack runs through four probabilistic gates, each against its own
//! draw from a uniform `[0, 100)` source:
//!
//! ```text
//! complexity  r1 >  complexity   else the attack fails to execute
//! hit         r2 <  hit chance   or sure strike
//! block       r3 >  block chance or sure strike   (not blocked)
//! special     r4 <  special      inflicts the type's condition
//! ```
//!
//! All four draws are taken on every call, in that order, so a match always
//! consumes exactly four draws per attack and scripted sources line up.
//!
//! - `effective`: base attack combined with fighter bonuses, clamped per field
//! - `gates`: the strict-inequality checks
//! - `result`: [`Outcome`] and the [`resolve_attack`] entry point

pub mod effective;
pub mod gates;
pub mod result;

pub use effective::EffectiveAttack;
pub use gates::{evades_block, executes, lands_hit, triggers_special};
pub use result::{Outcome, resolve_attack};
