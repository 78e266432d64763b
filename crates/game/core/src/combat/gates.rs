//! The four strict-inequality gates.

/// The attack executes only if the roll strictly beats its complexity.
pub fn executes(roll: f32, complexity: f32) -> bool {
    roll > complexity
}

/// Hit iff the roll is strictly under the hit chance, or a sure strike.
pub fn lands_hit(roll: f32, hit_chance: f32, sure_strike: bool) -> bool {
    sure_strike || roll < hit_chance
}

/// Not blocked iff the roll strictly beats the block chance, or a sure strike.
pub fn evades_block(roll: f32, block_chance: f32, sure_strike: bool) -> bool {
    sure_strike || roll > block_chance
}

pub fn triggers_special(roll: f32, special_chance: f32) -> bool {
    roll < special_chance
}
