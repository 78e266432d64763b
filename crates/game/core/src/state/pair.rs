//! The two corners of a match and per-corner storage.

use core::ops::{Index, IndexMut};

/// Which side of the match a fighter stands on.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, strum::Display, strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum Corner {
    A,
    B,
}

impl Corner {
    pub const fn other(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }

    /// Attacking corner on `turn`: odd turns belong to A, even turns to B.
    pub const fn for_turn(turn: u32) -> Self {
        if turn % 2 == 1 { Self::A } else { Self::B }
    }
}

/// One value per corner.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pair<T> {
    pub a: T,
    pub b: T,
}

impl<T> Pair<T> {
    pub fn new(a: T, b: T) -> Self {
        Self { a, b }
    }

    /// Mutable access to `first` and the opposite corner at the same time.
    pub fn split_mut(&mut self, first: Corner) -> (&mut T, &mut T) {
        match first {
            Corner::A => (&mut self.a, &mut self.b),
            Corner::B => (&mut self.b, &mut self.a),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Corner, &T)> {
        [(Corner::A, &self.a), (Corner::B, &self.b)].into_iter()
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Pair<U> {
        Pair {
            a: f(self.a),
            b: f(self.b),
        }
    }
}

impl<T> Index<Corner> for Pair<T> {
    type Output = T;

    fn index(&self, corner: Corner) -> &Self::Output {
        match corner {
            Corner::A => &self.a,
            Corner::B => &self.b,
        }
    }
}

impl<T> IndexMut<Corner> for Pair<T> {
    fn index_mut(&mut self, corner: Corner) -> &mut Self::Output {
        match corner {
            Corner::A => &mut self.a,
            Corner::B => &mut self.b,
        }
    }
}
