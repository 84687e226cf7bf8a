//! Sexagenary cycle (六十甲子): the 60 valid stem-branch pairings.
//!
//! Position `i` pairs stem `i mod 10` with branch `i mod 12`. Since 10 and 12
//! share the factor 2, only pairs of equal parity occur, which halves the
//! 120 naive combinations to 60. The inverse is the CRT solution
//! `i = (6·stem − 5·branch) mod 60`.

use std::fmt::{Display, Formatter};

use crate::error::BaziError;
use crate::ganzhi::{Branch, Stem};

/// Length of the cycle.
pub const CYCLE_LEN: u8 = 60;

/// One stem-branch pair. Only the 60 reachable pairings can be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pillar {
    stem: Stem,
    branch: Branch,
}

impl Pillar {
    /// Pair a stem and branch, rejecting the 60 unreachable combinations.
    pub fn new(stem: Stem, branch: Branch) -> Result<Self, BaziError> {
        pillar_to_index(stem, branch)?;
        Ok(Self { stem, branch })
    }

    /// Pillar at `index mod 60`; negative offsets wrap backwards.
    pub const fn from_cycle(index: i64) -> Self {
        Self {
            stem: Stem::from_cycle(index),
            branch: Branch::from_cycle(index),
        }
    }

    pub const fn stem(&self) -> Stem {
        self.stem
    }

    pub const fn branch(&self) -> Branch {
        self.branch
    }

    /// 0-based cycle position (甲子 = 0, 癸亥 = 59).
    pub const fn index(&self) -> u8 {
        cycle_position(self.stem.index(), self.branch.index())
    }

    /// The pillar `steps` positions later in the cycle.
    pub const fn offset(&self, steps: i64) -> Self {
        Self::from_cycle(self.index() as i64 + steps)
    }

    /// Parse a two-character name such as `"甲子"`.
    pub fn from_name(name: &str) -> Option<Self> {
        let mut chars = name.chars();
        let stem = Stem::from_char(chars.next()?)?;
        let branch = Branch::from_char(chars.next()?)?;
        if chars.next().is_some() {
            return None;
        }
        Self::new(stem, branch).ok()
    }
}

impl Display for Pillar {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem.name(), self.branch.name())
    }
}

const fn cycle_position(stem: u8, branch: u8) -> u8 {
    ((6 * stem as i16 - 5 * branch as i16).rem_euclid(60)) as u8
}

/// Stem-branch pair at cycle position `index` (0..60).
pub fn index_to_pillar(index: u8) -> Result<Pillar, BaziError> {
    if index >= CYCLE_LEN {
        return Err(BaziError::InvalidIndex {
            what: "sexagenary",
            value: index as i64,
        });
    }
    Ok(Pillar::from_cycle(index as i64))
}

/// Cycle position of a stem-branch pair.
///
/// Fails with [`BaziError::InvalidCombination`] when the parities differ
/// (e.g. 甲丑); such a pair cannot come from valid input.
pub fn pillar_to_index(stem: Stem, branch: Branch) -> Result<u8, BaziError> {
    let (s, b) = (stem.index(), branch.index());
    if s % 2 != b % 2 {
        return Err(BaziError::InvalidCombination { stem: s, branch: b });
    }
    Ok(cycle_position(s, b))
}

/// All 60 pillars in cycle order.
pub fn all_pillars() -> impl Iterator<Item = Pillar> {
    (0..CYCLE_LEN as i64).map(Pillar::from_cycle)
}
