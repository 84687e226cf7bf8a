//! Luck pillars (大运): ten-year periods stepping from the month pillar.
//!
//! Direction follows gender and year-stem polarity. Age spans use a fixed
//! start of age 1 rather than the distance to the nearest solar term.

use tracing::debug;

use crate::element::Polarity;
use crate::error::BaziError;
use crate::sexagenary::Pillar;

/// Default number of luck pillars.
pub const DEFAULT_LUCK_PILLAR_COUNT: usize = 8;

/// Default period length in years.
pub const DEFAULT_LUCK_PERIOD_YEARS: u32 = 10;

/// Largest accepted number of luck pillars (one full 60-cycle).
pub const MAX_LUCK_PILLAR_COUNT: usize = 60;

/// Longest accepted period length in years.
pub const MAX_LUCK_PERIOD_YEARS: u32 = 120;

/// Age at which the first period starts.
pub const FIRST_LUCK_AGE: u32 = 1;

/// Gender of the chart subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Male => "男",
            Self::Female => "女",
        }
    }

    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

/// Stepping direction through the 60-cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LuckDirection {
    /// 顺排
    Forward,
    /// 逆排
    Backward,
}

impl LuckDirection {
    /// +1 or -1.
    pub const fn sign(self) -> i64 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }
}

/// One luck period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LuckPillar {
    pub pillar: Pillar,
    pub start_age: u32,
    pub end_age: u32,
}

/// Forward for a yang-year male or a yin-year female, backward otherwise.
pub const fn luck_direction(gender: Gender, year_stem_polarity: Polarity) -> LuckDirection {
    match (gender, year_stem_polarity) {
        (Gender::Male, Polarity::Yang) | (Gender::Female, Polarity::Yin) => LuckDirection::Forward,
        _ => LuckDirection::Backward,
    }
}

/// `count` luck pillars of `period_years` each, starting one step from `month`.
///
/// `count` is limited to [`MAX_LUCK_PILLAR_COUNT`] and `period_years` to
/// `1..=`[`MAX_LUCK_PERIOD_YEARS`]; anything else is
/// [`BaziError::InvalidConfig`].
pub fn luck_pillars(
    month: Pillar,
    direction: LuckDirection,
    count: usize,
    period_years: u32,
) -> Result<Vec<LuckPillar>, BaziError> {
    if count > MAX_LUCK_PILLAR_COUNT {
        debug!(count, "luck pillar count too large");
        return Err(BaziError::InvalidConfig {
            field: "luck pillar count",
            value: i64::try_from(count).unwrap_or(i64::MAX),
        });
    }
    if !(1..=MAX_LUCK_PERIOD_YEARS).contains(&period_years) {
        debug!(period_years, "luck period length out of bounds");
        return Err(BaziError::InvalidConfig {
            field: "luck period years",
            value: i64::from(period_years),
        });
    }

    // Both bounds hold, so the largest age is 1 + 120 * 60 and fits in u32.
    Ok((0..count as u32)
        .map(|i| {
            let start_age = FIRST_LUCK_AGE + period_years * i;
            LuckPillar {
                pillar: month.offset(direction.sign() * (i64::from(i) + 1)),
                start_age,
                end_age: start_age + period_years - 1,
            }
        })
        .collect())
}
