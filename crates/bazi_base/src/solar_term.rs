//! The 24 solar terms (节气) on fixed approximate calendar dates.
//!
//! Each term is pinned to the same Gregorian month/day every year. True
//! term instants drift by about a day from year to year; this table does not
//! follow them. Index 0 is Minor Cold (小寒, ~Jan 5) and index 2 is Start of
//! Spring (立春, ~Feb 4), the boundary of the ganzhi year.

use bazi_time::CivilDate;

use crate::error::BaziError;
use crate::lunar_table::{FIRST_YEAR, LAST_YEAR};

/// The 24 solar terms in calendar-year order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolarTerm {
    MinorCold,
    MajorCold,
    StartOfSpring,
    RainWater,
    AwakeningOfInsects,
    SpringEquinox,
    PureBrightness,
    GrainRain,
    StartOfSummer,
    GrainFull,
    GrainInEar,
    SummerSolstice,
    MinorHeat,
    MajorHeat,
    StartOfAutumn,
    EndOfHeat,
    WhiteDew,
    AutumnEquinox,
    ColdDew,
    FrostDescent,
    StartOfWinter,
    MinorSnow,
    MajorSnow,
    WinterSolstice,
}

/// All 24 terms in order (0 = Minor Cold).
pub const ALL_SOLAR_TERMS: [SolarTerm; 24] = [
    SolarTerm::MinorCold,
    SolarTerm::MajorCold,
    SolarTerm::StartOfSpring,
    SolarTerm::RainWater,
    SolarTerm::AwakeningOfInsects,
    SolarTerm::SpringEquinox,
    SolarTerm::PureBrightness,
    SolarTerm::GrainRain,
    SolarTerm::StartOfSummer,
    SolarTerm::GrainFull,
    SolarTerm::GrainInEar,
    SolarTerm::SummerSolstice,
    SolarTerm::MinorHeat,
    SolarTerm::MajorHeat,
    SolarTerm::StartOfAutumn,
    SolarTerm::EndOfHeat,
    SolarTerm::WhiteDew,
    SolarTerm::AutumnEquinox,
    SolarTerm::ColdDew,
    SolarTerm::FrostDescent,
    SolarTerm::StartOfWinter,
    SolarTerm::MinorSnow,
    SolarTerm::MajorSnow,
    SolarTerm::WinterSolstice,
];

/// Approximate (month, day) of each term, same order as [`ALL_SOLAR_TERMS`].
const TERM_DATES: [(u32, u32); 24] = [
    (1, 5),
    (1, 20),
    (2, 4),
    (2, 19),
    (3, 5),
    (3, 20),
    (4, 4),
    (4, 20),
    (5, 5),
    (5, 21),
    (6, 5),
    (6, 21),
    (7, 7),
    (7, 22),
    (8, 7),
    (8, 23),
    (9, 7),
    (9, 23),
    (10, 8),
    (10, 23),
    (11, 7),
    (11, 22),
    (12, 7),
    (12, 21),
];

const TERM_NAMES: [&str; 24] = [
    "小寒", "大寒", "立春", "雨水", "惊蛰", "春分", "清明", "谷雨", "立夏", "小满", "芒种", "夏至",
    "小暑", "大暑", "立秋", "处暑", "白露", "秋分", "寒露", "霜降", "立冬", "小雪", "大雪", "冬至",
];

impl SolarTerm {
    /// 0-based index (Minor Cold = 0 .. Winter Solstice = 23).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Chinese name of the term.
    pub const fn name(self) -> &'static str {
        TERM_NAMES[self.index() as usize]
    }

    /// Term at `index`, if it is below 24.
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 24 {
            Some(ALL_SOLAR_TERMS[index as usize])
        } else {
            None
        }
    }

    /// Approximate `(month, day)` on which the term falls.
    pub const fn month_day(self) -> (u32, u32) {
        TERM_DATES[self.index() as usize]
    }
}

/// Approximate date of term `term_index` (0..24) in `year`.
pub fn solar_term_date(year: i32, term_index: u8) -> Result<CivilDate, BaziError> {
    let term = SolarTerm::from_index(term_index).ok_or(BaziError::InvalidIndex {
        what: "solar term",
        value: term_index as i64,
    })?;
    term_date(year, term)
}

/// Approximate date of `term` in `year`.
pub fn term_date(year: i32, term: SolarTerm) -> Result<CivilDate, BaziError> {
    if !(FIRST_YEAR..=LAST_YEAR).contains(&year) {
        return Err(BaziError::DateOutOfRange { year });
    }
    let (month, day) = term.month_day();
    Ok(CivilDate::new(year, month, day)?)
}

/// Start of Spring (立春) of `year`: the ganzhi-year boundary.
pub fn start_of_spring(year: i32) -> Result<CivilDate, BaziError> {
    term_date(year, SolarTerm::StartOfSpring)
}

/// The most recent term on or before `date`, with the number of days since it.
///
/// Dates before Minor Cold fall in the previous year's Winter Solstice.
pub fn solar_term_for(date: CivilDate) -> Result<(SolarTerm, u32), BaziError> {
    let year = date.year();
    if !(FIRST_YEAR..=LAST_YEAR).contains(&year) {
        return Err(BaziError::DateOutOfRange { year });
    }
    let (month, day) = (date.month(), date.day());
    let idx = TERM_DATES.partition_point(|&md| md <= (month, day));
    let (term, start) = if idx == 0 {
        let last = SolarTerm::WinterSolstice;
        let (m, d) = last.month_day();
        (last, CivilDate::new(year - 1, m, d)?)
    } else {
        let term = ALL_SOLAR_TERMS[idx - 1];
        (term, term_date(year, term)?)
    };
    Ok((term, date.days_since(&start) as u32))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, t) in ALL_SOLAR_TERMS.iter().enumerate() {
            assert_eq!(t.index() as usize, i);
        }
    }

    #[test]
    fn start_of_spring_is_feb_4() {
        let d = start_of_spring(2024).unwrap();
        assert_eq!(d.ymd(), (2024, 2, 4));
        assert_eq!(SolarTerm::StartOfSpring.name(), "立春");
    }

    #[test]
    fn term_index_out_of_range() {
        assert_eq!(
            solar_term_date(2024, 24),
            Err(BaziError::InvalidIndex {
                what: "solar term",
                value: 24
            })
        );
    }

    #[test]
    fn year_out_of_range() {
        assert_eq!(
            solar_term_date(2101, 0),
            Err(BaziError::DateOutOfRange { year: 2101 })
        );
    }

    #[test]
    fn dates_strictly_increase() {
        for w in TERM_DATES.windows(2) {
            assert!(w[0] < w[1]);
        }
    }

    #[test]
    fn term_for_date() {
        let d = CivilDate::new(2024, 2, 4).unwrap();
        assert_eq!(solar_term_for(d), Ok((SolarTerm::StartOfSpring, 0)));
        let d = CivilDate::new(2024, 2, 18).unwrap();
        assert_eq!(solar_term_for(d), Ok((SolarTerm::StartOfSpring, 14)));
        let d = CivilDate::new(2024, 1, 1).unwrap();
        assert_eq!(solar_term_for(d), Ok((SolarTerm::WinterSolstice, 11)));
        let d = CivilDate::new(2024, 12, 31).unwrap();
        assert_eq!(solar_term_for(d), Ok((SolarTerm::WinterSolstice, 10)));
    }
}
