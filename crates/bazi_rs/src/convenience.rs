//! Primitive-typed entry points: plain integers and characters in,
//! tuples, enums and 2-character pillar strings out.
//!
//! Inputs are validated here before they reach the core tables.

use bazi_base::{
    BaziError, Branch, Chart, ChartConfig, Element, Gender, HiddenStem, LunarDate, Nayin, Pillar,
    Polarity, SolarTerm, Stem, Symbol, TenGod, compute_pillars, ten_god_for_stems,
};
use bazi_time::{CivilDate, CivilDateTime};
use serde::Serialize;
use tracing::debug;

use crate::error::ApiError;
use crate::report::{ChartReport, LunarReport};

/// The four pillars as 2-character stem+branch strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PillarStrings {
    pub year: String,
    pub month: String,
    pub day: String,
    pub hour: String,
}

fn symbol(c: char) -> Result<Symbol, ApiError> {
    Symbol::from_char(c).ok_or_else(|| {
        debug!(%c, "not a stem or branch");
        ApiError::UnknownSymbol(c.to_string())
    })
}

fn stem(c: char) -> Result<Stem, ApiError> {
    match symbol(c)? {
        Symbol::Stem(s) => Ok(s),
        Symbol::Branch(_) => Err(ApiError::UnknownSymbol(c.to_string())),
    }
}

fn branch(c: char) -> Result<Branch, ApiError> {
    match symbol(c)? {
        Symbol::Branch(b) => Ok(b),
        Symbol::Stem(_) => Err(ApiError::UnknownSymbol(c.to_string())),
    }
}

/// Parse a 2-character pillar name such as `"甲子"`.
pub fn parse_pillar(name: &str) -> Result<Pillar, ApiError> {
    Pillar::from_name(name).ok_or_else(|| ApiError::UnknownSymbol(name.to_string()))
}

/// Solar date to `(lunar_year, lunar_month, lunar_day, is_leap)`.
pub fn solar_to_lunar(year: i32, month: u32, day: u32) -> Result<(i32, u8, u8, bool), ApiError> {
    let lunar = bazi_base::solar_to_lunar(CivilDate::new(year, month, day)?)?;
    Ok((lunar.year(), lunar.month(), lunar.day(), lunar.is_leap()))
}

/// Solar date to a lunar report carrying the Chinese rendering.
pub fn lunar_report(year: i32, month: u32, day: u32) -> Result<LunarReport, ApiError> {
    let lunar = bazi_base::solar_to_lunar(CivilDate::new(year, month, day)?)?;
    Ok(lunar.into())
}

/// Lunar date to solar `(year, month, day)`.
pub fn lunar_to_solar(
    year: i32,
    month: u8,
    day: u8,
    is_leap: bool,
) -> Result<(i32, u32, u32), ApiError> {
    let solar = bazi_base::lunar_to_solar(LunarDate::new(year, month, day, is_leap)?)?;
    Ok(solar.ymd())
}

/// Four pillars of a solar date-time.
pub fn compute_chart(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
) -> Result<PillarStrings, ApiError> {
    let at = CivilDateTime::new(year, month, day, hour, minute)?;
    let p = compute_pillars(at)?;
    Ok(PillarStrings {
        year: p.year.to_string(),
        month: p.month.to_string(),
        day: p.day.to_string(),
        hour: p.hour.to_string(),
    })
}

/// Full annotated chart report.
pub fn chart_report(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    gender: Gender,
    config: &ChartConfig,
) -> Result<ChartReport, ApiError> {
    let at = CivilDateTime::new(year, month, day, hour, minute)?;
    let chart = Chart::new(at, gender)?;
    ChartReport::new(&chart, config).map_err(ApiError::from)
}

/// Element of a stem or branch character.
pub fn element_of(c: char) -> Result<Element, ApiError> {
    Ok(bazi_base::element_of(symbol(c)?))
}

/// Polarity of a stem or branch character.
pub fn polarity_of(c: char) -> Result<Polarity, ApiError> {
    Ok(bazi_base::polarity_of(symbol(c)?))
}

/// Ten-god of stem `other` relative to day stem `day`.
pub fn ten_god(day: char, other: char) -> Result<TenGod, ApiError> {
    Ok(ten_god_for_stems(stem(day)?, stem(other)?))
}

/// Hidden stems of a branch character as `(stem, weight)` in traditional order.
pub fn hidden_stems(c: char) -> Result<Vec<(char, f64)>, ApiError> {
    let stems: &[HiddenStem] = bazi_base::hidden_stems(branch(c)?);
    Ok(stems
        .iter()
        .filter_map(|h| h.stem.name().chars().next().map(|ch| (ch, h.weight)))
        .collect())
}

/// Ganzhi of a calendar year (no Start-of-Spring adjustment).
pub fn year_ganzhi(year: i32) -> Result<String, ApiError> {
    Ok(bazi_base::year_ganzhi(year)?.to_string())
}

/// Na Yin of a pillar string.
pub fn nayin(pillar: &str) -> Result<Nayin, ApiError> {
    Ok(bazi_base::nayin(parse_pillar(pillar)?))
}

/// Date of solar term `index` (0 = 小寒 .. 23 = 冬至) in `year`.
pub fn solar_term_date(year: i32, index: u8) -> Result<(SolarTerm, (i32, u32, u32)), ApiError> {
    let term = SolarTerm::from_index(index).ok_or(BaziError::InvalidIndex {
        what: "solar term",
        value: i64::from(index),
    })?;
    Ok((term, bazi_base::term_date(year, term)?.ymd()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_must_be_stems_or_branches() {
        assert_eq!(element_of('x'), Err(ApiError::UnknownSymbol("x".into())));
        assert_eq!(element_of('甲'), Ok(Element::Wood));
        assert_eq!(element_of('子'), Ok(Element::Water));
        assert_eq!(polarity_of('乙'), Ok(Polarity::Yin));
    }

    #[test]
    fn ten_god_rejects_branches() {
        assert!(ten_god('子', '甲').is_err());
        assert_eq!(ten_god('丙', '甲'), Ok(TenGod::DirectResource));
    }

    #[test]
    fn hidden_stems_in_order() {
        assert_eq!(hidden_stems('寅').unwrap(), [('甲', 0.5), ('丙', 0.5), ('戊', 0.5)]);
        assert!(hidden_stems('甲').is_err());
    }

    #[test]
    fn invalid_dates_surface_the_field() {
        let err = compute_chart(2023, 2, 29, 0, 0).unwrap_err();
        assert!(matches!(err, ApiError::Core(BaziError::Time(_))));
        assert!(err.to_string().contains("day"));
    }

    #[test]
    fn solar_term_lookup() {
        let (term, ymd) = solar_term_date(2024, 2).unwrap();
        assert_eq!(term, SolarTerm::StartOfSpring);
        assert_eq!(ymd, (2024, 2, 4));
    }
}
