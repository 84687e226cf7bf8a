//! Chinese lunisolar calendar conversion and Four Pillars (八字) computation.
//!
//! This crate provides:
//! - The sexagenary cycle of stems and branches, with Na Yin
//! - Solar <-> lunar date conversion for 1900-2100 from a packed month table
//! - The 24 solar terms (fixed month/day approximation)
//! - Year, month, day and hour pillars of a civil date-time
//! - Element, polarity, hidden stem and ten-god classification
//! - Chart views: element tally, Day Master strength, luck pillars
//!
//! All tables are compile-time constants; nothing here performs I/O.

pub mod chart;
pub mod element;
pub mod error;
pub mod ganzhi;
pub mod hidden_stems;
pub mod luck;
pub mod lunar;
pub mod lunar_table;
pub mod nayin;
pub mod pillars;
pub mod sexagenary;
pub mod solar_term;
pub mod strength;
pub mod ten_gods;

pub use chart::{
    BalanceLevel, Chart, ChartConfig, ElementTally, HiddenTenGod, StemTenGods, element_tally,
};
pub use element::{
    ALL_ELEMENTS, ALL_RELATIONS, Element, ElementRelation, Polarity, element_of, polarity_of,
    relation,
};
pub use error::BaziError;
pub use ganzhi::{ALL_BRANCHES, ALL_STEMS, Branch, Stem, Symbol, Zodiac};
pub use hidden_stems::{HIDDEN_STEM_WEIGHT, HiddenStem, hidden_stems};
pub use luck::{
    Gender, LuckDirection, LuckPillar, MAX_LUCK_PERIOD_YEARS, MAX_LUCK_PILLAR_COUNT,
    luck_direction, luck_pillars,
};
pub use lunar::{LUNAR_EPOCH, LunarDate, day_name, lunar_to_solar, month_name, solar_to_lunar};
pub use lunar_table::{
    FIRST_YEAR, LAST_YEAR, leap_month, leap_month_days, lunar_month_days, lunar_year_days,
};
pub use nayin::{Nayin, nayin};
pub use pillars::{
    ALL_POSITIONS, FourPillars, PillarPosition, compute_pillars, day_pillar, ganzhi_year,
    hour_pillar, month_pillar, year_ganzhi, year_pillar,
};
pub use sexagenary::{CYCLE_LEN, Pillar, all_pillars, index_to_pillar, pillar_to_index};
pub use solar_term::{
    ALL_SOLAR_TERMS, SolarTerm, solar_term_date, solar_term_for, start_of_spring, term_date,
};
pub use strength::{DayMasterStrength, StrengthLevel, day_master_strength};
pub use ten_gods::{ALL_TEN_GODS, TenGod, ten_god, ten_god_for_stems};
