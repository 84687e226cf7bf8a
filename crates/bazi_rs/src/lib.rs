//! Convenience layer over `bazi_base`.
//!
//! Takes plain integers and stem/branch characters, validates them, and
//! returns tuples, enums or 2-character pillar strings. [`chart_report`]
//! bundles every chart view into a `serde`-serializable report.
//!
//! # Quick start
//!
//! ```rust
//! use bazi_rs::*;
//!
//! let lunar = solar_to_lunar(2024, 2, 10).unwrap();
//! assert_eq!(lunar, (2024, 1, 1, false));
//!
//! let chart = compute_chart(1990, 1, 1, 12, 0).unwrap();
//! assert_eq!(chart.day, "丙申");
//! ```

pub mod convenience;
pub mod error;
pub mod report;

pub use convenience::{
    PillarStrings, chart_report, compute_chart, element_of, hidden_stems, lunar_report,
    lunar_to_solar, nayin, parse_pillar, polarity_of, solar_term_date, solar_to_lunar, ten_god,
    year_ganzhi,
};
pub use error::ApiError;
pub use report::{
    ChartReport, ElementCount, ElementReport, HiddenTenGodReport, LuckReport, LunarReport,
    PillarReport, StrengthReport, TenGodLabel, TenGodsReport,
};

// Re-export core types so callers don't need to depend on bazi_base directly.
pub use bazi_base::{
    BaziError, ChartConfig, Element, Gender, Nayin, Polarity, SolarTerm, TenGod,
};
pub use bazi_time::{CivilDate, CivilDateTime, TimeError};
