//! Day Master strength (日主强弱) scoring.
//!
//! Three contributions, each keyed by the element relation of a chart
//! symbol to the Day Master:
//! - Season (月令): the month branch alone, weighted heaviest.
//! - Roots (根气): all four branches.
//! - Support (帮扶): the year, month and hour stems.
//!
//! Relations not listed in a table contribute nothing.

use crate::element::{Element, ElementRelation, relation};
use crate::pillars::FourPillars;

// ---------------------------------------------------------------------------
// Weights
// ---------------------------------------------------------------------------

const SEASON_SAME: f64 = 4.0;
const SEASON_GENERATED_BY: f64 = 3.0;
const SEASON_DESTROYED_BY: f64 = -3.0;
const SEASON_DESTROYS: f64 = -2.0;

const ROOT_SAME: f64 = 1.5;
const ROOT_GENERATED_BY: f64 = 1.0;
const ROOT_DESTROYED_BY: f64 = -1.0;

const STEM_SAME: f64 = 1.0;
const STEM_GENERATED_BY: f64 = 0.8;
const STEM_DESTROYED_BY: f64 = -0.8;

/// Coarse strength classification of a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrengthLevel {
    VeryStrong,
    Strong,
    Balanced,
    Weak,
    VeryWeak,
}

impl StrengthLevel {
    /// Level for a raw score: >= 5, >= 2, >= -2, >= -5, below.
    pub fn from_score(score: f64) -> Self {
        if score >= 5.0 {
            Self::VeryStrong
        } else if score >= 2.0 {
            Self::Strong
        } else if score >= -2.0 {
            Self::Balanced
        } else if score >= -5.0 {
            Self::Weak
        } else {
            Self::VeryWeak
        }
    }

    /// Chinese name, e.g. "极旺".
    pub const fn name(self) -> &'static str {
        match self {
            Self::VeryStrong => "极旺",
            Self::Strong => "偏旺",
            Self::Balanced => "中和",
            Self::Weak => "偏弱",
            Self::VeryWeak => "极弱",
        }
    }

    pub const fn english_name(self) -> &'static str {
        match self {
            Self::VeryStrong => "very strong",
            Self::Strong => "strong",
            Self::Balanced => "balanced",
            Self::Weak => "weak",
            Self::VeryWeak => "very weak",
        }
    }
}

/// Score breakdown and level of the Day Master.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayMasterStrength {
    pub season: f64,
    pub roots: f64,
    pub support: f64,
    pub score: f64,
    pub level: StrengthLevel,
}

fn season_weight(rel: ElementRelation) -> f64 {
    match rel {
        ElementRelation::Same => SEASON_SAME,
        ElementRelation::GeneratedBy => SEASON_GENERATED_BY,
        ElementRelation::DestroyedBy => SEASON_DESTROYED_BY,
        ElementRelation::Destroys => SEASON_DESTROYS,
        ElementRelation::Generates => 0.0,
    }
}

fn root_weight(rel: ElementRelation) -> f64 {
    match rel {
        ElementRelation::Same => ROOT_SAME,
        ElementRelation::GeneratedBy => ROOT_GENERATED_BY,
        ElementRelation::DestroyedBy => ROOT_DESTROYED_BY,
        _ => 0.0,
    }
}

fn stem_weight(rel: ElementRelation) -> f64 {
    match rel {
        ElementRelation::Same => STEM_SAME,
        ElementRelation::GeneratedBy => STEM_GENERATED_BY,
        ElementRelation::DestroyedBy => STEM_DESTROYED_BY,
        _ => 0.0,
    }
}

/// Strength of the day stem within `pillars`.
pub fn day_master_strength(pillars: &FourPillars) -> DayMasterStrength {
    let dm: Element = pillars.day.stem().element();

    let season = season_weight(relation(dm, pillars.month.branch().element()));
    let roots: f64 = pillars
        .branches()
        .iter()
        .map(|b| root_weight(relation(dm, b.element())))
        .sum();
    // Skip the day pillar by position; an equal stem in another pillar still counts.
    let support: f64 = [pillars.year, pillars.month, pillars.hour]
        .iter()
        .map(|p| stem_weight(relation(dm, p.stem().element())))
        .sum();

    let score = season + roots + support;
    DayMasterStrength {
        season,
        roots,
        support,
        score,
        level: StrengthLevel::from_score(score),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pillars::compute_pillars;
    use crate::sexagenary::Pillar;
    use bazi_time::CivilDateTime;

    fn p(name: &str) -> Pillar {
        Pillar::from_name(name).unwrap()
    }

    #[test]
    fn chart_1990_is_very_strong() {
        let pillars = compute_pillars(CivilDateTime::new(1990, 1, 1, 12, 0).unwrap()).unwrap();
        let s = day_master_strength(&pillars);
        assert!((s.season - 3.0).abs() < 1e-9);
        assert!((s.roots - 4.0).abs() < 1e-9);
        assert!((s.support - 1.8).abs() < 1e-9);
        assert!((s.score - 8.8).abs() < 1e-9);
        assert_eq!(s.level, StrengthLevel::VeryStrong);
    }

    #[test]
    fn duplicate_day_stem_elsewhere_still_counts() {
        // 丙 in the month stem supports the 丙 Day Master.
        let pillars = FourPillars {
            year: p("庚申"),
            month: p("丙申"),
            day: p("丙申"),
            hour: p("庚申"),
        };
        let s = day_master_strength(&pillars);
        // Fire destroys Metal: season -2, roots 0, support +1.0.
        assert!((s.support - 1.0).abs() < 1e-9);
        assert!((s.score - (-1.0)).abs() < 1e-9);
        assert_eq!(s.level, StrengthLevel::Balanced);
    }

    #[test]
    fn heavily_controlled_day_master_is_very_weak() {
        // 甲 Wood surrounded by Metal.
        let pillars = FourPillars {
            year: p("庚申"),
            month: p("辛酉"),
            day: p("甲申"),
            hour: p("庚午"),
        };
        let s = day_master_strength(&pillars);
        // season -3, roots -3 (午 Fire is neutral), support -2.4.
        assert!((s.score - (-8.4)).abs() < 1e-9);
        assert_eq!(s.level, StrengthLevel::VeryWeak);
    }

    #[test]
    fn level_thresholds() {
        assert_eq!(StrengthLevel::from_score(5.0), StrengthLevel::VeryStrong);
        assert_eq!(StrengthLevel::from_score(4.99), StrengthLevel::Strong);
        assert_eq!(StrengthLevel::from_score(2.0), StrengthLevel::Strong);
        assert_eq!(StrengthLevel::from_score(-2.0), StrengthLevel::Balanced);
        assert_eq!(StrengthLevel::from_score(-2.1), StrengthLevel::Weak);
        assert_eq!(StrengthLevel::from_score(-5.0), StrengthLevel::Weak);
        assert_eq!(StrengthLevel::from_score(-5.1), StrengthLevel::VeryWeak);
    }
}
