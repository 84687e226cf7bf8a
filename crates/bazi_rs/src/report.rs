//! Serializable views of conversion results and charts.
//!
//! Enum values are rendered as names so reports stay readable as JSON.

use bazi_base::{
    ALL_ELEMENTS, BaziError, Chart, ChartConfig, ElementTally, LuckDirection, LunarDate, Pillar,
    TenGod, nayin,
};
use serde::Serialize;

use crate::convenience::PillarStrings;

/// A lunar date with its Chinese rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LunarReport {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub is_leap: bool,
    pub text: String,
}

impl From<LunarDate> for LunarReport {
    fn from(l: LunarDate) -> Self {
        Self {
            year: l.year(),
            month: l.month(),
            day: l.day(),
            is_leap: l.is_leap(),
            text: l.to_string(),
        }
    }
}

/// One pillar with its Na Yin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PillarReport {
    pub ganzhi: String,
    pub index: u8,
    pub nayin: &'static str,
    pub nayin_element: &'static str,
}

impl From<Pillar> for PillarReport {
    fn from(p: Pillar) -> Self {
        let n = nayin(p);
        Self {
            ganzhi: p.to_string(),
            index: p.index(),
            nayin: n.name,
            nayin_element: n.element.english_name(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementCount {
    pub element: &'static str,
    pub count: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementReport {
    pub counts: Vec<ElementCount>,
    pub strongest: &'static str,
    pub weakest: &'static str,
    pub spread: f64,
    pub balance: &'static str,
}

impl From<ElementTally> for ElementReport {
    fn from(t: ElementTally) -> Self {
        Self {
            counts: ALL_ELEMENTS
                .iter()
                .map(|&e| ElementCount {
                    element: e.english_name(),
                    count: t.get(e),
                })
                .collect(),
            strongest: t.strongest().english_name(),
            weakest: t.weakest().english_name(),
            spread: t.spread(),
            balance: t.balance().name(),
        }
    }
}

/// A ten-god category under its Chinese and English names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TenGodLabel {
    pub name: &'static str,
    pub english: &'static str,
}

impl From<TenGod> for TenGodLabel {
    fn from(g: TenGod) -> Self {
        Self {
            name: g.name(),
            english: g.english_name(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TenGodsReport {
    pub year: TenGodLabel,
    pub month: TenGodLabel,
    pub hour: TenGodLabel,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HiddenTenGodReport {
    pub position: &'static str,
    pub stem: &'static str,
    pub weight: f64,
    pub ten_god: TenGodLabel,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrengthReport {
    pub score: f64,
    pub level: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LuckReport {
    pub ganzhi: String,
    pub start_age: u32,
    pub end_age: u32,
}

/// Everything derivable from one birth chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartReport {
    pub birth: String,
    pub lunar: Option<LunarReport>,
    pub gender: &'static str,
    pub zodiac: &'static str,
    pub day_master: &'static str,
    pub pillars: PillarStrings,
    pub pillar_details: Vec<PillarReport>,
    pub elements: ElementReport,
    pub ten_gods: TenGodsReport,
    pub hidden_ten_gods: Vec<HiddenTenGodReport>,
    pub strength: StrengthReport,
    pub luck_direction: &'static str,
    pub luck_pillars: Vec<LuckReport>,
}

impl ChartReport {
    /// Fails when the luck options in `config` are out of bounds.
    pub fn new(chart: &Chart, config: &ChartConfig) -> Result<Self, BaziError> {
        let p = chart.pillars();
        let gods = chart.ten_gods();
        let strength = chart.strength();
        let hidden_ten_gods = if config.hidden_stem_ten_gods {
            chart
                .hidden_ten_gods()
                .into_iter()
                .map(|h| HiddenTenGodReport {
                    position: h.position.key(),
                    stem: h.hidden.stem.name(),
                    weight: h.hidden.weight,
                    ten_god: h.ten_god.into(),
                })
                .collect()
        } else {
            Vec::new()
        };
        let luck_pillars = chart
            .luck_pillars(config)?
            .into_iter()
            .map(|l| LuckReport {
                ganzhi: l.pillar.to_string(),
                start_age: l.start_age,
                end_age: l.end_age,
            })
            .collect();
        Ok(Self {
            birth: chart.birth().to_string(),
            lunar: chart.lunar().map(LunarReport::from),
            gender: chart.gender().english_name(),
            zodiac: chart.zodiac().english_name(),
            day_master: chart.day_master().name(),
            pillars: PillarStrings {
                year: p.year.to_string(),
                month: p.month.to_string(),
                day: p.day.to_string(),
                hour: p.hour.to_string(),
            },
            pillar_details: p.as_array().into_iter().map(PillarReport::from).collect(),
            elements: chart.element_tally().into(),
            ten_gods: TenGodsReport {
                year: gods.year.into(),
                month: gods.month.into(),
                hour: gods.hour.into(),
            },
            hidden_ten_gods,
            strength: StrengthReport {
                score: strength.score,
                level: strength.level.english_name(),
            },
            luck_direction: match chart.luck_direction() {
                LuckDirection::Forward => "forward",
                LuckDirection::Backward => "backward",
            },
            luck_pillars,
        })
    }
}
