//! Annotated birth chart (命盘) and its derived views.

use bazi_time::CivilDateTime;
use tracing::debug;

use crate::element::{ALL_ELEMENTS, Element};
use crate::error::BaziError;
use crate::ganzhi::{Stem, Zodiac};
use crate::hidden_stems::{HiddenStem, hidden_stems};
use crate::lunar::{LUNAR_EPOCH, LunarDate, solar_to_lunar};
use crate::luck::{
    DEFAULT_LUCK_PERIOD_YEARS, DEFAULT_LUCK_PILLAR_COUNT, Gender, LuckDirection, LuckPillar,
    luck_direction, luck_pillars,
};
use crate::nayin::{Nayin, nayin};
use crate::pillars::{ALL_POSITIONS, FourPillars, PillarPosition, compute_pillars};
use crate::strength::{DayMasterStrength, day_master_strength};
use crate::ten_gods::{TenGod, ten_god_for_stems};

/// Options for the derived chart views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartConfig {
    /// Number of luck pillars to list.
    pub luck_pillar_count: usize,
    /// Years covered by each luck pillar.
    pub luck_period_years: u32,
    /// Include ten-gods of hidden stems in [`Chart::hidden_ten_gods`].
    pub hidden_stem_ten_gods: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            luck_pillar_count: DEFAULT_LUCK_PILLAR_COUNT,
            luck_period_years: DEFAULT_LUCK_PERIOD_YEARS,
            hidden_stem_ten_gods: true,
        }
    }
}

// ---------------------------------------------------------------------------
// Element tally
// ---------------------------------------------------------------------------

/// Spread classification of an element tally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BalanceLevel {
    /// Spread below 2.
    Balanced,
    /// Spread below 4.
    Uneven,
    Skewed,
}

impl BalanceLevel {
    pub fn from_spread(spread: f64) -> Self {
        if spread < 2.0 {
            Self::Balanced
        } else if spread < 4.0 {
            Self::Uneven
        } else {
            Self::Skewed
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Balanced => "balanced",
            Self::Uneven => "uneven",
            Self::Skewed => "skewed",
        }
    }
}

/// Weighted count per element, indexed by [`Element::index`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ElementTally {
    counts: [f64; 5],
}

impl ElementTally {
    /// Add `weight` to `element`.
    pub fn add(&mut self, element: Element, weight: f64) {
        self.counts[element.index() as usize] += weight;
    }

    pub fn get(&self, element: Element) -> f64 {
        self.counts[element.index() as usize]
    }

    pub fn total(&self) -> f64 {
        self.counts.iter().sum()
    }

    /// Element with the highest count; ties go to the earlier element.
    pub fn strongest(&self) -> Element {
        ALL_ELEMENTS
            .into_iter()
            .fold(Element::Wood, |best, e| if self.get(e) > self.get(best) { e } else { best })
    }

    /// Element with the lowest count; ties go to the earlier element.
    pub fn weakest(&self) -> Element {
        ALL_ELEMENTS
            .into_iter()
            .fold(Element::Wood, |best, e| if self.get(e) < self.get(best) { e } else { best })
    }

    /// Highest minus lowest count.
    pub fn spread(&self) -> f64 {
        self.get(self.strongest()) - self.get(self.weakest())
    }

    pub fn balance(&self) -> BalanceLevel {
        BalanceLevel::from_spread(self.spread())
    }

    /// `(element, count)` pairs in Wood..Water order.
    pub fn iter(&self) -> impl Iterator<Item = (Element, f64)> + '_ {
        ALL_ELEMENTS.into_iter().map(|e| (e, self.get(e)))
    }
}

/// Tally of visible stems and branches (1.0 each) plus hidden stems (their weight).
pub fn element_tally(pillars: &FourPillars) -> ElementTally {
    let mut tally = ElementTally::default();
    for pillar in pillars.as_array() {
        tally.add(pillar.stem().element(), 1.0);
        tally.add(pillar.branch().element(), 1.0);
        for hidden in hidden_stems(pillar.branch()) {
            tally.add(hidden.stem.element(), hidden.weight);
        }
    }
    tally
}

// ---------------------------------------------------------------------------
// Chart
// ---------------------------------------------------------------------------

/// Ten-gods of the visible stems around the Day Master.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StemTenGods {
    pub year: TenGod,
    pub month: TenGod,
    pub hour: TenGod,
}

/// A hidden stem with its ten-god relative to the Day Master.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HiddenTenGod {
    pub position: PillarPosition,
    pub hidden: HiddenStem,
    pub ten_god: TenGod,
}

/// Birth chart: date-time, lunar birthday, gender and four pillars.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Chart {
    birth: CivilDateTime,
    lunar: Option<LunarDate>,
    gender: Gender,
    pillars: FourPillars,
}

impl Chart {
    /// Build the chart for `birth` (1900-2100).
    ///
    /// The lunar birthday is `None` for the days before 1900-01-31,
    /// which precede the lunar table.
    pub fn new(birth: CivilDateTime, gender: Gender) -> Result<Self, BaziError> {
        let pillars = compute_pillars(birth)?;
        let lunar = if birth.date() < LUNAR_EPOCH {
            debug!(%birth, "birth date precedes lunar table");
            None
        } else {
            Some(solar_to_lunar(birth.date())?)
        };
        Ok(Self {
            birth,
            lunar,
            gender,
            pillars,
        })
    }

    pub const fn birth(&self) -> CivilDateTime {
        self.birth
    }

    pub const fn lunar(&self) -> Option<LunarDate> {
        self.lunar
    }

    pub const fn gender(&self) -> Gender {
        self.gender
    }

    pub const fn pillars(&self) -> &FourPillars {
        &self.pillars
    }

    /// The day stem.
    pub const fn day_master(&self) -> Stem {
        self.pillars.day.stem()
    }

    /// Zodiac animal of the year pillar.
    pub const fn zodiac(&self) -> Zodiac {
        self.pillars.year.branch().zodiac()
    }

    pub fn element_tally(&self) -> ElementTally {
        element_tally(&self.pillars)
    }

    pub fn ten_gods(&self) -> StemTenGods {
        let dm = self.day_master();
        StemTenGods {
            year: ten_god_for_stems(dm, self.pillars.year.stem()),
            month: ten_god_for_stems(dm, self.pillars.month.stem()),
            hour: ten_god_for_stems(dm, self.pillars.hour.stem()),
        }
    }

    /// Ten-god of every hidden stem, by pillar position then branch order.
    pub fn hidden_ten_gods(&self) -> Vec<HiddenTenGod> {
        let dm = self.day_master();
        ALL_POSITIONS
            .into_iter()
            .flat_map(|position| {
                hidden_stems(self.pillars.get(position).branch())
                    .iter()
                    .map(move |&hidden| HiddenTenGod {
                        position,
                        hidden,
                        ten_god: ten_god_for_stems(dm, hidden.stem),
                    })
            })
            .collect()
    }

    /// Na Yin of each pillar in chart order.
    pub fn nayin(&self) -> [Nayin; 4] {
        self.pillars.as_array().map(nayin)
    }

    pub fn strength(&self) -> DayMasterStrength {
        day_master_strength(&self.pillars)
    }

    pub fn luck_direction(&self) -> LuckDirection {
        luck_direction(self.gender, self.pillars.year.stem().polarity())
    }

    /// Fails with [`BaziError::InvalidConfig`] when the count or period in
    /// `config` is out of bounds.
    pub fn luck_pillars(&self, config: &ChartConfig) -> Result<Vec<LuckPillar>, BaziError> {
        luck_pillars(
            self.pillars.month,
            self.luck_direction(),
            config.luck_pillar_count,
            config.luck_period_years,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chart_1990(gender: Gender) -> Chart {
        Chart::new(CivilDateTime::new(1990, 1, 1, 12, 0).unwrap(), gender).unwrap()
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn tally_1990() {
        let t = chart_1990(Gender::Male).element_tally();
        assert!(close(t.get(Element::Wood), 2.5));
        assert!(close(t.get(Element::Fire), 5.5));
        assert!(close(t.get(Element::Earth), 3.0));
        assert!(close(t.get(Element::Metal), 2.0));
        assert!(close(t.get(Element::Water), 0.5));
        assert!(close(t.total(), 13.5));
        assert_eq!(t.strongest(), Element::Fire);
        assert_eq!(t.weakest(), Element::Water);
        assert!(close(t.spread(), 5.0));
        assert_eq!(t.balance(), BalanceLevel::Skewed);
    }

    #[test]
    fn tally_ties_prefer_earlier_element() {
        let mut t = ElementTally::default();
        t.add(Element::Fire, 2.0);
        t.add(Element::Water, 2.0);
        assert_eq!(t.strongest(), Element::Fire);
        assert_eq!(t.weakest(), Element::Wood);
        assert_eq!(t.balance(), BalanceLevel::Uneven);
    }

    #[test]
    fn ten_gods_1990() {
        let c = chart_1990(Gender::Male);
        assert_eq!(c.day_master(), Stem::Bing);
        let g = c.ten_gods();
        assert_eq!(g.year, TenGod::EatingGod);
        assert_eq!(g.month, TenGod::Companion);
        assert_eq!(g.hour, TenGod::DirectResource);
    }

    #[test]
    fn hidden_ten_gods_cover_every_hidden_stem() {
        let c = chart_1990(Gender::Male);
        let hidden = c.hidden_ten_gods();
        // 巳 3 + 寅 3 + 申 3 + 午 2
        assert_eq!(hidden.len(), 11);
        assert_eq!(hidden[0].position, PillarPosition::Year);
        assert_eq!(hidden[0].hidden.stem, Stem::Bing);
        assert_eq!(hidden[0].ten_god, TenGod::Companion);
        let last = hidden[hidden.len() - 1];
        assert_eq!(last.position, PillarPosition::Hour);
        assert_eq!(last.hidden.stem, Stem::Ji);
        assert_eq!(last.ten_god, TenGod::EatingGod);
    }

    #[test]
    fn luck_pillars_by_gender() {
        let config = ChartConfig::default();
        let male = chart_1990(Gender::Male);
        assert_eq!(male.luck_direction(), LuckDirection::Backward);
        let steps = male.luck_pillars(&config).unwrap();
        assert_eq!(steps.len(), 8);
        assert_eq!(steps[0].pillar.to_string(), "乙丑");
        assert_eq!(steps[1].pillar.to_string(), "甲子");
        assert_eq!((steps[7].start_age, steps[7].end_age), (71, 80));

        let female = chart_1990(Gender::Female);
        assert_eq!(female.luck_direction(), LuckDirection::Forward);
        assert_eq!(female.luck_pillars(&config).unwrap()[0].pillar.to_string(), "丁卯");
    }

    #[test]
    fn luck_options_out_of_bounds() {
        let c = chart_1990(Gender::Male);
        let config = ChartConfig {
            luck_period_years: u32::MAX,
            ..ChartConfig::default()
        };
        assert!(matches!(
            c.luck_pillars(&config),
            Err(BaziError::InvalidConfig { field: "luck period years", .. })
        ));
    }

    #[test]
    fn chart_carries_lunar_birthday() {
        let c = chart_1990(Gender::Female);
        let l = c.lunar().unwrap();
        assert_eq!((l.year(), l.month(), l.day(), l.is_leap()), (1989, 12, 5, false));
        assert_eq!(c.zodiac(), Zodiac::Snake);
    }

    #[test]
    fn chart_before_lunar_epoch_has_no_lunar_date() {
        let c = Chart::new(CivilDateTime::new(1900, 1, 1, 0, 0).unwrap(), Gender::Male).unwrap();
        assert!(c.lunar().is_none());
        assert_eq!(c.pillars().day.to_string(), "甲辰");
    }

    #[test]
    fn nayin_per_pillar() {
        let n = chart_1990(Gender::Male).nayin();
        // 己巳 大林木, 丙寅 炉中火, 丙申 山下火, 甲午 砂中金
        assert_eq!(n[0].element, Element::Wood);
        assert_eq!(n[1].element, Element::Fire);
        assert_eq!(n[2].element, Element::Fire);
        assert_eq!(n[3].element, Element::Metal);
    }
}
