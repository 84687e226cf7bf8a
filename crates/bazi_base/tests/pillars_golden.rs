//! Golden Four Pillars charts and the 1990 reference chart views.

use bazi_base::{
    ALL_BRANCHES, ALL_ELEMENTS, BaziError, Chart, ChartConfig, Element, Gender, StrengthLevel,
    TenGod, compute_pillars, day_pillar, ganzhi_year, hidden_stems, year_ganzhi,
};
use bazi_time::{CivilDate, CivilDateTime};

fn pillars(y: i32, m: u32, d: u32, h: u32, min: u32) -> [String; 4] {
    compute_pillars(CivilDateTime::new(y, m, d, h, min).unwrap())
        .unwrap()
        .as_array()
        .map(|p| p.to_string())
}

#[test]
fn reference_charts() {
    assert_eq!(pillars(1990, 1, 1, 12, 0), ["己巳", "丙寅", "丙申", "甲午"]);
    assert_eq!(pillars(2024, 2, 3, 23, 59), ["癸卯", "乙卯", "丁卯", "庚子"]);
    assert_eq!(pillars(2024, 2, 4, 0, 0), ["甲辰", "丁卯", "戊辰", "壬子"]);
    assert_eq!(pillars(2000, 1, 1, 0, 0), ["己卯", "丙寅", "戊子", "壬子"]);
    assert_eq!(pillars(1900, 1, 1, 0, 0), ["己亥", "丙寅", "甲辰", "甲子"]);
    assert_eq!(pillars(2024, 6, 15, 8, 30), ["甲辰", "辛未", "庚辰", "庚辰"]);
    assert_eq!(pillars(1984, 3, 1, 23, 30), ["甲子", "戊辰", "甲子", "甲子"]);
}

#[test]
fn start_of_spring_flips_the_year() {
    let before = CivilDateTime::new(2024, 2, 3, 23, 59).unwrap();
    let at = CivilDateTime::new(2024, 2, 4, 0, 0).unwrap();
    assert_eq!(ganzhi_year(before), Ok(2023));
    assert_eq!(ganzhi_year(at), Ok(2024));
    assert_eq!(year_ganzhi(2024).unwrap().to_string(), "甲辰");
}

#[test]
fn day_pillar_advances_daily() {
    let mut date = CivilDate::new(1900, 1, 1).unwrap();
    let mut prev = day_pillar(date);
    for _ in 0..1000 {
        date = date.add_days(1);
        let next = day_pillar(date);
        assert_eq!(next, prev.offset(1));
        prev = next;
    }
}

#[test]
fn range_limits() {
    let early = CivilDateTime::new(1899, 12, 31, 23, 0).unwrap();
    assert_eq!(compute_pillars(early), Err(BaziError::DateOutOfRange { year: 1899 }));
    let late = CivilDateTime::new(2101, 1, 1, 0, 0).unwrap();
    assert_eq!(compute_pillars(late), Err(BaziError::DateOutOfRange { year: 2101 }));
    assert!(compute_pillars(CivilDateTime::new(2100, 12, 31, 23, 59).unwrap()).is_ok());
}

#[test]
fn invalid_date_times_never_reach_the_calculator() {
    assert!(CivilDateTime::new(2023, 2, 29, 0, 0).is_err());
    assert!(CivilDateTime::new(2024, 1, 1, 24, 0).is_err());
    assert!(CivilDateTime::new(2024, 1, 1, 0, 60).is_err());
    assert!(CivilDateTime::new(2024, 13, 1, 0, 0).is_err());
}

#[test]
fn chart_1990_male() {
    let birth = CivilDateTime::new(1990, 1, 1, 12, 0).unwrap();
    let chart = Chart::new(birth, Gender::Male).unwrap();

    let tally = chart.element_tally();
    let expected = [2.5, 5.5, 3.0, 2.0, 0.5];
    for (e, want) in ALL_ELEMENTS.iter().zip(expected) {
        assert!((tally.get(*e) - want).abs() < 1e-9, "{}", e.english_name());
    }
    assert_eq!(tally.strongest(), Element::Fire);

    let gods = chart.ten_gods();
    assert_eq!(
        (gods.year, gods.month, gods.hour),
        (TenGod::EatingGod, TenGod::Companion, TenGod::DirectResource)
    );

    let strength = chart.strength();
    assert!((strength.score - 8.8).abs() < 1e-9);
    assert_eq!(strength.level, StrengthLevel::VeryStrong);

    let luck: Vec<String> = chart
        .luck_pillars(&ChartConfig::default())
        .unwrap()
        .iter()
        .map(|l| l.pillar.to_string())
        .collect();
    assert_eq!(luck, ["乙丑", "甲子", "癸亥", "壬戌", "辛酉", "庚申", "己未", "戊午"]);
}

#[test]
fn every_branch_has_one_to_three_hidden_stems() {
    for b in ALL_BRANCHES {
        let n = hidden_stems(b).len();
        assert!((1..=3).contains(&n), "{} has {n}", b.name());
    }
}
