//! Ten Gods (十神): relation of any stem to the Day Master.
//!
//! The element relation (5 kinds) combined with polarity agreement
//! (same/different) selects exactly one of ten categories. Every
//! combination is covered by the match below. Within each relation the
//! 正 (direct) category goes with same polarity and the 偏/七杀/食神
//! category with different polarity; only 比肩/劫财 run the other way.

use crate::element::{Element, ElementRelation, Polarity, relation};
use crate::ganzhi::Stem;

/// The ten relation categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TenGod {
    /// 比肩: same element, same polarity.
    Companion,
    /// 劫财: same element, different polarity.
    RobWealth,
    /// 食神: Day Master generates it, different polarity.
    EatingGod,
    /// 伤官: Day Master generates it, same polarity.
    HurtingOfficer,
    /// 偏财: Day Master destroys it, different polarity.
    IndirectWealth,
    /// 正财: Day Master destroys it, same polarity.
    DirectWealth,
    /// 七杀: it destroys the Day Master, different polarity.
    SevenKillings,
    /// 正官: it destroys the Day Master, same polarity.
    DirectOfficer,
    /// 偏印: it generates the Day Master, different polarity.
    IndirectResource,
    /// 正印: it generates the Day Master, same polarity.
    DirectResource,
}

/// All 10 categories.
pub const ALL_TEN_GODS: [TenGod; 10] = [
    TenGod::Companion,
    TenGod::RobWealth,
    TenGod::EatingGod,
    TenGod::HurtingOfficer,
    TenGod::IndirectWealth,
    TenGod::DirectWealth,
    TenGod::SevenKillings,
    TenGod::DirectOfficer,
    TenGod::IndirectResource,
    TenGod::DirectResource,
];

impl TenGod {
    /// Chinese name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Companion => "比肩",
            Self::RobWealth => "劫财",
            Self::EatingGod => "食神",
            Self::HurtingOfficer => "伤官",
            Self::IndirectWealth => "偏财",
            Self::DirectWealth => "正财",
            Self::SevenKillings => "七杀",
            Self::DirectOfficer => "正官",
            Self::IndirectResource => "偏印",
            Self::DirectResource => "正印",
        }
    }

    /// English name.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Companion => "Companion",
            Self::RobWealth => "Rob Wealth",
            Self::EatingGod => "Eating God",
            Self::HurtingOfficer => "Hurting Officer",
            Self::IndirectWealth => "Indirect Wealth",
            Self::DirectWealth => "Direct Wealth",
            Self::SevenKillings => "Seven Killings",
            Self::DirectOfficer => "Direct Officer",
            Self::IndirectResource => "Indirect Resource",
            Self::DirectResource => "Direct Resource",
        }
    }
}

/// Ten-god category from element relation and polarity agreement.
pub const fn ten_god_from_relation(rel: ElementRelation, same_polarity: bool) -> TenGod {
    use ElementRelation::*;
    match (rel, same_polarity) {
        (Same, true) => TenGod::Companion,
        (Same, false) => TenGod::RobWealth,
        (Generates, true) => TenGod::HurtingOfficer,
        (Generates, false) => TenGod::EatingGod,
        (Destroys, true) => TenGod::DirectWealth,
        (Destroys, false) => TenGod::IndirectWealth,
        (DestroyedBy, true) => TenGod::DirectOfficer,
        (DestroyedBy, false) => TenGod::SevenKillings,
        (GeneratedBy, true) => TenGod::DirectResource,
        (GeneratedBy, false) => TenGod::IndirectResource,
    }
}

/// Ten-god of an (element, polarity) relative to the Day Master's.
pub const fn ten_god(
    day_element: Element,
    day_polarity: Polarity,
    other_element: Element,
    other_polarity: Polarity,
) -> TenGod {
    let same_polarity = matches!(
        (day_polarity, other_polarity),
        (Polarity::Yang, Polarity::Yang) | (Polarity::Yin, Polarity::Yin)
    );
    ten_god_from_relation(relation(day_element, other_element), same_polarity)
}

/// Ten-god of `other` relative to the day stem `day`.
pub const fn ten_god_for_stems(day: Stem, other: Stem) -> TenGod {
    ten_god(day.element(), day.polarity(), other.element(), other.polarity())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::ALL_RELATIONS;
    use crate::ganzhi::ALL_STEMS;
    use std::collections::HashSet;

    #[test]
    fn table_is_a_bijection() {
        let mut seen = HashSet::new();
        for rel in ALL_RELATIONS {
            for same in [true, false] {
                assert!(seen.insert(ten_god_from_relation(rel, same)));
            }
        }
        assert_eq!(seen.len(), ALL_TEN_GODS.len());
    }

    #[test]
    fn self_is_companion() {
        for s in ALL_STEMS {
            assert_eq!(ten_god_for_stems(s, s), TenGod::Companion);
        }
    }

    #[test]
    fn each_day_stem_sees_every_category_once() {
        for day in ALL_STEMS {
            let gods: HashSet<TenGod> = ALL_STEMS
                .iter()
                .map(|o| ten_god_for_stems(day, *o))
                .collect();
            assert_eq!(gods.len(), 10, "day stem {day:?}");
        }
    }

    #[test]
    fn bing_day_master() {
        // 丙 (yang fire)
        assert_eq!(ten_god_for_stems(Stem::Bing, Stem::Ding), TenGod::RobWealth);
        assert_eq!(ten_god_for_stems(Stem::Bing, Stem::Wu), TenGod::HurtingOfficer);
        assert_eq!(ten_god_for_stems(Stem::Bing, Stem::Ji), TenGod::EatingGod);
        assert_eq!(ten_god_for_stems(Stem::Bing, Stem::Geng), TenGod::DirectWealth);
        assert_eq!(ten_god_for_stems(Stem::Bing, Stem::Xin), TenGod::IndirectWealth);
        assert_eq!(ten_god_for_stems(Stem::Bing, Stem::Ren), TenGod::DirectOfficer);
        assert_eq!(ten_god_for_stems(Stem::Bing, Stem::Gui), TenGod::SevenKillings);
        assert_eq!(ten_god_for_stems(Stem::Bing, Stem::Jia), TenGod::DirectResource);
        assert_eq!(ten_god_for_stems(Stem::Bing, Stem::Yi), TenGod::IndirectResource);
    }

    #[test]
    fn relation_polarity_table() {
        use ElementRelation::*;
        let cases = [
            (Same, true, "比肩"),
            (Same, false, "劫财"),
            (GeneratedBy, true, "正印"),
            (GeneratedBy, false, "偏印"),
            (Generates, true, "伤官"),
            (Generates, false, "食神"),
            (Destroys, true, "正财"),
            (Destroys, false, "偏财"),
            (DestroyedBy, true, "正官"),
            (DestroyedBy, false, "七杀"),
        ];
        for (rel, same, name) in cases {
            assert_eq!(ten_god_from_relation(rel, same).name(), name, "{rel:?} {same}");
        }
    }
}
