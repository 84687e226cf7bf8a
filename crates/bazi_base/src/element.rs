//! Five elements (五行), polarity (阴阳) and their relation cycles.
//!
//! Every stem and branch has a fixed element and polarity; both are plain
//! matches on the enum, never stored alongside it.
//!
//! Generation: Wood → Fire → Earth → Metal → Water → Wood.
//! Destruction: Wood → Earth → Water → Fire → Metal → Wood.

use crate::ganzhi::{Branch, Stem, Symbol};

/// The five elements in generation-cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All 5 elements in generation order (0 = Wood).
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
];

impl Element {
    /// Chinese character of the element.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "木",
            Self::Fire => "火",
            Self::Earth => "土",
            Self::Metal => "金",
            Self::Water => "水",
        }
    }

    /// English name of the element.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Wood => "Wood",
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Metal => "Metal",
            Self::Water => "Water",
        }
    }

    /// 0-based position in the generation cycle.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// The element this one generates (生).
    pub const fn generates(self) -> Element {
        ALL_ELEMENTS[(self.index() as usize + 1) % 5]
    }

    /// The element this one destroys (克).
    pub const fn destroys(self) -> Element {
        ALL_ELEMENTS[(self.index() as usize + 2) % 5]
    }
}

/// Yang (阳) or Yin (阴).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarity {
    Yang,
    Yin,
}

impl Polarity {
    /// Chinese character of the polarity.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Yang => "阳",
            Self::Yin => "阴",
        }
    }

    /// English name of the polarity.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Yang => "Yang",
            Self::Yin => "Yin",
        }
    }

    const fn from_parity(index: u8) -> Self {
        if index % 2 == 0 { Self::Yang } else { Self::Yin }
    }
}

/// How element `b` stands relative to element `a`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementRelation {
    /// Same element (同).
    Same,
    /// `a` generates `b` (我生).
    Generates,
    /// `b` generates `a` (生我).
    GeneratedBy,
    /// `a` destroys `b` (我克).
    Destroys,
    /// `b` destroys `a` (克我).
    DestroyedBy,
}

/// All 5 relation kinds.
pub const ALL_RELATIONS: [ElementRelation; 5] = [
    ElementRelation::Same,
    ElementRelation::Generates,
    ElementRelation::GeneratedBy,
    ElementRelation::Destroys,
    ElementRelation::DestroyedBy,
];

// Indexed by (b - a) mod 5 along the generation cycle.
const RELATION_BY_DISTANCE: [ElementRelation; 5] = [
    ElementRelation::Same,
    ElementRelation::Generates,
    ElementRelation::Destroys,
    ElementRelation::DestroyedBy,
    ElementRelation::GeneratedBy,
];

/// Relation of `b` to `a` on the generation/destruction cycles.
pub const fn relation(a: Element, b: Element) -> ElementRelation {
    let distance = (b.index() + 5 - a.index()) % 5;
    RELATION_BY_DISTANCE[distance as usize]
}

impl Stem {
    /// Element of the stem: 甲乙 Wood, 丙丁 Fire, 戊己 Earth, 庚辛 Metal, 壬癸 Water.
    pub const fn element(self) -> Element {
        match self {
            Self::Jia | Self::Yi => Element::Wood,
            Self::Bing | Self::Ding => Element::Fire,
            Self::Wu | Self::Ji => Element::Earth,
            Self::Geng | Self::Xin => Element::Metal,
            Self::Ren | Self::Gui => Element::Water,
        }
    }

    /// Even indices (甲丙戊庚壬) are yang, odd indices yin.
    pub const fn polarity(self) -> Polarity {
        Polarity::from_parity(self.index())
    }
}

impl Branch {
    /// Element of the branch.
    pub const fn element(self) -> Element {
        match self {
            Self::Yin | Self::Mao => Element::Wood,
            Self::Si | Self::Wu => Element::Fire,
            Self::Chou | Self::Chen | Self::Wei | Self::Xu => Element::Earth,
            Self::Shen | Self::You => Element::Metal,
            Self::Hai | Self::Zi => Element::Water,
        }
    }

    /// 子寅辰午申戌 are yang, the others yin.
    pub const fn polarity(self) -> Polarity {
        Polarity::from_parity(self.index())
    }
}

/// Element of a stem or branch.
pub const fn element_of(symbol: Symbol) -> Element {
    match symbol {
        Symbol::Stem(s) => s.element(),
        Symbol::Branch(b) => b.element(),
    }
}

/// Polarity of a stem or branch.
pub const fn polarity_of(symbol: Symbol) -> Polarity {
    match symbol {
        Symbol::Stem(s) => s.polarity(),
        Symbol::Branch(b) => b.polarity(),
    }
}
