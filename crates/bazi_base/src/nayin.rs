//! Na Yin (纳音): the sound-element of each sexagenary pair.
//!
//! Consecutive pairs of the 60-cycle share one Na Yin, giving 30 entries.

use crate::element::Element;
use crate::sexagenary::Pillar;

/// One Na Yin entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Nayin {
    /// Chinese name, e.g. "海中金".
    pub name: &'static str,
    /// Element carried by the name's last character.
    pub element: Element,
}

const fn entry(name: &'static str, element: Element) -> Nayin {
    Nayin { name, element }
}

/// The 30 Na Yin in cycle order (甲子/乙丑 first).
pub const NAYIN_TABLE: [Nayin; 30] = [
    entry("海中金", Element::Metal),
    entry("炉中火", Element::Fire),
    entry("大林木", Element::Wood),
    entry("路旁土", Element::Earth),
    entry("剑锋金", Element::Metal),
    entry("山头火", Element::Fire),
    entry("涧下水", Element::Water),
    entry("城头土", Element::Earth),
    entry("白蜡金", Element::Metal),
    entry("杨柳木", Element::Wood),
    entry("泉中水", Element::Water),
    entry("屋上土", Element::Earth),
    entry("霹雳火", Element::Fire),
    entry("松柏木", Element::Wood),
    entry("长流水", Element::Water),
    entry("砂中金", Element::Metal),
    entry("山下火", Element::Fire),
    entry("平地木", Element::Wood),
    entry("壁上土", Element::Earth),
    entry("金箔金", Element::Metal),
    entry("覆灯火", Element::Fire),
    entry("天河水", Element::Water),
    entry("大驿土", Element::Earth),
    entry("钗钏金", Element::Metal),
    entry("桑柘木", Element::Wood),
    entry("大溪水", Element::Water),
    entry("沙中土", Element::Earth),
    entry("天上火", Element::Fire),
    entry("石榴木", Element::Wood),
    entry("大海水", Element::Water),
];

/// Na Yin of a pillar.
pub const fn nayin(pillar: Pillar) -> Nayin {
    NAYIN_TABLE[(pillar.index() / 2) as usize]
}
