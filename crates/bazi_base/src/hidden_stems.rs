//! Hidden stems (地支藏干) of each branch.
//!
//! Each branch carries 1-3 stems in a fixed order. Hidden stems count at
//! half weight toward element tallies, against 1.0 for a visible stem or
//! branch.

use crate::ganzhi::{Branch, Stem};

/// Tally weight of one hidden stem.
pub const HIDDEN_STEM_WEIGHT: f64 = 0.5;

/// A stem hidden inside a branch, with its tally weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HiddenStem {
    pub stem: Stem,
    pub weight: f64,
}

const fn h(stem: Stem) -> HiddenStem {
    HiddenStem {
        stem,
        weight: HIDDEN_STEM_WEIGHT,
    }
}

const ZI: &[HiddenStem] = &[h(Stem::Gui)];
const CHOU: &[HiddenStem] = &[h(Stem::Ji), h(Stem::Gui), h(Stem::Xin)];
const YIN: &[HiddenStem] = &[h(Stem::Jia), h(Stem::Bing), h(Stem::Wu)];
const MAO: &[HiddenStem] = &[h(Stem::Yi)];
const CHEN: &[HiddenStem] = &[h(Stem::Wu), h(Stem::Yi), h(Stem::Gui)];
const SI: &[HiddenStem] = &[h(Stem::Bing), h(Stem::Geng), h(Stem::Wu)];
const WU: &[HiddenStem] = &[h(Stem::Ding), h(Stem::Ji)];
const WEI: &[HiddenStem] = &[h(Stem::Ji), h(Stem::Ding), h(Stem::Yi)];
const SHEN: &[HiddenStem] = &[h(Stem::Geng), h(Stem::Ren), h(Stem::Wu)];
const YOU: &[HiddenStem] = &[h(Stem::Xin)];
const XU: &[HiddenStem] = &[h(Stem::Wu), h(Stem::Xin), h(Stem::Ding)];
const HAI: &[HiddenStem] = &[h(Stem::Ren), h(Stem::Jia)];

/// Hidden stems of `branch`, in traditional order.
pub const fn hidden_stems(branch: Branch) -> &'static [HiddenStem] {
    match branch {
        Branch::Zi => ZI,
        Branch::Chou => CHOU,
        Branch::Yin => YIN,
        Branch::Mao => MAO,
        Branch::Chen => CHEN,
        Branch::Si => SI,
        Branch::Wu => WU,
        Branch::Wei => WEI,
        Branch::Shen => SHEN,
        Branch::You => YOU,
        Branch::Xu => XU,
        Branch::Hai => HAI,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ganzhi::ALL_BRANCHES;

    #[test]
    fn one_to_three_each() {
        for b in ALL_BRANCHES {
            let n = hidden_stems(b).len();
            assert!((1..=3).contains(&n), "{b:?} has {n}");
        }
    }

    #[test]
    fn all_half_weight() {
        for b in ALL_BRANCHES {
            for hs in hidden_stems(b) {
                assert_eq!(hs.weight, HIDDEN_STEM_WEIGHT);
            }
        }
    }

    #[test]
    fn single_stem_branches_match_own_element() {
        // 子卯酉 hold only their own main qi.
        for b in [Branch::Zi, Branch::Mao, Branch::You] {
            let hs = hidden_stems(b);
            assert_eq!(hs.len(), 1);
            assert_eq!(hs[0].stem.element(), b.element());
        }
    }

    #[test]
    fn yin_order() {
        let stems: Vec<Stem> = hidden_stems(Branch::Yin).iter().map(|h| h.stem).collect();
        assert_eq!(stems, [Stem::Jia, Stem::Bing, Stem::Wu]);
    }
}
