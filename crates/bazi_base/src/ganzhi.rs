//! Heavenly stems (天干) and earthly branches (地支).
//!
//! Ten stems and twelve branches, each a closed enumeration with a fixed
//! 0-based position. Element and polarity attributes live in
//! [`crate::element`].

/// The 10 heavenly stems starting from Jia (甲).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Stem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

/// All 10 stems in cycle order (0 = Jia, 9 = Gui).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Jia,
    Stem::Yi,
    Stem::Bing,
    Stem::Ding,
    Stem::Wu,
    Stem::Ji,
    Stem::Geng,
    Stem::Xin,
    Stem::Ren,
    Stem::Gui,
];

impl Stem {
    /// Chinese character of the stem.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Jia => "甲",
            Self::Yi => "乙",
            Self::Bing => "丙",
            Self::Ding => "丁",
            Self::Wu => "戊",
            Self::Ji => "己",
            Self::Geng => "庚",
            Self::Xin => "辛",
            Self::Ren => "壬",
            Self::Gui => "癸",
        }
    }

    /// Pinyin name of the stem.
    pub const fn pinyin(self) -> &'static str {
        match self {
            Self::Jia => "Jia",
            Self::Yi => "Yi",
            Self::Bing => "Bing",
            Self::Ding => "Ding",
            Self::Wu => "Wu",
            Self::Ji => "Ji",
            Self::Geng => "Geng",
            Self::Xin => "Xin",
            Self::Ren => "Ren",
            Self::Gui => "Gui",
        }
    }

    /// 0-based index (Jia=0 .. Gui=9).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Stem at `index mod 10`; negative offsets wrap backwards.
    pub const fn from_cycle(index: i64) -> Self {
        ALL_STEMS[index.rem_euclid(10) as usize]
    }

    /// Look up a stem by its Chinese character.
    pub fn from_char(c: char) -> Option<Self> {
        ALL_STEMS.into_iter().find(|s| s.name().starts_with(c))
    }

    /// The stem `steps` positions later in the cycle.
    pub const fn offset(self, steps: i64) -> Self {
        Self::from_cycle(self.index() as i64 + steps)
    }
}

/// The 12 earthly branches starting from Zi (子).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Branch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All 12 branches in cycle order (0 = Zi, 11 = Hai).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Zi,
    Branch::Chou,
    Branch::Yin,
    Branch::Mao,
    Branch::Chen,
    Branch::Si,
    Branch::Wu,
    Branch::Wei,
    Branch::Shen,
    Branch::You,
    Branch::Xu,
    Branch::Hai,
];

impl Branch {
    /// Chinese character of the branch.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Zi => "子",
            Self::Chou => "丑",
            Self::Yin => "寅",
            Self::Mao => "卯",
            Self::Chen => "辰",
            Self::Si => "巳",
            Self::Wu => "午",
            Self::Wei => "未",
            Self::Shen => "申",
            Self::You => "酉",
            Self::Xu => "戌",
            Self::Hai => "亥",
        }
    }

    /// Pinyin name of the branch.
    pub const fn pinyin(self) -> &'static str {
        match self {
            Self::Zi => "Zi",
            Self::Chou => "Chou",
            Self::Yin => "Yin",
            Self::Mao => "Mao",
            Self::Chen => "Chen",
            Self::Si => "Si",
            Self::Wu => "Wu",
            Self::Wei => "Wei",
            Self::Shen => "Shen",
            Self::You => "You",
            Self::Xu => "Xu",
            Self::Hai => "Hai",
        }
    }

    /// 0-based index (Zi=0 .. Hai=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Branch at `index mod 12`; negative offsets wrap backwards.
    pub const fn from_cycle(index: i64) -> Self {
        ALL_BRANCHES[index.rem_euclid(12) as usize]
    }

    /// Look up a branch by its Chinese character.
    pub fn from_char(c: char) -> Option<Self> {
        ALL_BRANCHES.into_iter().find(|b| b.name().starts_with(c))
    }

    /// The branch `steps` positions later in the cycle.
    pub const fn offset(self, steps: i64) -> Self {
        Self::from_cycle(self.index() as i64 + steps)
    }

    /// Zodiac animal (生肖) of the branch.
    pub const fn zodiac(self) -> Zodiac {
        ALL_ZODIACS[self.index() as usize]
    }
}

/// The 12 zodiac animals, aligned with the branches (Rat = Zi).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Zodiac {
    Rat,
    Ox,
    Tiger,
    Rabbit,
    Dragon,
    Snake,
    Horse,
    Goat,
    Monkey,
    Rooster,
    Dog,
    Pig,
}

const ALL_ZODIACS: [Zodiac; 12] = [
    Zodiac::Rat,
    Zodiac::Ox,
    Zodiac::Tiger,
    Zodiac::Rabbit,
    Zodiac::Dragon,
    Zodiac::Snake,
    Zodiac::Horse,
    Zodiac::Goat,
    Zodiac::Monkey,
    Zodiac::Rooster,
    Zodiac::Dog,
    Zodiac::Pig,
];

impl Zodiac {
    /// Chinese character of the animal.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rat => "鼠",
            Self::Ox => "牛",
            Self::Tiger => "虎",
            Self::Rabbit => "兔",
            Self::Dragon => "龙",
            Self::Snake => "蛇",
            Self::Horse => "马",
            Self::Goat => "羊",
            Self::Monkey => "猴",
            Self::Rooster => "鸡",
            Self::Dog => "狗",
            Self::Pig => "猪",
        }
    }

    /// English name of the animal.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Rat => "Rat",
            Self::Ox => "Ox",
            Self::Tiger => "Tiger",
            Self::Rabbit => "Rabbit",
            Self::Dragon => "Dragon",
            Self::Snake => "Snake",
            Self::Horse => "Horse",
            Self::Goat => "Goat",
            Self::Monkey => "Monkey",
            Self::Rooster => "Rooster",
            Self::Dog => "Dog",
            Self::Pig => "Pig",
        }
    }
}

/// Either a stem or a branch; the alphabet accepted by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Stem(Stem),
    Branch(Branch),
}

impl Symbol {
    /// Resolve a Chinese character to a stem or branch.
    pub fn from_char(c: char) -> Option<Self> {
        Stem::from_char(c)
            .map(Self::Stem)
            .or_else(|| Branch::from_char(c).map(Self::Branch))
    }

    /// Chinese character of the symbol.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Stem(s) => s.name(),
            Self::Branch(b) => b.name(),
        }
    }
}

impl From<Stem> for Symbol {
    fn from(s: Stem) -> Self {
        Self::Stem(s)
    }
}

impl From<Branch> for Symbol {
    fn from(b: Branch) -> Self {
        Self::Branch(b)
    }
}
