use std::fmt;

/// 小题自评分数，只允许固定的几个档位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Score {
    Zero,
    Two,
    Five,
    Eight,
    Ten,
}

impl Score {
    /// 选项顺序即提示中的显示顺序
    pub const ALL: [Score; 5] = [Score::Zero, Score::Two, Score::Five, Score::Eight, Score::Ten];

    /// 满分
    pub const MAX: Score = Score::Ten;

    /// 最低分
    pub const MIN: Score = Score::Zero;

    pub fn value(self) -> u8 {
        match self {
            Score::Zero => 0,
            Score::Two => 2,
            Score::Five => 5,
            Score::Eight => 8,
            Score::Ten => 10,
        }
    }

    /// 分数严格介于最低分和满分之间时需要填写说明
    pub fn requires_comment(self) -> bool {
        self != Self::MIN && self != Self::MAX
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}
