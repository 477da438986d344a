use serde::{Deserialize, Serialize};
use std::fmt;

/// 參與者 UID，允許重複（一人多張券）
pub type Identifier = i128;

/// 載入時被略過的行
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedLine {
    /// 1-based line number
    pub line_no: usize,
    pub content: String,
}

/// Identifiers in source order, after dropping blank and malformed lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParticipantSet {
    ids: Vec<Identifier>,
    skipped: Vec<SkippedLine>,
}

impl ParticipantSet {
    pub(crate) fn new(ids: Vec<Identifier>, skipped: Vec<SkippedLine>) -> Self {
        Self { ids, skipped }
    }

    pub fn ids(&self) -> &[Identifier] {
        &self.ids
    }

    pub fn skipped(&self) -> &[SkippedLine] {
        &self.skipped
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl From<Vec<Identifier>> for ParticipantSet {
    fn from(ids: Vec<Identifier>) -> Self {
        Self::new(ids, Vec::new())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawConfig {
    pub seed: i128,
    /// 一等獎人數
    pub a: usize,
    /// 二等獎結束索引，[a, b)
    pub b: usize,
    /// 三等獎結束索引，[b, c)；也是總中獎人數
    pub c: usize,
}

impl DrawConfig {
    pub fn new(seed: i128, a: usize, b: usize, c: usize) -> Self {
        Self { seed, a, b, c }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    First,
    Second,
    Third,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::First, Tier::Second, Tier::Third];

    pub fn label(&self) -> &'static str {
        match self {
            Tier::First => "first",
            Tier::Second => "second",
            Tier::Third => "third",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawResult {
    pub seed: i128,
    pub total_participants: usize,
    pub a: usize,
    pub b: usize,
    pub c: usize,
    pub tier1: Vec<Identifier>,
    pub tier2: Vec<Identifier>,
    pub tier3: Vec<Identifier>,
}

impl DrawResult {
    pub fn tier(&self, tier: Tier) -> &[Identifier] {
        match tier {
            Tier::First => &self.tier1,
            Tier::Second => &self.tier2,
            Tier::Third => &self.tier3,
        }
    }

    pub fn winner_count(&self) -> usize {
        self.tier1.len() + self.tier2.len() + self.tier3.len()
    }

    /// Winners in rank order, each tagged with its tier.
    pub fn ranked(&self) -> impl Iterator<Item = (Tier, Identifier)> + '_ {
        Tier::ALL
            .into_iter()
            .flat_map(move |tier| self.tier(tier).iter().map(move |uid| (tier, *uid)))
    }
}

/// What the pipeline hands to the publishing stage.
#[derive(Debug, Clone)]
pub struct DrawOutcome {
    pub result: DrawResult,
    pub skipped: Vec<SkippedLine>,
}
