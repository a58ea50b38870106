use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;

/// Weather regime. Every edge carries one travel time per condition.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, ValueEnum)]
pub enum Condition {
    Normal,
    Rain,
    Snow,
    Storm,
}

impl Condition {
    pub const ALL: [Condition; 4] = [
        Condition::Normal,
        Condition::Rain,
        Condition::Snow,
        Condition::Storm,
    ];

    /// Slot of this condition in per-condition arrays.
    pub fn index(self) -> usize {
        match self {
            Condition::Normal => 0,
            Condition::Rain => 1,
            Condition::Snow => 2,
            Condition::Storm => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Condition::Normal => "normal",
            Condition::Rain => "rain",
            Condition::Snow => "snow",
            Condition::Storm => "storm",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Condition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Condition::ALL
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown condition {:?}, expected one of normal, rain, snow, storm", s))
    }
}

/// Travel time in whole hours for each condition of one directed edge.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct ConditionWeights {
    pub normal: u32,
    pub rain: u32,
    pub snow: u32,
    pub storm: u32,
}

impl ConditionWeights {
    pub fn new(normal: u32, rain: u32, snow: u32, storm: u32) -> Self {
        Self { normal, rain, snow, storm }
    }

    pub fn get(&self, condition: Condition) -> u32 {
        match condition {
            Condition::Normal => self.normal,
            Condition::Rain => self.rain,
            Condition::Snow => self.snow,
            Condition::Storm => self.storm,
        }
    }
}
