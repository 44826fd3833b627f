// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Interval table and traversal direction.
//!
//! The table covers the simple intervals from a minor second to an
//! octave. Each entry pairs a diatonic degree (counting both ends) with
//! a semitone count.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{IntervalError, Result};

/// Named simple intervals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Interval {
    #[serde(rename = "m2")]
    MinorSecond,
    #[serde(rename = "M2")]
    MajorSecond,
    #[serde(rename = "m3")]
    MinorThird,
    #[serde(rename = "M3")]
    MajorThird,
    #[serde(rename = "P4")]
    PerfectFourth,
    #[serde(rename = "P5")]
    PerfectFifth,
    #[serde(rename = "m6")]
    MinorSixth,
    #[serde(rename = "M6")]
    MajorSixth,
    #[serde(rename = "m7")]
    MinorSeventh,
    #[serde(rename = "M7")]
    MajorSeventh,
    #[serde(rename = "P8")]
    Octave,
}

impl Interval {
    /// All intervals, smallest first
    pub const ALL: [Interval; 11] = [
        Interval::MinorSecond,
        Interval::MajorSecond,
        Interval::MinorThird,
        Interval::MajorThird,
        Interval::PerfectFourth,
        Interval::PerfectFifth,
        Interval::MinorSixth,
        Interval::MajorSixth,
        Interval::MinorSeventh,
        Interval::MajorSeventh,
        Interval::Octave,
    ];

    /// Short name (e.g., "m2", "P5")
    pub fn name(self) -> &'static str {
        match self {
            Interval::MinorSecond => "m2",
            Interval::MajorSecond => "M2",
            Interval::MinorThird => "m3",
            Interval::MajorThird => "M3",
            Interval::PerfectFourth => "P4",
            Interval::PerfectFifth => "P5",
            Interval::MinorSixth => "m6",
            Interval::MajorSixth => "M6",
            Interval::MinorSeventh => "m7",
            Interval::MajorSeventh => "M7",
            Interval::Octave => "P8",
        }
    }

    /// Human-readable name
    pub fn long_name(self) -> &'static str {
        match self {
            Interval::MinorSecond => "Minor Second",
            Interval::MajorSecond => "Major Second",
            Interval::MinorThird => "Minor Third",
            Interval::MajorThird => "Major Third",
            Interval::PerfectFourth => "Perfect Fourth",
            Interval::PerfectFifth => "Perfect Fifth",
            Interval::MinorSixth => "Minor Sixth",
            Interval::MajorSixth => "Major Sixth",
            Interval::MinorSeventh => "Minor Seventh",
            Interval::MajorSeventh => "Major Seventh",
            Interval::Octave => "Perfect Octave",
        }
    }

    /// Diatonic degree, 2 (second) through 8 (octave)
    pub fn degree(self) -> u8 {
        match self {
            Interval::MinorSecond | Interval::MajorSecond => 2,
            Interval::MinorThird | Interval::MajorThird => 3,
            Interval::PerfectFourth => 4,
            Interval::PerfectFifth => 5,
            Interval::MinorSixth | Interval::MajorSixth => 6,
            Interval::MinorSeventh | Interval::MajorSeventh => 7,
            Interval::Octave => 8,
        }
    }

    pub fn semitones(self) -> u8 {
        match self {
            Interval::MinorSecond => 1,
            Interval::MajorSecond => 2,
            Interval::MinorThird => 3,
            Interval::MajorThird => 4,
            Interval::PerfectFourth => 5,
            Interval::PerfectFifth => 7,
            Interval::MinorSixth => 8,
            Interval::MajorSixth => 9,
            Interval::MinorSeventh => 10,
            Interval::MajorSeventh => 11,
            Interval::Octave => 12,
        }
    }

    /// Look up an interval by short name
    pub fn from_name(name: &str) -> Result<Self> {
        Interval::ALL
            .iter()
            .copied()
            .find(|i| i.name() == name)
            .ok_or_else(|| IntervalError::UnknownInterval(name.to_string()))
    }

    /// Exact-match lookup by (degree, semitones); no enharmonic fallback
    pub fn from_degree_and_semitones(degree: u8, semitones: i32) -> Option<Self> {
        Interval::ALL
            .iter()
            .copied()
            .find(|i| i.degree() == degree && i32::from(i.semitones()) == semitones)
    }
}

impl FromStr for Interval {
    type Err = IntervalError;

    fn from_str(s: &str) -> Result<Self> {
        Interval::from_name(s)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Traversal direction through the note cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "dsc")]
    Descending,
}

impl Direction {
    pub const ASCENDING: &'static str = "asc";
    pub const DESCENDING: &'static str = "dsc";

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Ascending => Self::ASCENDING,
            Direction::Descending => Self::DESCENDING,
        }
    }

    /// Parse an optional direction, defaulting to ascending
    pub fn parse_optional(s: Option<&str>) -> Result<Self> {
        s.map_or(Ok(Direction::default()), str::parse)
    }

    pub fn reversed(self) -> Self {
        match self {
            Direction::Ascending => Direction::Descending,
            Direction::Descending => Direction::Ascending,
        }
    }
}

impl FromStr for Direction {
    type Err = IntervalError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            Self::ASCENDING => Ok(Direction::Ascending),
            Self::DESCENDING => Ok(Direction::Descending),
            _ => Err(IntervalError::InvalidDirection(s.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
