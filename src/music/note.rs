// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Note model for diatonic spelling.
//!
//! A note is one of the seven natural letters plus a signed count of
//! accidentals. Letters form a fixed 7-step cycle with a fixed semitone
//! gap between each natural and the next.

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::interval::Direction;
use crate::error::{IntervalError, Result};

/// Number of natural letters in the cycle
pub const LETTER_COUNT: usize = 7;

/// Semitones from each natural to the next one up (C->D, D->E, ... B->C)
const GAPS: [u8; LETTER_COUNT] = [2, 2, 1, 2, 2, 2, 1];

pub const FLAT: char = 'b';
pub const SHARP: char = '#';

lazy_static! {
    static ref NOTE_SYNTAX: Regex = Regex::new(r"^[CDEFGAB](bb|##|b|#)?$").unwrap();
}

/// Natural note letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Letter {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Letter {
    /// All letters in cycle order
    pub const ALL: [Letter; LETTER_COUNT] = [
        Letter::C,
        Letter::D,
        Letter::E,
        Letter::F,
        Letter::G,
        Letter::A,
        Letter::B,
    ];

    /// Position in the cycle (C = 0)
    pub fn index(self) -> usize {
        match self {
            Letter::C => 0,
            Letter::D => 1,
            Letter::E => 2,
            Letter::F => 3,
            Letter::G => 4,
            Letter::A => 5,
            Letter::B => 6,
        }
    }

    /// Letter at a cycle position, wrapping in both directions
    pub fn from_index(index: i32) -> Self {
        Letter::ALL[index.rem_euclid(LETTER_COUNT as i32) as usize]
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'C' => Some(Letter::C),
            'D' => Some(Letter::D),
            'E' => Some(Letter::E),
            'F' => Some(Letter::F),
            'G' => Some(Letter::G),
            'A' => Some(Letter::A),
            'B' => Some(Letter::B),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Letter::C => 'C',
            Letter::D => 'D',
            Letter::E => 'E',
            Letter::F => 'F',
            Letter::G => 'G',
            Letter::A => 'A',
            Letter::B => 'B',
        }
    }

    /// Move forward through the cycle by `steps` letters
    pub fn offset(self, steps: i32) -> Self {
        Letter::from_index(self.index() as i32 + steps)
    }

    /// Semitones up to the next natural
    pub fn gap_to_next(self) -> u8 {
        GAPS[self.index()]
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Semitones between two naturals, walking the cycle in `direction`.
///
/// The walk always takes at least one step, so equal letters span a full
/// octave (12) rather than zero.
pub fn natural_span(from: Letter, to: Letter, direction: Direction) -> u8 {
    let mut current = from;
    let mut span = 0;
    loop {
        match direction {
            Direction::Ascending => {
                span += current.gap_to_next();
                current = current.offset(1);
            }
            Direction::Descending => {
                current = current.offset(-1);
                span += current.gap_to_next();
            }
        }
        if current == to {
            return span;
        }
    }
}

/// A spelled note: a natural letter plus accidentals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Note {
    letter: Letter,
    /// Signed pitch offset from the natural (sharps positive, flats negative)
    accidental: i8,
}

impl Note {
    pub fn new(letter: Letter, accidental: i8) -> Self {
        Self { letter, accidental }
    }

    pub fn natural(letter: Letter) -> Self {
        Self::new(letter, 0)
    }

    /// Parse a note such as "C", "Ab", "F##" or "Gbb"
    pub fn parse(s: &str) -> Result<Self> {
        check_syntax(s)?;

        let mut chars = s.chars();
        let first = chars
            .next()
            .ok_or_else(|| IntervalError::InvalidNoteSyntax(s.to_string()))?;
        let letter = Letter::from_char(first).ok_or(IntervalError::UnknownNoteLetter(first))?;

        let accidental = chars
            .map(|c| match c {
                SHARP => 1,
                FLAT => -1,
                _ => 0,
            })
            .sum();

        Ok(Self::new(letter, accidental))
    }

    pub fn letter(&self) -> Letter {
        self.letter
    }

    pub fn accidental(&self) -> i8 {
        self.accidental
    }

    /// Accidental bookkeeping value: +1 per flat, -1 per sharp
    pub fn corrective(&self) -> i32 {
        -i32::from(self.accidental)
    }
}

impl FromStr for Note {
    type Err = IntervalError;

    fn from_str(s: &str) -> Result<Self> {
        Note::parse(s)
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter)?;
        let symbol = if self.accidental < 0 { FLAT } else { SHARP };
        for _ in 0..self.accidental.unsigned_abs() {
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}

/// Check a note string against the letter + accidental grammar
pub fn check_syntax(note: &str) -> Result<()> {
    if NOTE_SYNTAX.is_match(note) {
        Ok(())
    } else {
        Err(IntervalError::InvalidNoteSyntax(note.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_cycle() {
        assert_eq!(Letter::C.offset(1), Letter::D);
        assert_eq!(Letter::B.offset(1), Letter::C);
        assert_eq!(Letter::C.offset(-1), Letter::B);
        assert_eq!(Letter::A.offset(7), Letter::A);
        assert_eq!(Letter::from_index(-8), Letter::B);
    }

    #[test]
    fn test_gaps_sum_to_octave() {
        let total: u8 = Letter::ALL.iter().map(|l| l.gap_to_next()).sum();
        assert_eq!(total, 12);
        assert_eq!(Letter::E.gap_to_next(), 1);
        assert_eq!(Letter::B.gap_to_next(), 1);
    }

    #[test]
    fn test_check_syntax() {
        for ok in ["C", "Ab", "A#", "Gbb", "F##", "B"] {
            assert!(check_syntax(ok).is_ok(), "{} should pass", ok);
        }
        for bad in ["", "S", "Ab#", "E#b", "Cbbb", "C###", "c", "Et", "Ab ", " C", "H"] {
            assert_eq!(
                check_syntax(bad),
                Err(IntervalError::InvalidNoteSyntax(bad.to_string())),
                "{:?} should fail",
                bad
            );
        }
    }

    #[test]
    fn test_parse_note() {
        assert_eq!(Note::parse("C").unwrap(), Note::natural(Letter::C));
        assert_eq!(Note::parse("Ab").unwrap(), Note::new(Letter::A, -1));
        assert_eq!(Note::parse("F##").unwrap(), Note::new(Letter::F, 2));
        assert_eq!("Gbb".parse::<Note>().unwrap(), Note::new(Letter::G, -2));
        assert!(Note::parse("Ab#").is_err());
    }

    #[test]
    fn test_corrective() {
        assert_eq!(Note::parse("Ab").unwrap().corrective(), 1);
        assert_eq!(Note::parse("Gbb").unwrap().corrective(), 2);
        assert_eq!(Note::parse("A#").unwrap().corrective(), -1);
        assert_eq!(Note::parse("E").unwrap().corrective(), 0);
        assert_eq!(Note::new(Letter::C, i8::MIN).corrective(), 128);
        assert_eq!(Note::new(Letter::C, i8::MAX).corrective(), -127);
    }

    #[test]
    fn test_display() {
        assert_eq!(Note::new(Letter::E, 0).to_string(), "E");
        assert_eq!(Note::new(Letter::E, -1).to_string(), "Eb");
        assert_eq!(Note::new(Letter::C, 2).to_string(), "C##");
        assert_eq!(Note::new(Letter::G, -3).to_string(), "Gbbb");
    }

    #[test]
    fn test_natural_span_ascending() {
        assert_eq!(natural_span(Letter::C, Letter::D, Direction::Ascending), 2);
        assert_eq!(natural_span(Letter::E, Letter::F, Direction::Ascending), 1);
        assert_eq!(natural_span(Letter::A, Letter::E, Direction::Ascending), 7);
        assert_eq!(natural_span(Letter::B, Letter::C, Direction::Ascending), 1);
        assert_eq!(natural_span(Letter::E, Letter::E, Direction::Ascending), 12);
    }

    #[test]
    fn test_natural_span_descending() {
        assert_eq!(natural_span(Letter::A, Letter::D, Direction::Descending), 7);
        assert_eq!(natural_span(Letter::F, Letter::E, Direction::Descending), 1);
        // Wraps below C without leaving the cycle
        assert_eq!(natural_span(Letter::C, Letter::B, Direction::Descending), 1);
        assert_eq!(natural_span(Letter::C, Letter::A, Direction::Descending), 3);
        assert_eq!(natural_span(Letter::C, Letter::C, Direction::Descending), 12);
    }

    #[test]
    fn test_spans_complement() {
        for &a in &Letter::ALL {
            for &b in &Letter::ALL {
                if a == b {
                    continue;
                }
                let up = natural_span(a, b, Direction::Ascending);
                let down = natural_span(b, a, Direction::Descending);
                assert_eq!(up, down);
                assert_eq!(up + natural_span(a, b, Direction::Descending), 12);
            }
        }
    }
}
