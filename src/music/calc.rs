// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Interval construction and identification.
//!
//! Both operations track letters and semitones independently: the
//! interval degree fixes the end letter, and the semitone count fixes
//! how many accidentals that letter needs.

use tracing::debug;

use super::interval::{Direction, Interval};
use super::note::{natural_span, Letter, Note, LETTER_COUNT};
use crate::error::{IntervalError, Result};

const CYCLE: i32 = LETTER_COUNT as i32;

/// Find the note lying `interval` away from `start` in `direction`.
///
/// The result may need more than two accidentals (e.g. a minor second
/// above Fbb is Gbbb); it is spelled as-is. Fails with `AccidentalOverflow`
/// once the count leaves the `i8` range.
pub fn construct(interval: Interval, start: Note, direction: Direction) -> Result<Note> {
    let degree = i32::from(interval.degree());
    let steps = match direction {
        Direction::Ascending => degree - 1,
        Direction::Descending => CYCLE - degree + 1,
    } % CYCLE;
    let end_letter = start.letter().offset(steps);

    let span = i32::from(natural_span(start.letter(), end_letter, direction));
    let target = i32::from(interval.semitones());
    let start_accidental = i32::from(start.accidental());

    let end_accidental = match direction {
        Direction::Ascending => target - span + start_accidental,
        Direction::Descending => span + start_accidental - target,
    };

    let accidental = i8::try_from(end_accidental).map_err(|_| IntervalError::AccidentalOverflow {
        letter: end_letter.as_char(),
        accidentals: end_accidental,
    })?;

    let end = Note::new(end_letter, accidental);
    debug!(%interval, %start, %direction, %end, "constructed note");
    Ok(end)
}

/// Diatonic degree from `start` to `end`, counting both letters (2..=8)
pub fn degree_between(start: Letter, end: Letter, direction: Direction) -> u8 {
    let (from, to) = (start.index() as i32, end.index() as i32);
    let steps = match direction {
        Direction::Ascending => to - from,
        Direction::Descending => from - to,
    }
    .rem_euclid(CYCLE);

    if steps == 0 {
        8
    } else {
        steps as u8 + 1
    }
}

/// Semitones from `start` to `end` walking in `direction`
pub fn semitones_between(start: Note, end: Note, direction: Direction) -> i32 {
    let span = i32::from(natural_span(start.letter(), end.letter(), direction));
    let (from, to) = (i32::from(start.accidental()), i32::from(end.accidental()));
    match direction {
        Direction::Ascending => span + to - from,
        Direction::Descending => span + from - to,
    }
}

/// Name the interval from `start` to `end` in `direction`.
///
/// Only exact (degree, semitones) matches are accepted, so pairs such as
/// an augmented second fail with `IntervalNotFound`.
pub fn identify(start: Note, end: Note, direction: Direction) -> Result<Interval> {
    let degree = degree_between(start.letter(), end.letter(), direction);
    let semitones = semitones_between(start, end, direction);

    let interval = Interval::from_degree_and_semitones(degree, semitones)
        .ok_or(IntervalError::IntervalNotFound { degree, semitones })?;

    debug!(%start, %end, %direction, %interval, "identified interval");
    Ok(interval)
}

/// String form of [`construct`]: "P5", "Ab", Some("asc") -> "Eb"
pub fn construct_str(interval: &str, start: &str, direction: Option<&str>) -> Result<String> {
    let start = Note::parse(start)?;
    let interval = Interval::from_name(interval)?;
    let direction = Direction::parse_optional(direction)?;
    Ok(construct(interval, start, direction)?.to_string())
}

/// String form of [`identify`]: "Ab", "Eb", Some("asc") -> "P5"
pub fn identify_str(start: &str, end: &str, direction: Option<&str>) -> Result<String> {
    let start = Note::parse(start)?;
    let end = Note::parse(end)?;
    let direction = Direction::parse_optional(direction)?;
    identify(start, end, direction).map(|i| i.name().to_string())
}
