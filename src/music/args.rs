// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Argument-list entry points.
//!
//! Callers that hold a loose argument list (e.g. from a command line or a
//! foreign binding) pass it here. The list is checked for shape before any
//! note or interval is parsed:
//!
//! * construction: `[interval, start, direction?]`
//! * identification: `[start, end, direction?]`

use super::calc::{construct, identify};
use super::interval::{Direction, Interval};
use super::note::Note;
use crate::error::{IntervalError, Result};

pub const MIN_ARGUMENTS: usize = 2;
pub const MAX_ARGUMENTS: usize = 3;

const DIRECTION_INDEX: usize = 2;

/// Check that the list exists, has 2 or 3 entries, and none are null
pub fn validate_args<'a>(args: Option<&[Option<&'a str>]>) -> Result<Vec<&'a str>> {
    let args = args.ok_or(IntervalError::MissingArguments)?;

    if !(MIN_ARGUMENTS..=MAX_ARGUMENTS).contains(&args.len()) {
        return Err(IntervalError::ArgumentCount { got: args.len() });
    }

    args.iter()
        .enumerate()
        .map(|(index, arg)| arg.ok_or(IntervalError::NullArgument { index }))
        .collect()
}

fn direction_arg(args: &[&str]) -> Result<Direction> {
    Direction::parse_optional(args.get(DIRECTION_INDEX).copied())
}

/// Construct a note from `[interval, start, direction?]`
pub fn construct_from_args(args: Option<&[Option<&str>]>) -> Result<String> {
    let args = validate_args(args)?;

    let start = Note::parse(args[1])?;
    let interval = Interval::from_name(args[0])?;
    let direction = direction_arg(&args)?;

    Ok(construct(interval, start, direction)?.to_string())
}

/// Identify an interval from `[start, end, direction?]`
pub fn identify_from_args(args: Option<&[Option<&str>]>) -> Result<String> {
    let args = validate_args(args)?;

    let start = Note::parse(args[0])?;
    let end = Note::parse(args[1])?;
    let direction = direction_arg(&args)?;

    identify(start, end, direction).map(|i| i.name().to_string())
}
