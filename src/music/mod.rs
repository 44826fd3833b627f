// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Music theory core: notes, intervals, and the arithmetic between them.
//!
//! This module provides the note and interval tables plus the two inverse
//! operations, interval construction and interval identification.

pub mod args;
pub mod calc;
pub mod interval;
pub mod note;

pub use args::{construct_from_args, identify_from_args};
pub use calc::{construct, construct_str, identify, identify_str};
pub use interval::{Direction, Interval};
pub use note::{Letter, Note};
