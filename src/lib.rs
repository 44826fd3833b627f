// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Interval construction and identification over the diatonic note system.
//!
//! ```
//! use intervals::{construct_str, identify_str};
//!
//! assert_eq!(construct_str("P5", "Ab", Some("asc")).unwrap(), "Eb");
//! assert_eq!(identify_str("Fb", "Gbb", None).unwrap(), "m2");
//! ```

pub mod config;
pub mod error;
pub mod music;

pub use error::{IntervalError, Result};
pub use music::{
    construct, construct_from_args, construct_str, identify, identify_from_args, identify_str,
    Direction, Interval, Letter, Note,
};
