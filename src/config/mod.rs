// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Exercise sheets for batch interval work.
//!
//! An exercise sheet is a YAML file listing construction and identification
//! tasks, each optionally paired with the expected answer:
//!
//! ```yaml
//! settings:
//!   name: "Fifths"
//!   direction: asc
//! exercises:
//!   - construct: { interval: P5, start: Ab }
//!     expect: Eb
//!   - identify: { start: Fb, end: Eb, direction: dsc }
//!     expect: m2
//! ```

pub mod report;

pub use report::{ExerciseOutcome, Report};

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error;
use crate::music::{construct_str, identify_str, Direction};

/// Root of an exercise sheet
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ExerciseFile {
    /// Sheet-wide settings
    #[serde(default)]
    pub settings: SheetSettings,
    /// Exercises in the order they are run
    #[serde(default)]
    pub exercises: Vec<Exercise>,
}

impl ExerciseFile {
    /// Load an exercise sheet from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read exercise sheet: {:?}", path.as_ref()))?;
        Self::from_yaml(&contents)
    }

    /// Parse an exercise sheet from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse exercise sheet YAML")
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize exercise sheet to YAML")
    }

    /// Save the sheet to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = self.to_yaml()?;
        fs::write(path.as_ref(), yaml)
            .with_context(|| format!("Failed to write exercise sheet: {:?}", path.as_ref()))
    }

    /// Run every exercise and collect the outcomes
    pub fn run(&self) -> Report {
        Report::run(self)
    }
}

/// Sheet-wide settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SheetSettings {
    /// Display name for the sheet
    #[serde(default)]
    pub name: Option<String>,
    /// Direction used by exercises that don't name one
    #[serde(default)]
    pub direction: Direction,
}

/// A single task plus its expected answer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Exercise {
    #[serde(flatten)]
    pub task: Task,
    /// Expected answer (note or interval name); unchecked if absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expect: Option<String>,
}

impl Exercise {
    pub fn new(task: Task) -> Self {
        Self { task, expect: None }
    }

    pub fn expecting(mut self, answer: &str) -> Self {
        self.expect = Some(answer.to_string());
        self
    }
}

/// What to compute.
///
/// Notes and interval names stay as raw strings so that one malformed
/// exercise is reported on its own instead of rejecting the whole sheet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Task {
    /// Find the note `interval` away from `start`
    Construct {
        interval: String,
        start: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        direction: Option<String>,
    },
    /// Name the interval from `start` to `end`
    Identify {
        start: String,
        end: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        direction: Option<String>,
    },
}

impl Task {
    /// Compute the answer, using `default` when no direction is given
    pub fn answer(&self, default: Direction) -> error::Result<String> {
        match self {
            Task::Construct {
                interval,
                start,
                direction,
            } => construct_str(
                interval,
                start,
                Some(direction.as_deref().unwrap_or(default.as_str())),
            ),
            Task::Identify {
                start,
                end,
                direction,
            } => identify_str(
                start,
                end,
                Some(direction.as_deref().unwrap_or(default.as_str())),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sheet() {
        let yaml = r#"
settings:
  name: "Fifths"
  direction: dsc

exercises:
  - construct: { interval: P5, start: Ab, direction: asc }
    expect: Eb
  - construct:
      interval: P5
      start: Ab
    expect: Db
  - identify: { start: Fb, end: Gbb, direction: asc }
"#;

        let sheet = ExerciseFile::from_yaml(yaml).unwrap();
        assert_eq!(sheet.settings.name, Some("Fifths".to_string()));
        assert_eq!(sheet.settings.direction, Direction::Descending);
        assert_eq!(sheet.exercises.len(), 3);
        assert_eq!(sheet.exercises[0].expect, Some("Eb".to_string()));
        assert_eq!(
            sheet.exercises[2].task,
            Task::Identify {
                start: "Fb".to_string(),
                end: "Gbb".to_string(),
                direction: Some("asc".to_string()),
            }
        );
        assert_eq!(sheet.exercises[2].expect, None);
    }

    #[test]
    fn test_default_values() {
        let sheet = ExerciseFile::from_yaml("exercises: []").unwrap();
        assert_eq!(sheet.settings.direction, Direction::Ascending);
        assert_eq!(sheet.settings.name, None);
        assert!(sheet.exercises.is_empty());
    }

    #[test]
    fn test_task_answer_uses_default_direction() {
        let task = Task::Construct {
            interval: "P5".to_string(),
            start: "Ab".to_string(),
            direction: None,
        };
        assert_eq!(task.answer(Direction::Ascending), Ok("Eb".to_string()));
        assert_eq!(task.answer(Direction::Descending), Ok("Db".to_string()));

        let explicit = Task::Identify {
            start: "Ab".to_string(),
            end: "Db".to_string(),
            direction: Some("dsc".to_string()),
        };
        assert_eq!(explicit.answer(Direction::Ascending), Ok("P5".to_string()));
    }

    #[test]
    fn test_invalid_task_is_not_a_parse_error() {
        let yaml = r#"
exercises:
  - construct: { interval: P1, start: Ab }
"#;
        let sheet = ExerciseFile::from_yaml(yaml).unwrap();
        assert!(sheet.exercises[0].task.answer(Direction::Ascending).is_err());
    }

    #[test]
    fn test_round_trip() {
        let original = ExerciseFile {
            settings: SheetSettings {
                name: Some("Round Trip".to_string()),
                direction: Direction::Descending,
            },
            exercises: vec![
                Exercise::new(Task::Construct {
                    interval: "m2".to_string(),
                    start: "Fb".to_string(),
                    direction: None,
                })
                .expecting("Eb"),
                Exercise::new(Task::Identify {
                    start: "E".to_string(),
                    end: "E".to_string(),
                    direction: Some("asc".to_string()),
                }),
            ],
        };

        let yaml = original.to_yaml().unwrap();
        let parsed = ExerciseFile::from_yaml(&yaml).unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn test_unknown_task_rejected() {
        let yaml = r#"
exercises:
  - transpose: { start: C }
"#;
        assert!(ExerciseFile::from_yaml(yaml).is_err());
    }
}
