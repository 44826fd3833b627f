// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Running exercise sheets and summarising the results.

use std::fmt;

use tracing::{debug, info, warn};

use super::{Exercise, ExerciseFile};
use crate::error::IntervalError;

/// Result of running one exercise
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseOutcome {
    pub exercise: Exercise,
    /// Computed answer, or the error that stopped it
    pub answer: Result<String, IntervalError>,
}

impl ExerciseOutcome {
    /// The computation failed
    pub fn is_error(&self) -> bool {
        self.answer.is_err()
    }

    /// The computation succeeded and matches the expected answer, if any
    pub fn passed(&self) -> bool {
        match (&self.answer, &self.exercise.expect) {
            (Ok(answer), Some(expected)) => answer == expected,
            (Ok(_), None) => true,
            (Err(_), _) => false,
        }
    }

    /// The computation succeeded but disagrees with the expected answer
    pub fn mismatched(&self) -> bool {
        !self.is_error() && !self.passed()
    }
}

impl fmt::Display for ExerciseOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.answer, &self.exercise.expect) {
            (Err(e), _) => write!(f, "ERROR    {}", e),
            (Ok(answer), Some(expected)) if answer != expected => {
                write!(f, "MISMATCH {} (expected {})", answer, expected)
            }
            (Ok(answer), _) => write!(f, "OK       {}", answer),
        }
    }
}

/// Outcomes of a whole exercise sheet
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Report {
    pub name: Option<String>,
    pub outcomes: Vec<ExerciseOutcome>,
}

impl Report {
    /// Run every exercise in `sheet`
    pub fn run(sheet: &ExerciseFile) -> Self {
        let default_direction = sheet.settings.direction;

        let outcomes: Vec<ExerciseOutcome> = sheet
            .exercises
            .iter()
            .enumerate()
            .map(|(i, exercise)| {
                let answer = exercise.task.answer(default_direction);
                let outcome = ExerciseOutcome {
                    exercise: exercise.clone(),
                    answer,
                };
                if let Err(e) = &outcome.answer {
                    warn!(exercise = i, error = %e, "exercise failed");
                } else if outcome.mismatched() {
                    warn!(exercise = i, %outcome, "exercise answer mismatch");
                } else {
                    debug!(exercise = i, %outcome, "exercise passed");
                }
                outcome
            })
            .collect();

        let report = Self {
            name: sheet.settings.name.clone(),
            outcomes,
        };
        info!(
            passed = report.passed(),
            mismatched = report.mismatched(),
            errors = report.errors(),
            "exercise sheet complete"
        );
        report
    }

    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed()).count()
    }

    pub fn mismatched(&self) -> usize {
        self.outcomes.iter().filter(|o| o.mismatched()).count()
    }

    pub fn errors(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_error()).count()
    }

    /// Every exercise passed
    pub fn is_success(&self) -> bool {
        self.passed() == self.outcomes.len()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = &self.name {
            writeln!(f, "{}", name)?;
        }
        for (i, outcome) in self.outcomes.iter().enumerate() {
            writeln!(f, "{:>3}. {}", i + 1, outcome)?;
        }
        write!(
            f,
            "{} passed, {} mismatched, {} errors",
            self.passed(),
            self.mismatched(),
            self.errors()
        )
    }
}
