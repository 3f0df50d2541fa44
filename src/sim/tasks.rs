//! Quiz tasks and their generators
//!
//! The core only relies on the generator contract: math operands and result in
//! `0..=MATH_MAX`, language pairs of two distinct non-empty words. Anything
//! else is refused by [`Task::validate`].

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::MATH_MAX;

/// Arithmetic operator for math tasks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MathOp {
    Add,
    Sub,
}

impl MathOp {
    pub fn symbol(&self) -> char {
        match self {
            MathOp::Add => '+',
            MathOp::Sub => '-',
        }
    }

    pub fn apply(&self, a: u32, b: u32) -> i64 {
        match self {
            MathOp::Add => a as i64 + b as i64,
            MathOp::Sub => a as i64 - b as i64,
        }
    }
}

/// `a op b = expected`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MathTask {
    pub a: u32,
    pub b: u32,
    pub op: MathOp,
    pub expected: u32,
}

impl MathTask {
    /// Build a task, computing the expected answer
    pub fn new(a: u32, b: u32, op: MathOp) -> Result<Self, TaskError> {
        let value = op.apply(a, b);
        let expected = u32::try_from(value).map_err(|_| TaskError::MathOutOfRange { a, b, value })?;
        let task = Self { a, b, op, expected };
        task.validate()?;
        Ok(task)
    }

    pub fn validate(&self) -> Result<(), TaskError> {
        let value = self.op.apply(self.a, self.b);
        if self.a > MATH_MAX || self.b > MATH_MAX || !(0..=MATH_MAX as i64).contains(&value) {
            return Err(TaskError::MathOutOfRange {
                a: self.a,
                b: self.b,
                value,
            });
        }
        if value != self.expected as i64 {
            return Err(TaskError::WrongExpectedAnswer {
                expected: self.expected,
                actual: value,
            });
        }
        Ok(())
    }

    /// Check a raw answer string; anything that is not a finite number is a miss
    pub fn check(&self, answer: &str) -> bool {
        answer
            .trim()
            .parse::<f64>()
            .is_ok_and(|v| v.is_finite() && v == f64::from(self.expected))
    }
}

/// Pick the correctly spelled word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageTask {
    pub correct: String,
    pub wrong: String,
    /// Presentation order: `true` shows the correct word on the left
    pub correct_first: bool,
}

impl LanguageTask {
    pub fn validate(&self) -> Result<(), TaskError> {
        if self.correct.trim().is_empty() || self.wrong.trim().is_empty() {
            return Err(TaskError::EmptyWord);
        }
        if self.correct == self.wrong {
            return Err(TaskError::IdenticalWords(self.correct.clone()));
        }
        Ok(())
    }

    /// The two words in left/right presentation order
    pub fn options(&self) -> [&str; 2] {
        if self.correct_first {
            [self.correct.as_str(), self.wrong.as_str()]
        } else {
            [self.wrong.as_str(), self.correct.as_str()]
        }
    }

    pub fn check(&self, word: &str) -> bool {
        word == self.correct
    }
}

/// An outstanding quiz
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Task {
    Math(MathTask),
    Language(LanguageTask),
}

impl Task {
    pub fn validate(&self) -> Result<(), TaskError> {
        match self {
            Task::Math(t) => t.validate(),
            Task::Language(t) => t.validate(),
        }
    }
}

/// Generator output that breaks the task contract
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    #[error("math task over {a} and {b} evaluates to {value}, outside 0..=100")]
    MathOutOfRange { a: u32, b: u32, value: i64 },
    #[error("math task claims {expected} but evaluates to {actual}")]
    WrongExpectedAnswer { expected: u32, actual: i64 },
    #[error("language task has an empty word")]
    EmptyWord,
    #[error("language task offers the same word twice: {0:?}")]
    IdenticalWords(String),
}

/// Source of quiz content
pub trait TaskGenerator {
    fn math(&mut self) -> MathTask;
    fn language(&mut self) -> LanguageTask;
}

/// Word pairs drilling the b/d confusion: (correct, wrong)
pub const VOCABULARY: [(&str, &str); 14] = [
    ("baba", "dada"),
    ("doba", "boda"),
    ("dobar", "bobar"),
    ("brdo", "drbo"),
    ("bod", "dod"),
    ("dud", "bud"),
    ("bubanj", "dudanj"),
    ("dabar", "babar"),
    ("brod", "drod"),
    ("džep", "bžep"),
    ("badem", "dadem"),
    ("dobit", "bobit"),
    ("budi", "dubi"),
    ("djed", "bjed"),
];

/// Seeded generator over the built-in vocabulary
#[derive(Debug, Clone)]
pub struct RandomTaskGenerator {
    rng: Pcg32,
}

impl RandomTaskGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }
}

impl TaskGenerator for RandomTaskGenerator {
    fn math(&mut self) -> MathTask {
        // Draw the second operand from what is left so the result stays in range
        let (a, b, op) = if self.rng.random_bool(0.5) {
            let a = self.rng.random_range(0..=MATH_MAX);
            let b = self.rng.random_range(0..=MATH_MAX - a);
            (a, b, MathOp::Add)
        } else {
            let a = self.rng.random_range(0..=MATH_MAX);
            let b = self.rng.random_range(0..=a);
            (a, b, MathOp::Sub)
        };
        let expected = match op {
            MathOp::Add => a + b,
            MathOp::Sub => a - b,
        };
        MathTask { a, b, op, expected }
    }

    fn language(&mut self) -> LanguageTask {
        let (correct, wrong) = VOCABULARY[self.rng.random_range(0..VOCABULARY.len())];
        LanguageTask {
            correct: correct.to_string(),
            wrong: wrong.to_string(),
            correct_first: self.rng.random_bool(0.5),
        }
    }
}
