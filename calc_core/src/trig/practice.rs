//! Practice problems for the SOH-CAH-TOA drill.

use serde::{Deserialize, Serialize};

use super::solver::{solve_sides, SolveResult, SolveRule, TriangleSides};
use crate::errors::CalcResult;

/// Answers within this many degrees of the expected angle are accepted
pub const ANSWER_TOLERANCE_DEG: f64 = 0.5;

/// A drill question: two known sides, find θ
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PracticeProblem {
    pub sides: TriangleSides,
    /// Expected θ, rounded to two decimals
    pub answer_degrees: f64,
    pub rule: SolveRule,
}

/// The built-in problem set, in presentation order
pub const PRACTICE_PROBLEMS: [PracticeProblem; 4] = [
    PracticeProblem {
        sides: TriangleSides {
            opposite: Some(3.0),
            adjacent: None,
            hypotenuse: Some(5.0),
        },
        answer_degrees: 36.87,
        rule: SolveRule::Sine,
    },
    PracticeProblem {
        sides: TriangleSides {
            opposite: None,
            adjacent: Some(4.0),
            hypotenuse: Some(5.0),
        },
        answer_degrees: 36.87,
        rule: SolveRule::Cosine,
    },
    PracticeProblem {
        sides: TriangleSides {
            opposite: Some(7.0),
            adjacent: Some(7.0),
            hypotenuse: None,
        },
        answer_degrees: 45.0,
        rule: SolveRule::Tangent,
    },
    PracticeProblem {
        sides: TriangleSides {
            opposite: Some(5.0),
            adjacent: None,
            hypotenuse: Some(13.0),
        },
        answer_degrees: 22.62,
        rule: SolveRule::Sine,
    },
];

impl PracticeProblem {
    /// Whether `answer` is within tolerance of the expected angle
    pub fn check(&self, answer_degrees: f64) -> bool {
        (answer_degrees - self.answer_degrees).abs() < ANSWER_TOLERANCE_DEG
    }

    /// Feedback line for a submitted answer
    pub fn feedback(&self, answer_degrees: f64) -> String {
        if self.check(answer_degrees) {
            format!("Correct! The angle is {}°", self.answer_degrees)
        } else {
            format!(
                "Not quite. The correct answer is {}°. Try again!",
                self.answer_degrees
            )
        }
    }

    /// Question text, e.g. `Opposite = 3, Hypotenuse = 5. Find θ.`
    pub fn prompt(&self) -> String {
        let known: Vec<String> = [
            ("Opposite", self.sides.opposite),
            ("Adjacent", self.sides.adjacent),
            ("Hypotenuse", self.sides.hypotenuse),
        ]
        .iter()
        .filter_map(|(name, side)| side.map(|s| format!("{} = {}", name, s)))
        .collect();
        format!("{}. Find θ.", known.join(", "))
    }

    /// Worked solution
    pub fn solve(&self) -> CalcResult<SolveResult> {
        solve_sides(&self.sides)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answers_match_solver() {
        for problem in PRACTICE_PROBLEMS {
            let solved = problem.solve().unwrap();
            assert_eq!(solved.rule, problem.rule);
            assert!(problem.check(solved.angle_degrees.unwrap()));
        }
    }

    #[test]
    fn test_tolerance() {
        let problem = PRACTICE_PROBLEMS[0];
        assert!(problem.check(37.0));
        assert!(problem.check(36.5));
        assert!(!problem.check(37.5));
        assert!(problem.feedback(36.9).starts_with("Correct"));
        assert_eq!(
            problem.feedback(40.0),
            "Not quite. The correct answer is 36.87°. Try again!"
        );
    }

    #[test]
    fn test_prompt() {
        assert_eq!(PRACTICE_PROBLEMS[0].prompt(), "Opposite = 3, Hypotenuse = 5. Find θ.");
        assert_eq!(PRACTICE_PROBLEMS[2].prompt(), "Opposite = 7, Adjacent = 7. Find θ.");
    }
}
