//! # Right-Triangle Solver
//!
//! Given any two of {opposite, adjacent, hypotenuse}, picks the matching
//! SOH-CAH-TOA rule and computes the angle θ. With all three sides it checks
//! the Pythagorean relation instead; with fewer than two it reports that the
//! input is insufficient.
//!
//! A side is *present* when it is `Some`. Present sides must be positive and
//! finite: `Some(0.0)` is rejected as an invalid triangle, never treated as
//! missing.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::trig::{solve, SolveRule};
//!
//! let result = solve(Some(3.0), None, Some(5.0)).unwrap();
//! assert_eq!(result.rule, SolveRule::Sine);
//! assert!((result.angle_degrees.unwrap() - 36.87).abs() < 0.01);
//!
//! // Opposite longer than hypotenuse is not a triangle
//! assert!(solve(Some(6.0), None, Some(5.0)).is_err());
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::ratios::{all_trig_values, TrigValues};
use crate::equations::triangle::{
    cosine_angle, pythagorean_hypotenuse, satisfies_pythagoras, sine_angle, tangent_angle,
};
use crate::errors::{CalcError, CalcResult};

/// Relative tolerance for h² = o² + a²
pub const PYTHAGOREAN_TOLERANCE: f64 = 1e-9;

/// Known sides of a right triangle.
///
/// ## JSON Example
///
/// ```json
/// { "opposite": 3.0, "hypotenuse": 5.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriangleSides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opposite: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adjacent: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hypotenuse: Option<f64>,
}

impl TriangleSides {
    pub fn new(opposite: Option<f64>, adjacent: Option<f64>, hypotenuse: Option<f64>) -> Self {
        TriangleSides {
            opposite,
            adjacent,
            hypotenuse,
        }
    }

    /// Number of sides supplied
    pub fn present_count(&self) -> usize {
        [self.opposite, self.adjacent, self.hypotenuse]
            .iter()
            .filter(|s| s.is_some())
            .count()
    }

    /// Validate every present side.
    pub fn validate(&self) -> CalcResult<()> {
        for (name, side) in [
            ("opposite", self.opposite),
            ("adjacent", self.adjacent),
            ("hypotenuse", self.hypotenuse),
        ] {
            if let Some(length) = side {
                if !length.is_finite() || length <= 0.0 {
                    return Err(CalcError::invalid_triangle(format!(
                        "{} must be a positive length, got {}",
                        name, length
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Which rule the solver applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SolveRule {
    /// sin θ = O/H
    Sine,
    /// cos θ = A/H
    Cosine,
    /// tan θ = O/A
    Tangent,
    /// All three sides given: h² = o² + a² verified, no angle computed
    PythagoreanCheck,
    /// Fewer than two sides given
    InsufficientInput,
}

impl SolveRule {
    /// Stable id (matches the JSON form)
    pub fn id(&self) -> &'static str {
        match self {
            SolveRule::Sine => "sine",
            SolveRule::Cosine => "cosine",
            SolveRule::Tangent => "tangent",
            SolveRule::PythagoreanCheck => "pythagorean-check",
            SolveRule::InsufficientInput => "insufficient-input",
        }
    }

    /// SOH / CAH / TOA part of the mnemonic, for the three angle rules
    pub fn mnemonic(&self) -> Option<&'static str> {
        match self {
            SolveRule::Sine => Some("SOH"),
            SolveRule::Cosine => Some("CAH"),
            SolveRule::Tangent => Some("TOA"),
            SolveRule::PythagoreanCheck | SolveRule::InsufficientInput => None,
        }
    }
}

impl std::fmt::Display for SolveRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Outcome of the Pythagorean check when all three sides are supplied
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PythagoreanCheck {
    pub supplied_hypotenuse: f64,
    /// √(o² + a²)
    pub predicted_hypotenuse: f64,
    pub is_right_triangle: bool,
}

/// Solver output.
///
/// ## JSON Example
///
/// ```json
/// {
///   "angleDegrees": 36.86989764584402,
///   "rule": "sine",
///   "ratio": 0.6,
///   "trail": ["1. Identify: Opposite = 3, Hypotenuse = 5", "..."]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveResult {
    /// θ in degrees, `None` when no angle was computed
    pub angle_degrees: Option<f64>,
    pub rule: SolveRule,
    /// Ratio fed to the inverse function, `None` if it overflows
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ratio: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pythagorean: Option<PythagoreanCheck>,
    /// Human-readable derivation steps (informational only)
    pub trail: Vec<String>,
}

impl SolveResult {
    /// Whether an angle was found
    pub fn is_solved(&self) -> bool {
        self.angle_degrees.is_some()
    }

    /// Six trig ratios of the solved angle
    pub fn trig_values(&self) -> Option<TrigValues> {
        self.angle_degrees.and_then(|deg| all_trig_values(deg).ok())
    }
}

/// Solve a right triangle from the supplied sides.
///
/// # Errors
///
/// * `InvalidTriangle` - a present side is not a positive finite length, or
///   the sine/cosine ratio exceeds 1 (leg longer than hypotenuse)
pub fn solve(opposite: Option<f64>, adjacent: Option<f64>, hypotenuse: Option<f64>) -> CalcResult<SolveResult> {
    solve_sides(&TriangleSides::new(opposite, adjacent, hypotenuse))
}

/// Solve a right triangle from a [`TriangleSides`] value.
pub fn solve_sides(sides: &TriangleSides) -> CalcResult<SolveResult> {
    sides.validate().map_err(|e| {
        warn!(?sides, "rejected triangle: {}", e);
        e
    })?;

    let result = match (sides.opposite, sides.adjacent, sides.hypotenuse) {
        (Some(o), Some(a), Some(h)) => pythagorean_check(o, a, h),
        (Some(o), None, Some(h)) => {
            let ratio = leg_over_hypotenuse("opposite", o, h)?;
            let theta = sine_angle(o, h).0;
            angle_result(SolveRule::Sine, ("Opposite", o), ("Hypotenuse", h), Some(ratio), theta)
        }
        (None, Some(a), Some(h)) => {
            let ratio = leg_over_hypotenuse("adjacent", a, h)?;
            let theta = cosine_angle(a, h).0;
            angle_result(SolveRule::Cosine, ("Adjacent", a), ("Hypotenuse", h), Some(ratio), theta)
        }
        (Some(o), Some(a), None) => {
            // Both legs are positive, so only overflow can make this non-finite
            let ratio = Some(o / a).filter(|r| r.is_finite());
            let theta = tangent_angle(o, a).0;
            angle_result(SolveRule::Tangent, ("Opposite", o), ("Adjacent", a), ratio, theta)
        }
        _ => SolveResult {
            angle_degrees: None,
            rule: SolveRule::InsufficientInput,
            ratio: None,
            pythagorean: None,
            trail: vec!["Enter any 2 sides to solve for the angle.".to_string()],
        },
    };

    debug!(rule = result.rule.id(), angle = ?result.angle_degrees, "solved triangle");
    Ok(result)
}

/// Ratio leg / hypotenuse, rejected when it leaves the [0, 1] domain
fn leg_over_hypotenuse(leg_name: &str, leg: f64, hypotenuse: f64) -> CalcResult<f64> {
    let ratio = leg / hypotenuse;
    if !ratio.is_finite() || ratio > 1.0 {
        return Err(CalcError::invalid_triangle(format!(
            "{} ({}) cannot be longer than the hypotenuse ({})",
            leg_name, leg, hypotenuse
        )));
    }
    Ok(ratio)
}

/// `ratio` is `None` when `a / b` overflows; the angle is still defined.
fn angle_result(
    rule: SolveRule,
    (name_a, a): (&str, f64),
    (name_b, b): (&str, f64),
    ratio: Option<f64>,
    theta: f64,
) -> SolveResult {
    let (function, inverse) = match rule {
        SolveRule::Sine => ("sin", "sin⁻¹"),
        SolveRule::Cosine => ("cos", "cos⁻¹"),
        _ => ("tan", "tan⁻¹"),
    };
    let mnemonic = rule.mnemonic().unwrap_or_default();
    let ratio_text = match ratio {
        Some(r) => format!("{:.4}", r),
        None => "∞".to_string(),
    };

    let trail = vec![
        format!("1. Identify: {} = {}, {} = {}", name_a, a, name_b, b),
        format!(
            "2. Apply {}: {}(θ) = {} / {} = {}/{}",
            mnemonic, function, name_a, name_b, a, b
        ),
        format!("3. Calculate ratio: {}", ratio_text),
        format!("4. Find inverse: θ = {}({})", inverse, ratio_text),
        format!("5. Result: θ = {:.2}°", theta),
    ];

    SolveResult {
        angle_degrees: Some(theta),
        rule,
        ratio,
        pythagorean: None,
        trail,
    }
}

fn pythagorean_check(o: f64, a: f64, h: f64) -> SolveResult {
    let predicted = pythagorean_hypotenuse(o, a);
    let is_right_triangle = satisfies_pythagoras(o, a, h, PYTHAGOREAN_TOLERANCE);

    let lhs = h * h;
    let rhs = o * o + a * a;
    let squares_finite = lhs.is_normal() && rhs.is_normal();
    let exact = is_right_triangle && if squares_finite { lhs == rhs } else { h == predicted };
    let relation = if exact {
        "="
    } else if is_right_triangle {
        "≈"
    } else {
        "≠"
    };

    let mut trail = vec![
        "All 3 sides given: checking with Pythagoras".to_string(),
        "hyp² = opp² + adj²".to_string(),
        format!("{}² = {}² + {}²", h, o, a),
    ];
    if squares_finite {
        trail.push(format!("{} = {} + {}", lhs, o * o, a * a));
        trail.push(format!("{} {} {}", lhs, relation, rhs));
    } else {
        // Squares overflow or underflow f64; compare the lengths instead
        trail.push(format!("hyp {} √(opp² + adj²)", relation));
        trail.push(format!("{} {} {}", h, relation, predicted));
    }
    trail.push(format!("Calculated hypotenuse: {:.2}", predicted));
    trail.push("Remove one value to solve for the angle.".to_string());

    SolveResult {
        angle_degrees: None,
        rule: SolveRule::PythagoreanCheck,
        ratio: None,
        pythagorean: Some(PythagoreanCheck {
            supplied_hypotenuse: h,
            predicted_hypotenuse: predicted,
            is_right_triangle,
        }),
        trail,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sine_rule() {
        let result = solve(Some(3.0), None, Some(5.0)).unwrap();
        assert_eq!(result.rule, SolveRule::Sine);
        assert_relative_eq!(result.angle_degrees.unwrap(), 36.87, epsilon = 0.005);
        assert_eq!(result.ratio, Some(0.6));
        assert_eq!(
            result.trail,
            vec![
                "1. Identify: Opposite = 3, Hypotenuse = 5",
                "2. Apply SOH: sin(θ) = Opposite / Hypotenuse = 3/5",
                "3. Calculate ratio: 0.6000",
                "4. Find inverse: θ = sin⁻¹(0.6000)",
                "5. Result: θ = 36.87°",
            ]
        );
    }

    #[test]
    fn test_cosine_rule() {
        let result = solve(None, Some(4.0), Some(5.0)).unwrap();
        assert_eq!(result.rule, SolveRule::Cosine);
        assert_relative_eq!(result.angle_degrees.unwrap(), 36.87, epsilon = 0.005);
        assert!(result.trail[1].starts_with("2. Apply CAH"));
        assert_eq!(result.trail.iter().filter(|l| l.contains("Result")).count(), 1);
    }

    #[test]
    fn test_tangent_rule() {
        let result = solve(Some(7.0), Some(7.0), None).unwrap();
        assert_eq!(result.rule, SolveRule::Tangent);
        assert_relative_eq!(result.angle_degrees.unwrap(), 45.0, epsilon = 1e-12);
    }

    #[test]
    fn test_tangent_rule_steep_triangle() {
        let result = solve(Some(1e200), Some(1e-200), None).unwrap();
        assert_eq!(result.rule, SolveRule::Tangent);
        assert_relative_eq!(result.angle_degrees.unwrap(), 90.0, max_relative = 1e-12);
        assert_eq!(result.ratio, None);
        assert_eq!(result.trail[2], "3. Calculate ratio: ∞");

        let flat = solve(Some(1e-200), Some(1e200), None).unwrap();
        assert_eq!(flat.angle_degrees, Some(0.0));
        assert_eq!(flat.ratio, Some(0.0));
    }

    #[test]
    fn test_opposite_longer_than_hypotenuse() {
        let err = solve(Some(6.0), None, Some(5.0)).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_TRIANGLE");
    }

    #[test]
    fn test_adjacent_longer_than_hypotenuse() {
        let err = solve(None, Some(5.5), Some(5.0)).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_TRIANGLE");
    }

    #[test]
    fn test_leg_equal_to_hypotenuse_is_right_angle() {
        let result = solve(Some(5.0), None, Some(5.0)).unwrap();
        assert_relative_eq!(result.angle_degrees.unwrap(), 90.0, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_adjacent_in_tangent_path() {
        let err = solve(Some(3.0), Some(0.0), None).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_TRIANGLE");
    }

    #[test]
    fn test_zero_side_is_present_not_absent() {
        // A zero hypotenuse must not fall through to the tangent rule
        let err = solve(Some(3.0), Some(4.0), Some(0.0)).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_TRIANGLE");
    }

    #[test]
    fn test_negative_and_nan_sides_rejected() {
        assert!(solve(Some(-3.0), None, Some(5.0)).is_err());
        assert!(solve(Some(f64::NAN), Some(1.0), None).is_err());
        assert!(solve(None, Some(f64::INFINITY), Some(5.0)).is_err());
    }

    #[test]
    fn test_pythagorean_check() {
        let result = solve(Some(3.0), Some(4.0), Some(5.0)).unwrap();
        assert_eq!(result.rule, SolveRule::PythagoreanCheck);
        assert!(result.angle_degrees.is_none());

        let check = result.pythagorean.unwrap();
        assert_eq!(check.supplied_hypotenuse, 5.0);
        assert_relative_eq!(check.predicted_hypotenuse, 5.0);
        assert!(check.is_right_triangle);
        assert!(result.trail.contains(&"25 = 25".to_string()));
    }

    #[test]
    fn test_pythagorean_check_not_right() {
        let result = solve(Some(3.0), Some(4.0), Some(6.0)).unwrap();
        let check = result.pythagorean.unwrap();
        assert!(!check.is_right_triangle);
        assert_relative_eq!(check.predicted_hypotenuse, 5.0);
        assert!(result.trail.contains(&"36 ≠ 25".to_string()));
    }

    #[test]
    fn test_pythagorean_check_large_sides() {
        let result = solve(Some(3e200), Some(4e200), Some(5e200)).unwrap();
        let check = result.pythagorean.unwrap();
        assert!(check.is_right_triangle);
        assert_relative_eq!(check.predicted_hypotenuse, 5e200, max_relative = 1e-12);
        assert!(result.trail.iter().all(|line| !line.contains("inf")));
        assert!(result.trail.contains(&"hyp ≈ √(opp² + adj²)".to_string()));
        assert!(result
            .trail
            .contains(&format!("{} ≈ {}", 5e200, check.predicted_hypotenuse)));
    }

    #[test]
    fn test_pythagorean_check_tiny_sides() {
        let right = solve(Some(3e-200), Some(4e-200), Some(5e-200)).unwrap();
        assert!(right.pythagorean.unwrap().is_right_triangle);

        let wrong = solve(Some(3e-200), Some(4e-200), Some(6e-200)).unwrap();
        assert!(!wrong.pythagorean.unwrap().is_right_triangle);
        assert!(wrong.trail.contains(&"hyp ≠ √(opp² + adj²)".to_string()));
    }

    #[test]
    fn test_insufficient_input() {
        for sides in [
            TriangleSides::default(),
            TriangleSides::new(Some(3.0), None, None),
            TriangleSides::new(None, None, Some(5.0)),
        ] {
            let result = solve_sides(&sides).unwrap();
            assert_eq!(result.rule, SolveRule::InsufficientInput);
            assert!(!result.is_solved());
        }
    }

    #[test]
    fn test_trig_values_of_result() {
        let result = solve(Some(7.0), Some(7.0), None).unwrap();
        let values = result.trig_values().unwrap();
        assert_relative_eq!(values.tan().unwrap(), 1.0, epsilon = 1e-12);

        let unsolved = solve(None, None, None).unwrap();
        assert!(unsolved.trig_values().is_none());
    }

    #[test]
    fn test_json_shape() {
        let result = solve(Some(3.0), None, Some(5.0)).unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["rule"], "sine");
        assert!(json["angleDegrees"].is_f64());
        assert!(json["trail"].is_array());

        let unsolved = serde_json::to_value(solve(None, None, None).unwrap()).unwrap();
        assert!(unsolved["angleDegrees"].is_null());
        assert_eq!(unsolved["rule"], "insufficient-input");

        let check = serde_json::to_value(solve(Some(3.0), Some(4.0), Some(5.0)).unwrap()).unwrap();
        assert_eq!(check["rule"], "pythagorean-check");
        assert_eq!(check["pythagorean"]["predictedHypotenuse"], 5.0);
    }

    #[test]
    fn test_sides_from_json() {
        let sides: TriangleSides = serde_json::from_str(r#"{ "opposite": 3, "hypotenuse": 5 }"#).unwrap();
        assert_eq!(sides.present_count(), 2);
        assert_eq!(sides.adjacent, None);
    }
}
