//! Semantic input invariants not expressible via JSON Schema.

use thiserror::Error;

use super::types::AssessmentInput;

/// Input rejected by the validation gate. Carries every violation found.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid input:\n- {}", .violations.join("\n- "))]
pub struct InvalidInput {
    pub violations: Vec<String>,
}

/// Check invariants the typed input cannot enforce by itself:
/// - every measurement is finite
/// - every measurement is non-negative
pub fn validate_invariants(input: &AssessmentInput) -> Vec<String> {
    let measurements = [
        ("breath_hold_secs", input.breath_hold_secs),
        ("grip.right_kg", input.grip.right_kg),
        ("grip.left_kg", input.grip.left_kg),
        ("pulse_zone_pct", input.pulse_zone_pct),
        ("balance.right_secs", input.balance.right_secs),
        ("balance.left_secs", input.balance.left_secs),
    ];

    let mut errors = Vec::new();
    for (field, value) in measurements {
        if !value.is_finite() {
            errors.push(format!("{field}: must be a finite number"));
        } else if value < 0.0 {
            errors.push(format!("{field}: must be >= 0 (got {value})"));
        }
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_input;

    #[test]
    fn sample_input_is_valid() {
        assert!(validate_invariants(&sample_input()).is_empty());
    }

    #[test]
    fn reports_every_violation() {
        let mut input = sample_input();
        input.breath_hold_secs = f64::NAN;
        input.grip.left_kg = -1.0;
        input.balance.right_secs = f64::INFINITY;

        let errors = validate_invariants(&input);
        assert_eq!(errors.len(), 3);
        assert!(errors.iter().any(|err| err.starts_with("breath_hold_secs")));
        assert!(errors.iter().any(|err| err.contains("grip.left_kg: must be >= 0")));
        assert!(errors.iter().any(|err| err.starts_with("balance.right_secs")));
    }

    #[test]
    fn invalid_input_lists_violations() {
        let err = InvalidInput {
            violations: vec!["a: bad".to_string(), "b: bad".to_string()],
        };
        assert_eq!(err.to_string(), "invalid input:\n- a: bad\n- b: bad");
    }
}
