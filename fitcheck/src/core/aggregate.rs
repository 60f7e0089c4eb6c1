//! Aggregation of the six per-test results into an overall assessment.

use anyhow::Result;
use serde::Serialize;

use super::evaluators::{
    evaluate_balance, evaluate_breath_hold, evaluate_grip, evaluate_leg_flexibility,
    evaluate_pulse_recovery, evaluate_shoulder_flexibility,
};
use super::invariants::{InvalidInput, validate_invariants};
use super::thresholds::ThresholdTable;
use super::types::{AssessmentInput, TestResult};

/// Qualitative band for the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OverallBand {
    Excellent,
    Good,
    NeedsImprovement,
    Minimal,
}

impl OverallBand {
    /// `>= 90` Excellent, `>= 70` Good, `>= 40` Needs Improvement, else Minimal.
    pub fn for_score(score: f64) -> Self {
        if score >= 90.0 {
            OverallBand::Excellent
        } else if score >= 70.0 {
            OverallBand::Good
        } else if score >= 40.0 {
            OverallBand::NeedsImprovement
        } else {
            OverallBand::Minimal
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            OverallBand::Excellent => "Excellent",
            OverallBand::Good => "Good",
            OverallBand::NeedsImprovement => "Needs Improvement",
            OverallBand::Minimal => "Minimal",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            OverallBand::Excellent => "Excellent! Your physical form is optimal.",
            OverallBand::Good => "Good! You've made significant progress.",
            OverallBand::NeedsImprovement => {
                "Needs Improvement. There is potential for growth."
            }
            OverallBand::Minimal => "Minimal. Efforts are needed for improvement.",
        }
    }
}

/// Fully populated assessment. Formatters only interpolate these fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateResult {
    pub table_version: &'static str,
    pub breath_hold: TestResult,
    pub grip: TestResult,
    pub pulse_recovery: TestResult,
    pub leg_flexibility: TestResult,
    pub shoulder_flexibility: TestResult,
    pub balance: TestResult,
    /// Unrounded mean of the six scores.
    pub overall_score: f64,
    pub overall_band: OverallBand,
}

impl AggregateResult {
    /// Per-test results in report order.
    pub fn tests(&self) -> [&TestResult; 6] {
        [
            &self.breath_hold,
            &self.grip,
            &self.pulse_recovery,
            &self.leg_flexibility,
            &self.shoulder_flexibility,
            &self.balance,
        ]
    }

    pub fn any_asymmetry(&self) -> bool {
        self.tests().iter().any(|test| test.asymmetry_detected)
    }
}

/// Unweighted arithmetic mean of the six scores.
pub fn overall_score(scores: [f64; 6]) -> f64 {
    scores.iter().sum::<f64>() / scores.len() as f64
}

/// Evaluate all six tests and aggregate them.
///
/// Fails closed: input that breaks an invariant yields [`InvalidInput`] and
/// no partial result.
pub fn evaluate(input: &AssessmentInput, table: &ThresholdTable) -> Result<AggregateResult> {
    let violations = validate_invariants(input);
    if !violations.is_empty() {
        return Err(InvalidInput { violations }.into());
    }

    let breath_hold = evaluate_breath_hold(input.breath_hold_secs, table);
    let grip = evaluate_grip(&input.grip, table);
    let pulse_recovery = evaluate_pulse_recovery(input.pulse_zone_pct, table);
    let leg_flexibility = evaluate_leg_flexibility(input.leg_reach, table);
    let shoulder_flexibility = evaluate_shoulder_flexibility(&input.shoulder_grip, table);
    let balance = evaluate_balance(&input.balance, table);

    let overall_score = overall_score([
        breath_hold.score,
        grip.score,
        pulse_recovery.score,
        leg_flexibility.score,
        shoulder_flexibility.score,
        balance.score,
    ]);

    Ok(AggregateResult {
        table_version: table.version,
        breath_hold,
        grip,
        pulse_recovery,
        leg_flexibility,
        shoulder_flexibility,
        balance,
        overall_score,
        overall_band: OverallBand::for_score(overall_score),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{
        BalanceInput, GripInput, LegReach, Sex, ShoulderGrip, ShoulderGripInput, TestKind,
    };
    use crate::test_support::sample_input;

    #[test]
    fn band_boundaries_are_inclusive() {
        assert_eq!(OverallBand::for_score(100.0), OverallBand::Excellent);
        assert_eq!(OverallBand::for_score(90.0), OverallBand::Excellent);
        assert_eq!(OverallBand::for_score(89.9), OverallBand::Good);
        assert_eq!(OverallBand::for_score(70.0), OverallBand::Good);
        assert_eq!(OverallBand::for_score(69.9), OverallBand::NeedsImprovement);
        assert_eq!(OverallBand::for_score(40.0), OverallBand::NeedsImprovement);
        assert_eq!(OverallBand::for_score(39.9), OverallBand::Minimal);
        assert_eq!(OverallBand::for_score(25.0), OverallBand::Minimal);
    }

    #[test]
    fn overall_of_mixed_tiers_is_good() {
        let score = overall_score([100.0, 75.0, 50.0, 100.0, 75.0, 50.0]);
        assert_eq!(score, 75.0);
        assert_eq!(OverallBand::for_score(score), OverallBand::Good);
    }

    #[test]
    fn overall_score_is_mean_of_reported_scores() {
        let grips = [
            GripInput {
                sex: Sex::Male,
                right_kg: 50.0,
                left_kg: 48.0,
            },
            GripInput {
                sex: Sex::Male,
                right_kg: 20.0,
                left_kg: 62.0,
            },
            GripInput {
                sex: Sex::Female,
                right_kg: 26.0,
                left_kg: 31.0,
            },
            GripInput {
                sex: Sex::Female,
                right_kg: 10.0,
                left_kg: 30.0,
            },
        ];
        let shoulders = [
            (ShoulderGrip::FullGrip, ShoulderGrip::LooseGrip),
            (ShoulderGrip::Touch, ShoulderGrip::LooseGrip),
            (ShoulderGrip::NoTouch, ShoulderGrip::NoTouch),
            (ShoulderGrip::NoTouch, ShoulderGrip::FullGrip),
        ];
        let balances = [(20.0, 60.0), (45.0, 45.0), (0.0, 0.0), (55.0, 31.0)];
        let reaches = [
            LegReach::Knee,
            LegReach::ShinOrFoot,
            LegReach::FloorFists,
            LegReach::FloorPalms,
        ];

        let mut input = sample_input();
        for breath in [30.0, 50.0, 75.0, 95.0] {
            input.breath_hold_secs = breath;
            for grip in grips {
                input.grip = grip;
                for pulse in [45.0, 65.0, 80.0, 95.0] {
                    input.pulse_zone_pct = pulse;
                    for reach in reaches {
                        input.leg_reach = reach;
                        for (right, left) in shoulders {
                            input.shoulder_grip = ShoulderGripInput { right, left };
                            for (right_secs, left_secs) in balances {
                                input.balance = BalanceInput {
                                    right_secs,
                                    left_secs,
                                };
                                let result =
                                    evaluate(&input, &ThresholdTable::V4).expect("evaluate");
                                let mean =
                                    result.tests().iter().map(|test| test.score).sum::<f64>()
                                        / 6.0;
                                assert_eq!(result.overall_score, mean, "{input:?}");
                                assert_eq!(
                                    result.overall_band,
                                    OverallBand::for_score(mean),
                                    "{input:?}"
                                );
                                assert_eq!(result.table_version, "v4");
                            }
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn sample_assessment_scores() {
        let result = evaluate(&sample_input(), &ThresholdTable::V4).expect("evaluate");
        assert_eq!(result.breath_hold.score, 100.0);
        assert_eq!(result.grip.score, 75.0);
        assert_eq!(result.pulse_recovery.score, 75.0);
        assert_eq!(result.leg_flexibility.score, 75.0);
        assert_eq!(result.shoulder_flexibility.score, 87.5);
        assert_eq!(result.balance.score, 62.5);
        assert!(result.balance.asymmetry_detected);
        assert!(result.any_asymmetry());
        assert_eq!(result.overall_score, 475.0 / 6.0);
        assert_eq!(result.overall_band, OverallBand::Good);
    }

    #[test]
    fn tests_are_in_report_order() {
        let result = evaluate(&sample_input(), &ThresholdTable::V4).expect("evaluate");
        let kinds: Vec<TestKind> = result.tests().iter().map(|test| test.kind).collect();
        assert_eq!(kinds, TestKind::ALL.to_vec());
    }

    #[test]
    fn all_minimal_input_is_minimal_band() {
        let mut input = sample_input();
        input.breath_hold_secs = 10.0;
        input.grip.right_kg = 5.0;
        input.grip.left_kg = 5.0;
        input.pulse_zone_pct = 95.0;
        input.leg_reach = LegReach::Knee;
        input.shoulder_grip.right = ShoulderGrip::NoTouch;
        input.shoulder_grip.left = ShoulderGrip::NoTouch;
        input.balance.right_secs = 5.0;
        input.balance.left_secs = 5.0;

        let result = evaluate(&input, &ThresholdTable::V4).expect("evaluate");
        assert_eq!(result.overall_score, 25.0);
        assert_eq!(result.overall_band, OverallBand::Minimal);
        assert!(!result.any_asymmetry());
    }

    #[test]
    fn refuses_invalid_input() {
        let mut input = sample_input();
        input.pulse_zone_pct = -5.0;
        let err = evaluate(&input, &ThresholdTable::V4).expect_err("invalid");
        let invalid = err.downcast_ref::<InvalidInput>().expect("invalid input error");
        assert_eq!(invalid.violations.len(), 1);
    }
}
