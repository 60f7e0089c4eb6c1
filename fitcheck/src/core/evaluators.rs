//! Per-test evaluators.
//!
//! Each evaluator is total over its validated input: every measurement lands
//! in exactly one tier of the supplied [`ThresholdTable`].

use super::recommendations::{self, ASYMMETRY_ADVISORY};
use super::symmetry::check_asymmetry;
use super::thresholds::{Bands, ThresholdTable};
use super::tier::Tier;
use super::types::{
    BalanceInput, GripInput, LegReach, PairedSides, ShoulderGripInput, Side, SideResult, TestKind,
    TestResult,
};

pub fn evaluate_breath_hold(secs: f64, table: &ThresholdTable) -> TestResult {
    single(
        TestKind::BreathHold,
        format!("{secs}s"),
        table.breath_hold_secs.classify(secs),
        recommendations::breath_hold,
    )
}

pub fn evaluate_grip(input: &GripInput, table: &ThresholdTable) -> TestResult {
    paired(
        TestKind::Grip,
        format!("R: {}kg, L: {}kg", input.right_kg, input.left_kg),
        Pair {
            right: input.right_kg,
            left: input.left_kg,
            bands: table.grip_kg(input.sex),
            threshold_pct: table.grip_asymmetry_pct,
        },
        recommendations::grip,
    )
}

pub fn evaluate_pulse_recovery(zone_pct: f64, table: &ThresholdTable) -> TestResult {
    single(
        TestKind::PulseRecovery,
        format!("Zone {}", pulse_zone_label(zone_pct)),
        table.pulse_zone_pct.classify(zone_pct),
        recommendations::pulse_recovery,
    )
}

pub fn evaluate_leg_flexibility(reach: LegReach, table: &ThresholdTable) -> TestResult {
    single(
        TestKind::LegFlexibility,
        reach.label().to_string(),
        table.leg_reach.classify(f64::from(reach.level())),
        recommendations::leg_flexibility,
    )
}

pub fn evaluate_shoulder_flexibility(
    input: &ShoulderGripInput,
    table: &ThresholdTable,
) -> TestResult {
    paired(
        TestKind::ShoulderFlexibility,
        format!("R: {}, L: {}", input.right.label(), input.left.label()),
        Pair {
            right: f64::from(input.right.level()),
            left: f64::from(input.left.level()),
            bands: &table.shoulder_grip,
            threshold_pct: table.shoulder_asymmetry_pct,
        },
        recommendations::shoulder_flexibility,
    )
}

pub fn evaluate_balance(input: &BalanceInput, table: &ThresholdTable) -> TestResult {
    paired(
        TestKind::Balance,
        format!("R: {}s, L: {}s", input.right_secs, input.left_secs),
        Pair {
            right: input.right_secs,
            left: input.left_secs,
            bands: &table.balance_secs,
            threshold_pct: table.balance_asymmetry_pct,
        },
        recommendations::balance,
    )
}

/// Zone label for the pulse options offered by the form; other values print as-is.
fn pulse_zone_label(zone_pct: f64) -> String {
    match zone_pct {
        95.0 => "90-100%".to_string(),
        80.0 => "80%".to_string(),
        65.0 => "60-70%".to_string(),
        45.0 => "<50%".to_string(),
        other => format!("{other}%"),
    }
}

fn single(
    kind: TestKind,
    value: String,
    tier: Tier,
    recommend: fn(Tier) -> &'static str,
) -> TestResult {
    TestResult {
        kind,
        value,
        score: f64::from(tier.score()),
        tier,
        recommendation: recommend(tier),
        asymmetry_detected: false,
        sides: None,
    }
}

struct Pair<'a> {
    right: f64,
    left: f64,
    bands: &'a Bands,
    threshold_pct: f64,
}

fn paired(
    kind: TestKind,
    value: String,
    pair: Pair<'_>,
    recommend: fn(Tier) -> &'static str,
) -> TestResult {
    let check = check_asymmetry(pair.right, pair.left, pair.threshold_pct);
    let evaluate_side = |side: Side, raw: f64| {
        let tier = pair.bands.classify(raw);
        SideResult {
            side,
            tier,
            score: tier.score(),
            recommendation: recommend(tier),
        }
    };
    let right = evaluate_side(Side::Right, pair.right);
    let left = evaluate_side(Side::Left, pair.left);
    let midpoint = pair.bands.classify((pair.right + pair.left) / 2.0);

    TestResult {
        kind,
        value,
        score: (f64::from(right.score) + f64::from(left.score)) / 2.0,
        tier: midpoint,
        recommendation: recommend(midpoint),
        asymmetry_detected: check.asymmetric,
        sides: Some(PairedSides {
            right,
            left,
            difference_pct: check.difference_pct,
            threshold_pct: pair.threshold_pct,
            weaker_side: check.asymmetric.then_some(check.weaker_side),
            advisory: check.asymmetric.then_some(ASYMMETRY_ADVISORY),
        }),
    }
}
