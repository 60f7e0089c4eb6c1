//! Shared deterministic types for the scoring core.
//!
//! Inputs are plain data deserialized from the assessment file. Results are
//! produced once per evaluation and never mutated; they serialize directly
//! into JSON reports.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::tier::Tier;

/// Biological sex, used only to pick grip strength thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

/// Forward-bend reach, recorded as the level the form offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "u8")]
pub enum LegReach {
    Knee,
    ShinOrFoot,
    FloorFists,
    FloorPalms,
}

impl LegReach {
    pub fn level(self) -> u8 {
        match self {
            LegReach::Knee => 25,
            LegReach::ShinOrFoot => 50,
            LegReach::FloorFists => 75,
            LegReach::FloorPalms => 100,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LegReach::Knee => "Reach to knee",
            LegReach::ShinOrFoot => "Reach to shin/foot",
            LegReach::FloorFists => "Reach to floor (fists)",
            LegReach::FloorPalms => "Reach to floor (palms)",
        }
    }
}

/// Levels arrive as JSON/TOML numbers, so integral floats such as `75.0` are accepted.
impl TryFrom<f64> for LegReach {
    type Error = String;

    fn try_from(level: f64) -> Result<Self, Self::Error> {
        match level {
            25.0 => Ok(LegReach::Knee),
            50.0 => Ok(LegReach::ShinOrFoot),
            75.0 => Ok(LegReach::FloorFists),
            100.0 => Ok(LegReach::FloorPalms),
            other => Err(format!("leg reach level must be 25, 50, 75 or 100 (got {other})")),
        }
    }
}

impl From<LegReach> for u8 {
    fn from(reach: LegReach) -> Self {
        reach.level()
    }
}

/// Behind-the-back shoulder grip for one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "u8")]
pub enum ShoulderGrip {
    NoTouch,
    Touch,
    LooseGrip,
    FullGrip,
}

impl ShoulderGrip {
    pub fn level(self) -> u8 {
        match self {
            ShoulderGrip::NoTouch => 25,
            ShoulderGrip::Touch => 50,
            ShoulderGrip::LooseGrip => 75,
            ShoulderGrip::FullGrip => 100,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ShoulderGrip::NoTouch => "Fingers do not touch",
            ShoulderGrip::Touch => "Fingers touch but do not lock",
            ShoulderGrip::LooseGrip => "Fingers form a loose grip",
            ShoulderGrip::FullGrip => "Fingers form a strong full grip",
        }
    }
}

impl TryFrom<f64> for ShoulderGrip {
    type Error = String;

    fn try_from(level: f64) -> Result<Self, Self::Error> {
        match level {
            25.0 => Ok(ShoulderGrip::NoTouch),
            50.0 => Ok(ShoulderGrip::Touch),
            75.0 => Ok(ShoulderGrip::LooseGrip),
            100.0 => Ok(ShoulderGrip::FullGrip),
            other => Err(format!(
                "shoulder grip level must be 25, 50, 75 or 100 (got {other})"
            )),
        }
    }
}

impl From<ShoulderGrip> for u8 {
    fn from(grip: ShoulderGrip) -> Self {
        grip.level()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GripInput {
    pub sex: Sex,
    pub right_kg: f64,
    pub left_kg: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoulderGripInput {
    pub right: ShoulderGrip,
    pub left: ShoulderGrip,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BalanceInput {
    pub right_secs: f64,
    pub left_secs: f64,
}

/// Raw measurements for all six tests. Every field is required.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AssessmentInput {
    /// Stange breath-hold time in seconds.
    pub breath_hold_secs: f64,
    pub grip: GripInput,
    /// Pulse after leg swings, as a percentage of maximum heart rate.
    pub pulse_zone_pct: f64,
    pub leg_reach: LegReach,
    pub shoulder_grip: ShoulderGripInput,
    pub balance: BalanceInput,
}

/// The six tests, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TestKind {
    BreathHold,
    Grip,
    PulseRecovery,
    LegFlexibility,
    ShoulderFlexibility,
    Balance,
}

impl TestKind {
    pub const ALL: [TestKind; 6] = [
        TestKind::BreathHold,
        TestKind::Grip,
        TestKind::PulseRecovery,
        TestKind::LegFlexibility,
        TestKind::ShoulderFlexibility,
        TestKind::Balance,
    ];

    /// Position label used in reports (`1`, `2`, `3`, `4a`, `4b`, `5`).
    pub fn number(self) -> &'static str {
        match self {
            TestKind::BreathHold => "1",
            TestKind::Grip => "2",
            TestKind::PulseRecovery => "3",
            TestKind::LegFlexibility => "4a",
            TestKind::ShoulderFlexibility => "4b",
            TestKind::Balance => "5",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            TestKind::BreathHold => "Cardiorespiratory Endurance",
            TestKind::Grip => "Strength (Dynamometer)",
            TestKind::PulseRecovery => "Cardio (Leg Swings)",
            TestKind::LegFlexibility => "Flexibility (Legs)",
            TestKind::ShoulderFlexibility => "Flexibility (Arms/Shoulders)",
            TestKind::Balance => "Balance",
        }
    }

    /// Compact label for the share message.
    pub fn short_title(self) -> &'static str {
        match self {
            TestKind::BreathHold => "Cardio Endurance",
            TestKind::Grip => "Strength",
            TestKind::PulseRecovery => "Leg Swings",
            TestKind::LegFlexibility => "Flex (Legs)",
            TestKind::ShoulderFlexibility => "Flex (Arms)",
            TestKind::Balance => "Balance",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Right,
    Left,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Right => f.write_str("Right"),
            Side::Left => f.write_str("Left"),
        }
    }
}

/// Tier and recommendation for one side of a paired test.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SideResult {
    pub side: Side,
    pub tier: Tier,
    pub score: u8,
    pub recommendation: &'static str,
}

/// Right/left breakdown for grip, shoulder flexibility and balance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PairedSides {
    pub right: SideResult,
    pub left: SideResult,
    /// Percentage difference between the two raw measurements.
    pub difference_pct: f64,
    pub threshold_pct: f64,
    /// Side with the smaller raw value; set only when asymmetric.
    pub weaker_side: Option<Side>,
    /// Asymmetry advice; set only when asymmetric.
    pub advisory: Option<&'static str>,
}

/// Outcome of one test.
///
/// `tier` and `recommendation` describe the measurement itself, or the
/// midpoint of both sides for paired tests. `score` is the tier score for
/// single tests and the mean of both side scores for paired tests.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestResult {
    pub kind: TestKind,
    pub value: String,
    pub score: f64,
    pub tier: Tier,
    pub recommendation: &'static str,
    pub asymmetry_detected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sides: Option<PairedSides>,
}
