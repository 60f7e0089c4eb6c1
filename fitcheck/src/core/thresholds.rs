//! Fixed, versioned threshold tables used by the evaluators.
//!
//! Tables are compile-time constants. A revision of the scoring rules is a new
//! constant with its own `version`; every aggregate records the version it was
//! scored with.

use serde::Serialize;

use super::tier::Tier;
use super::types::Sex;

/// Boundaries for the three upper tiers of one measurement.
///
/// Anything that misses the `Average` boundary falls through to `Minimal`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "direction", rename_all = "snake_case")]
pub enum Bands {
    /// Larger values are better. `Excellent` is exclusive (`value > excellent_above`),
    /// the other two tiers are inclusive.
    HigherIsBetter {
        excellent_above: f64,
        good_from: f64,
        average_from: f64,
    },
    /// Smaller values are better. Every tier includes its ceiling.
    LowerIsBetter {
        excellent_to: f64,
        good_to: f64,
        average_to: f64,
    },
    /// Discrete levels. A value reaches a tier when it is at least that level.
    AtLeast {
        excellent_from: f64,
        good_from: f64,
        average_from: f64,
    },
}

impl Bands {
    /// Select the single tier `value` falls into.
    pub fn classify(&self, value: f64) -> Tier {
        match *self {
            Bands::HigherIsBetter {
                excellent_above,
                good_from,
                average_from,
            } => {
                if value > excellent_above {
                    Tier::Excellent
                } else if value >= good_from {
                    Tier::Good
                } else if value >= average_from {
                    Tier::Average
                } else {
                    Tier::Minimal
                }
            }
            Bands::LowerIsBetter {
                excellent_to,
                good_to,
                average_to,
            } => {
                if value <= excellent_to {
                    Tier::Excellent
                } else if value <= good_to {
                    Tier::Good
                } else if value <= average_to {
                    Tier::Average
                } else {
                    Tier::Minimal
                }
            }
            Bands::AtLeast {
                excellent_from,
                good_from,
                average_from,
            } => {
                if value >= excellent_from {
                    Tier::Excellent
                } else if value >= good_from {
                    Tier::Good
                } else if value >= average_from {
                    Tier::Average
                } else {
                    Tier::Minimal
                }
            }
        }
    }

    /// Human-readable condition for `tier`, e.g. `> 90` or `<= 70`.
    pub fn describe(&self, tier: Tier) -> String {
        let (excellent, good, average, op_top, op_rest, fallback) = match *self {
            Bands::HigherIsBetter {
                excellent_above,
                good_from,
                average_from,
            } => (excellent_above, good_from, average_from, ">", ">=", "<"),
            Bands::LowerIsBetter {
                excellent_to,
                good_to,
                average_to,
            } => (excellent_to, good_to, average_to, "<=", "<=", ">"),
            Bands::AtLeast {
                excellent_from,
                good_from,
                average_from,
            } => (excellent_from, good_from, average_from, ">=", ">=", "<"),
        };
        match tier {
            Tier::Excellent => format!("{op_top} {excellent}"),
            Tier::Good => format!("{op_rest} {good}"),
            Tier::Average => format!("{op_rest} {average}"),
            Tier::Minimal => format!("{fallback} {average}"),
        }
    }
}

/// Complete set of constants for one revision of the scoring rules.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThresholdTable {
    pub version: &'static str,
    pub breath_hold_secs: Bands,
    pub grip_male_kg: Bands,
    pub grip_female_kg: Bands,
    pub pulse_zone_pct: Bands,
    pub leg_reach: Bands,
    pub shoulder_grip: Bands,
    pub balance_secs: Bands,
    /// Percentage difference above which a paired test is asymmetric.
    pub grip_asymmetry_pct: f64,
    pub shoulder_asymmetry_pct: f64,
    pub balance_asymmetry_pct: f64,
}

/// Level boundaries for the categorical reach and grip tests.
const LEVELS: Bands = Bands::AtLeast {
    excellent_from: 100.0,
    good_from: 75.0,
    average_from: 50.0,
};

impl ThresholdTable {
    /// Canonical table.
    pub const V4: ThresholdTable = ThresholdTable {
        version: "v4",
        breath_hold_secs: Bands::HigherIsBetter {
            excellent_above: 90.0,
            good_from: 60.0,
            average_from: 45.0,
        },
        grip_male_kg: Bands::HigherIsBetter {
            excellent_above: 60.0,
            good_from: 45.0,
            average_from: 40.0,
        },
        grip_female_kg: Bands::HigherIsBetter {
            excellent_above: 30.0,
            good_from: 25.0,
            average_from: 15.0,
        },
        pulse_zone_pct: Bands::LowerIsBetter {
            excellent_to: 50.0,
            good_to: 70.0,
            average_to: 80.0,
        },
        leg_reach: LEVELS,
        shoulder_grip: LEVELS,
        balance_secs: Bands::HigherIsBetter {
            excellent_above: 50.0,
            good_from: 40.0,
            average_from: 30.0,
        },
        grip_asymmetry_pct: 25.0,
        shoulder_asymmetry_pct: 25.0,
        balance_asymmetry_pct: 25.0,
    };

    /// Named band sets in report order.
    pub fn rows(&self) -> [(&'static str, &Bands); 7] {
        [
            ("breath_hold_secs", &self.breath_hold_secs),
            ("grip_male_kg", &self.grip_male_kg),
            ("grip_female_kg", &self.grip_female_kg),
            ("pulse_zone_pct", &self.pulse_zone_pct),
            ("leg_reach", &self.leg_reach),
            ("shoulder_grip", &self.shoulder_grip),
            ("balance_secs", &self.balance_secs),
        ]
    }

    pub fn grip_kg(&self, sex: Sex) -> &Bands {
        match sex {
            Sex::Male => &self.grip_male_kg,
            Sex::Female => &self.grip_female_kg,
        }
    }
}

impl Default for ThresholdTable {
    fn default() -> Self {
        Self::V4
    }
}
