//! Test-only helpers for constructing assessment inputs.

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::types::{
    AssessmentInput, BalanceInput, GripInput, LegReach, Sex, ShoulderGrip, ShoulderGripInput,
};

/// The measurements written by `fitcheck template`, as a typed value.
pub fn sample_input() -> AssessmentInput {
    AssessmentInput {
        breath_hold_secs: 95.0,
        grip: GripInput {
            sex: Sex::Male,
            right_kg: 50.0,
            left_kg: 48.0,
        },
        pulse_zone_pct: 65.0,
        leg_reach: LegReach::FloorFists,
        shoulder_grip: ShoulderGripInput {
            right: ShoulderGrip::FullGrip,
            left: ShoulderGrip::LooseGrip,
        },
        balance: BalanceInput {
            right_secs: 20.0,
            left_secs: 60.0,
        },
    }
}

/// Write `contents` to `dir/name` and return the path.
pub fn write_fixture(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

/// Temporary directory holding the sample input as `assessment.toml`.
pub fn sample_input_dir() -> (tempfile::TempDir, PathBuf) {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = write_fixture(temp.path(), "assessment.toml", crate::io::input::SAMPLE_INPUT);
    (temp, path)
}
