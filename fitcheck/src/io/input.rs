//! Assessment input loading with schema + invariant validation.
//!
//! Input files are TOML (default) or JSON (`.json` extension). Both are parsed
//! into a JSON value, checked against the embedded v1 schema, deserialized and
//! finally checked against the semantic invariants in [`crate::core::invariants`].

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use jsonschema::validator_for;
use serde_json::Value;
use tracing::debug;

use crate::core::invariants::{InvalidInput, validate_invariants};
use crate::core::types::AssessmentInput;

/// Starter input written by `fitcheck template`.
pub const SAMPLE_INPUT: &str = include_str!("templates/sample_input.toml");

const INPUT_SCHEMA: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../schemas/assessment_input/v1.schema.json"
));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Toml,
    Json,
}

impl InputFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => InputFormat::Json,
            _ => InputFormat::Toml,
        }
    }
}

/// Outcome of the validation gate.
#[derive(Debug, Clone, PartialEq)]
pub enum InputOutcome {
    Valid(AssessmentInput),
    Invalid(InvalidInput),
}

impl InputOutcome {
    /// Convert into a `Result`, turning rejections into [`InvalidInput`] errors.
    pub fn into_result(self) -> Result<AssessmentInput> {
        match self {
            InputOutcome::Valid(input) => Ok(input),
            InputOutcome::Invalid(invalid) => Err(invalid.into()),
        }
    }
}

/// Read and validate an input file.
///
/// I/O failures are errors; malformed or out-of-range content is an
/// [`InputOutcome::Invalid`].
pub fn check_input(path: &Path) -> Result<InputOutcome> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read input {}", path.display()))?;
    let format = InputFormat::from_path(path);
    debug!(path = %path.display(), ?format, "input read");
    check_input_str(&contents, format)
}

/// Read, validate and return an input file, failing closed on any violation.
pub fn load_input(path: &Path) -> Result<AssessmentInput> {
    check_input(path)?
        .into_result()
        .with_context(|| format!("validate input {}", path.display()))
}

/// Validate input already held in memory.
pub fn check_input_str(contents: &str, format: InputFormat) -> Result<InputOutcome> {
    let value = match parse_value(contents, format) {
        Ok(value) => value,
        Err(message) => return Ok(invalid(vec![message])),
    };

    let schema_errors = validate_schema(&value)?;
    if !schema_errors.is_empty() {
        return Ok(invalid(schema_errors));
    }

    let input: AssessmentInput = match serde_json::from_value(value) {
        Ok(input) => input,
        Err(err) => return Ok(invalid(vec![format!("deserialize input: {err}")])),
    };

    let violations = validate_invariants(&input);
    if !violations.is_empty() {
        return Ok(invalid(violations));
    }
    Ok(InputOutcome::Valid(input))
}

/// Write the starter input to `path`. Existing files are kept unless `force`.
pub fn write_template(path: &Path, force: bool) -> Result<()> {
    if !force && path.exists() {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    fs::write(path, SAMPLE_INPUT).with_context(|| format!("write {}", path.display()))
}

fn invalid(violations: Vec<String>) -> InputOutcome {
    InputOutcome::Invalid(InvalidInput { violations })
}

fn parse_value(contents: &str, format: InputFormat) -> Result<Value, String> {
    match format {
        InputFormat::Toml => {
            toml::from_str::<Value>(contents).map_err(|err| format!("parse toml: {err}"))
        }
        InputFormat::Json => {
            serde_json::from_str::<Value>(contents).map_err(|err| format!("parse json: {err}"))
        }
    }
}

/// Validate against the embedded schema (Draft 2020-12).
fn validate_schema(instance: &Value) -> Result<Vec<String>> {
    let schema: Value = serde_json::from_str(INPUT_SCHEMA).context("parse input schema")?;
    let compiled = validator_for(&schema).map_err(|err| anyhow!("invalid schema: {}", err))?;
    Ok(compiled
        .iter_errors(instance)
        .map(|err| err.to_string())
        .collect())
}
