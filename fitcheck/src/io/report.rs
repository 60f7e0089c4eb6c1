//! Report rendering for an [`AggregateResult`].
//!
//! Text and markdown reports and the share message are minijinja templates fed
//! a [`ReportView`]: the aggregate with every number already formatted for
//! display. JSON reports serialize the aggregate itself.

use anyhow::{Context, Result};
use minijinja::Environment;
use serde::Serialize;
use tracing::debug;

use super::config::{ReportFormat, ShareConfig};
use crate::core::aggregate::AggregateResult;
use crate::core::types::TestResult;

const TEXT_TEMPLATE: &str = include_str!("templates/report.txt");
const MARKDOWN_TEMPLATE: &str = include_str!("templates/report.md");
const SHARE_TEMPLATE: &str = include_str!("templates/share.txt");

/// Round half away from zero to one decimal, e.g. `31.25` -> `31.3`.
pub fn display_score(score: f64) -> String {
    format!("{:.1}", (score * 10.0).round() / 10.0)
}

/// Display-ready view of one test.
#[derive(Debug, Clone, Serialize)]
pub struct TestView {
    pub number: &'static str,
    pub title: &'static str,
    pub short_title: &'static str,
    pub value: String,
    pub score: String,
    pub asymmetry: bool,
    pub recommendation: &'static str,
    /// Per-side advice; present only when the test is asymmetric.
    pub split: Option<SplitView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SplitView {
    pub right_score: u8,
    pub right_recommendation: &'static str,
    pub left_score: u8,
    pub left_recommendation: &'static str,
    pub weaker_side: String,
    pub advisory: &'static str,
}

impl TestView {
    fn from_result(result: &TestResult) -> Self {
        let split = result.sides.as_ref().and_then(|sides| {
            let advisory = sides.advisory?;
            Some(SplitView {
                right_score: sides.right.score,
                right_recommendation: sides.right.recommendation,
                left_score: sides.left.score,
                left_recommendation: sides.left.recommendation,
                weaker_side: sides
                    .weaker_side
                    .map(|side| side.to_string())
                    .unwrap_or_default(),
                advisory,
            })
        });
        Self {
            number: result.kind.number(),
            title: result.kind.title(),
            short_title: result.kind.short_title(),
            value: result.value.clone(),
            score: display_score(result.score),
            asymmetry: result.asymmetry_detected,
            recommendation: result.recommendation,
            split,
        }
    }
}

/// Display-ready view of the whole assessment.
#[derive(Debug, Clone, Serialize)]
pub struct ReportView {
    pub overall_score: String,
    pub band: &'static str,
    pub band_description: &'static str,
    pub table_version: &'static str,
    pub tests: Vec<TestView>,
    pub share_link: Option<String>,
}

impl ReportView {
    pub fn new(result: &AggregateResult, share_link: Option<String>) -> Self {
        Self {
            overall_score: display_score(result.overall_score),
            band: result.overall_band.label(),
            band_description: result.overall_band.description(),
            table_version: result.table_version,
            tests: result.tests().into_iter().map(TestView::from_result).collect(),
            share_link,
        }
    }
}

/// Template engine wrapper around minijinja.
pub struct ReportEngine {
    env: Environment<'static>,
}

impl Default for ReportEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportEngine {
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.add_template("report.txt", TEXT_TEMPLATE)
            .expect("text report template should be valid");
        env.add_template("report.md", MARKDOWN_TEMPLATE)
            .expect("markdown report template should be valid");
        env.add_template("share.txt", SHARE_TEMPLATE)
            .expect("share template should be valid");
        Self { env }
    }

    pub fn render(&self, name: &str, view: &ReportView) -> Result<String> {
        let template = self.env.get_template(name)?;
        let rendered = template
            .render(view)
            .with_context(|| format!("render {name}"))?;
        Ok(rendered)
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    result: &'a AggregateResult,
    overall_score_display: String,
    share_message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    share_link: Option<String>,
}

/// Render `result` in `format`.
pub fn render_report(
    result: &AggregateResult,
    format: ReportFormat,
    share: &ShareConfig,
) -> Result<String> {
    let engine = ReportEngine::new();
    let link = if share.include_link {
        Some(engine.share_link(result, &share.base_url)?.to_string())
    } else {
        None
    };
    debug!(?format, with_link = link.is_some(), "rendering report");

    match format {
        ReportFormat::Text => engine.render("report.txt", &ReportView::new(result, link)),
        ReportFormat::Markdown => engine.render("report.md", &ReportView::new(result, link)),
        ReportFormat::Json => {
            let report = JsonReport {
                result,
                overall_score_display: display_score(result.overall_score),
                share_message: engine.share_message(result)?,
                share_link: link,
            };
            serde_json::to_string_pretty(&report).context("serialize json report")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::aggregate::evaluate;
    use crate::core::recommendations::{ASYMMETRY_ADVISORY, balance, grip};
    use crate::core::thresholds::ThresholdTable;
    use crate::core::tier::Tier;
    use crate::test_support::sample_input;

    fn sample_result() -> AggregateResult {
        evaluate(&sample_input(), &ThresholdTable::V4).expect("evaluate")
    }

    #[test]
    fn display_rounds_half_away_from_zero() {
        assert_eq!(display_score(75.0), "75.0");
        assert_eq!(display_score(62.5), "62.5");
        assert_eq!(display_score(31.25), "31.3");
        assert_eq!(display_score(475.0 / 6.0), "79.2");
    }

    #[test]
    fn view_splits_only_asymmetric_tests() {
        let view = ReportView::new(&sample_result(), None);
        assert_eq!(view.tests.len(), 6);
        assert_eq!(view.overall_score, "79.2");
        assert_eq!(view.band, "Good");

        let grip_view = &view.tests[1];
        assert!(grip_view.split.is_none());
        assert_eq!(grip_view.recommendation, grip(Tier::Good));

        let balance_view = &view.tests[5];
        let split = balance_view.split.as_ref().expect("split");
        assert_eq!(split.right_score, 25);
        assert_eq!(split.left_score, 100);
        assert_eq!(split.weaker_side, "Right");
        assert_eq!(split.right_recommendation, balance(Tier::Minimal));
    }

    #[test]
    fn text_report_contains_summary_and_recommendations() {
        let rendered =
            render_report(&sample_result(), ReportFormat::Text, &ShareConfig::default())
                .expect("render");
        assert!(rendered.contains("Overall Score: 79.2%"));
        assert!(rendered.contains("Good! You've made significant progress."));
        assert!(rendered.contains("1. Cardiorespiratory Endurance: 95s => 100.0%"));
        assert!(rendered.contains("5. Balance: R: 20s, L: 60s [Asymmetry] => 62.5%"));
        assert!(rendered.contains("Right Side (25%)"));
        assert!(rendered.contains("Left Side (100%)"));
        assert!(rendered.contains(ASYMMETRY_ADVISORY));
        assert!(rendered.contains("Weaker side: Right."));
        assert!(rendered.contains("Send results: https://wa.me/?text="));
        assert!(rendered.contains("Thresholds: v4"));
    }

    #[test]
    fn markdown_report_has_table_rows() {
        let share = ShareConfig {
            include_link: false,
            ..ShareConfig::default()
        };
        let rendered =
            render_report(&sample_result(), ReportFormat::Markdown, &share).expect("render");
        assert!(rendered.starts_with("# Results Summary"));
        assert!(rendered.contains("| 3. Cardio (Leg Swings) | Zone 60-70% | 75.0% |"));
        assert!(rendered.contains("### Test 4b: Flexibility (Arms/Shoulders)"));
        assert!(!rendered.contains("Send results"));
    }

    #[test]
    fn report_link_matches_share_link() {
        let result = sample_result();
        let share = ShareConfig::default();
        let rendered = render_report(&result, ReportFormat::Json, &share).expect("render");
        let value: serde_json::Value = serde_json::from_str(&rendered).expect("json");
        let engine = ReportEngine::new();
        let link = engine.share_link(&result, &share.base_url).expect("link");
        assert_eq!(value["share_link"], link.as_str());
        assert_eq!(
            value["share_message"],
            engine.share_message(&result).expect("message")
        );
    }

    #[test]
    fn json_report_carries_aggregate_fields() {
        let rendered =
            render_report(&sample_result(), ReportFormat::Json, &ShareConfig::default())
                .expect("render");
        let value: serde_json::Value = serde_json::from_str(&rendered).expect("json");
        assert_eq!(value["overall_band"], "good");
        assert_eq!(value["overall_score_display"], "79.2");
        assert_eq!(value["balance"]["asymmetry_detected"], true);
        assert_eq!(value["balance"]["sides"]["weaker_side"], "right");
        assert_eq!(value["breath_hold"]["score"], 100.0);
        assert_eq!(value["table_version"], "v4");
        assert!(value["share_link"].as_str().expect("link").starts_with("https://wa.me/"));
    }
}
