//! Share message and messaging deep link.

use anyhow::{Context, Result};
use url::Url;

use super::report::{ReportEngine, ReportView};
use crate::core::aggregate::AggregateResult;

impl ReportEngine {
    pub fn share_message(&self, result: &AggregateResult) -> Result<String> {
        self.render("share.txt", &ReportView::new(result, None))
    }

    pub fn share_link(&self, result: &AggregateResult, base_url: &str) -> Result<Url> {
        let message = self.share_message(result)?;
        Url::parse_with_params(base_url, &[("text", message.as_str())])
            .with_context(|| format!("build share link from {base_url}"))
    }
}

/// Plain-text summary suitable for pasting into a chat.
pub fn share_message(result: &AggregateResult) -> Result<String> {
    ReportEngine::new().share_message(result)
}

/// `base_url` with the share message percent-encoded into its `text` parameter.
pub fn share_link(result: &AggregateResult, base_url: &str) -> Result<Url> {
    ReportEngine::new().share_link(result, base_url)
}
