// Deterministic mocks for the three collaborator boundaries.
//
// - FixedSource (SnippetSource) — query → canned snippet list
// - KeywordClassifier (IssueClassifier) — substring match → label
// - TemplateRenderer (ReportRenderer) — plain-text top-N listing
//
// Pipeline tests run against these: no network, no model calls.

use std::collections::HashMap;

use anyhow::{bail, Result};
use async_trait::async_trait;

use civicpulse_common::{RankedIssue, TextSnippet};

use crate::traits::{IssueClassifier, ReportRenderer, SnippetSource};

/// Label assigned when no keyword matches.
pub const FALLBACK_LABEL: &str = "General Inquiry";

/// Canned search results keyed by query. Errors for unregistered queries.
#[derive(Default)]
pub struct FixedSource {
    results: HashMap<String, Vec<TextSnippet>>,
}

impl FixedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_query(mut self, query: &str, snippets: Vec<TextSnippet>) -> Self {
        self.results.insert(query.to_string(), snippets);
        self
    }
}

#[async_trait]
impl SnippetSource for FixedSource {
    async fn search(&self, query: &str) -> Result<Vec<TextSnippet>> {
        match self.results.get(query) {
            Some(snippets) => Ok(snippets.clone()),
            None => bail!("no canned results for query {query:?}"),
        }
    }
}

/// Labels snippets by case-insensitive keyword containment, first match
/// wins in registration order.
pub struct KeywordClassifier {
    rules: Vec<(String, String)>,
}

impl KeywordClassifier {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn rule(mut self, keyword: &str, label: &str) -> Self {
        self.rules.push((keyword.to_lowercase(), label.to_string()));
        self
    }
}

impl Default for KeywordClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IssueClassifier for KeywordClassifier {
    async fn classify(&self, snippets: &[TextSnippet]) -> Result<Vec<String>> {
        Ok(snippets
            .iter()
            .map(|snippet| {
                let text = snippet.text.to_lowercase();
                self.rules
                    .iter()
                    .find(|(keyword, _)| text.contains(keyword))
                    .map(|(_, label)| label.clone())
                    .unwrap_or_else(|| FALLBACK_LABEL.to_string())
            })
            .collect())
    }
}

/// Drops every other label so the pipeline's count check has something
/// to reject.
pub struct MiscountingClassifier;

#[async_trait]
impl IssueClassifier for MiscountingClassifier {
    async fn classify(&self, snippets: &[TextSnippet]) -> Result<Vec<String>> {
        Ok(snippets
            .iter()
            .step_by(2)
            .map(|_| FALLBACK_LABEL.to_string())
            .collect())
    }
}

/// Plain-text renderer: one line per ranked issue.
pub struct TemplateRenderer;

#[async_trait]
impl ReportRenderer for TemplateRenderer {
    async fn render(&self, query: &str, ranked: &[RankedIssue]) -> Result<String> {
        let mut out = format!("Priority report for {query:?}:\n");
        for (i, issue) in ranked.iter().enumerate() {
            out.push_str(&format!(
                "{}. {} (reports: {}, avg severity: {:.2}, priority: {:.4})\n",
                i + 1,
                issue.issue_type,
                issue.total_frequency,
                issue.average_severity,
                issue.priority_score
            ));
        }
        Ok(out)
    }
}
