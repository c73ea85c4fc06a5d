//! Concrete collaborator implementations behind the core's trait boundaries:
//! Serper web search for harvesting, an LLM for issue-type tagging and for
//! rendering the final prose report.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use tracing::debug;

use civicpulse_common::{RankedIssue, TextSnippet};
use civicpulse_core::traits::{IssueClassifier, ReportRenderer, SnippetSource};
use serper_client::SerperClient;

use crate::llm::LlmClient;

/// How many ranked issues the prose report covers.
const REPORT_TOP_N: usize = 5;

// ---------------------------------------------------------------------------
// SerperSource — Harvesting
// ---------------------------------------------------------------------------

pub struct SerperSource {
    client: SerperClient,
}

impl SerperSource {
    pub fn new(client: SerperClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SnippetSource for SerperSource {
    async fn search(&self, query: &str) -> Result<Vec<TextSnippet>> {
        let results = self.client.search(query).await?;
        Ok(results
            .into_iter()
            .filter_map(|r| {
                // A hit with neither snippet nor title has no scoreable text
                let text = r.snippet.clone().or_else(|| r.title.clone())?;
                Some(TextSnippet {
                    text,
                    title: r.title,
                    link: r.link,
                    location: None,
                    observed_at: None,
                })
            })
            .collect())
    }
}

// ---------------------------------------------------------------------------
// LlmClassifier — issue-type tagging
// ---------------------------------------------------------------------------

const CLASSIFIER_SYSTEM: &str = "\
You tag raw text snippets about local community issues. For each snippet, \
assign a single, clear issue-type label (e.g. 'Pothole', 'Flooding', \
'Theft', 'Noise Complaint'). If the issue is unclear, use 'General Inquiry'. \
Reply with ONLY a JSON array of strings, one label per snippet, in the same \
order as the input. No prose, no code fences.";

pub struct LlmClassifier {
    llm: LlmClient,
}

impl LlmClassifier {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl IssueClassifier for LlmClassifier {
    async fn classify(&self, snippets: &[TextSnippet]) -> Result<Vec<String>> {
        let numbered: Vec<String> = snippets
            .iter()
            .enumerate()
            .map(|(i, s)| format!("{}. {}", i + 1, s.text))
            .collect();
        let user = format!("Snippets:\n{}", numbered.join("\n"));

        let reply = self.llm.complete(CLASSIFIER_SYSTEM, &user).await?;
        let labels: Vec<String> = serde_json::from_str(strip_fences(&reply))
            .map_err(|e| anyhow!("unparseable classifier reply: {e}: {reply}"))?;

        debug!(snippets = snippets.len(), labels = labels.len(), "Classified batch");
        Ok(labels)
    }
}

// ---------------------------------------------------------------------------
// LlmReporter — prose rendering
// ---------------------------------------------------------------------------

const REPORTER_SYSTEM: &str = "\
You write concise reports for local government officials. Given a ranked \
list of community issues, present the most urgent ones clearly: issue type, \
report count, average severity, and priority score, with a one-line takeaway \
per issue. Plain language, no jargon.";

pub struct LlmReporter {
    llm: LlmClient,
}

impl LlmReporter {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl ReportRenderer for LlmReporter {
    async fn render(&self, query: &str, ranked: &[RankedIssue]) -> Result<String> {
        let top: Vec<&RankedIssue> = ranked.iter().take(REPORT_TOP_N).collect();
        let user = format!(
            "Analysis goal: {query}\n\nRanked issues (highest priority first):\n{}",
            serde_json::to_string_pretty(&top)?
        );
        self.llm.complete(REPORTER_SYSTEM, &user).await
    }
}

// ---------------------------------------------------------------------------

/// Models sometimes wrap JSON in markdown fences despite instructions.
fn strip_fences(reply: &str) -> &str {
    let trimmed = reply.trim();
    let trimmed = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);
    trimmed.strip_suffix("```").unwrap_or(trimmed).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_fences_handles_plain_and_fenced() {
        assert_eq!(strip_fences(r#"["Pothole"]"#), r#"["Pothole"]"#);
        assert_eq!(
            strip_fences("```json\n[\"Pothole\"]\n```"),
            r#"["Pothole"]"#
        );
        assert_eq!(strip_fences("```\n[]\n```"), "[]");
    }
}
