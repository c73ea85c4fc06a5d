// Trait abstractions for the pipeline's external collaborators.
//
// SnippetSource — web retrieval (the Harvesting collaborator).
// IssueClassifier — free-text issue-type tagging (model-driven, excluded
//   from the core's own logic).
// ReportRenderer — prose rendering of the ranked list (the Reporting
//   collaborator).
//
// These enable deterministic testing with the mocks in `testing`:
// no network, no model calls.

use anyhow::Result;
use async_trait::async_trait;

use civicpulse_common::{RankedIssue, TextSnippet};

#[async_trait]
pub trait SnippetSource: Send + Sync {
    /// Retrieve raw text snippets for a search query.
    async fn search(&self, query: &str) -> Result<Vec<TextSnippet>>;
}

#[async_trait]
pub trait IssueClassifier: Send + Sync {
    /// Assign one issue-type label per snippet, in snippet order.
    /// Unclear snippets are labeled "General Inquiry".
    async fn classify(&self, snippets: &[TextSnippet]) -> Result<Vec<String>>;
}

#[async_trait]
pub trait ReportRenderer: Send + Sync {
    /// Render the ranked list as a report a local official can act on.
    async fn render(&self, query: &str, ranked: &[RankedIssue]) -> Result<String>;
}
