//! The harvest → classify → prioritize → report cycle.
//!
//! `prioritize` is the deterministic core path (aggregate + rank) over
//! already-classified records. `Pipeline` drives one full batch through the
//! collaborator boundaries. Each batch owns its own record collection, so
//! concurrent batches need no locking.

use std::sync::Arc;

use tracing::{info, warn};

use civicpulse_common::{
    AnalysisReport, CivicPulseError, ClassifiedRecord, RankedIssue, WeightPolicy,
};

use crate::aggregate::aggregate;
use crate::rank::rank;
use crate::sentiment;
use crate::traits::{IssueClassifier, ReportRenderer, SnippetSource};

/// Aggregate classified records and rank the resulting groups.
/// The core-only path: pure, synchronous, no collaborators touched.
pub fn prioritize(
    records: &[ClassifiedRecord],
    weights: &WeightPolicy,
) -> Result<Vec<RankedIssue>, CivicPulseError> {
    // Validate the policy before grouping — fail fast, no partial work.
    weights.validate()?;
    let groups = aggregate(records)?;
    rank(&groups, weights)
}

/// Runs full analysis cycles through the three collaborator boundaries.
pub struct Pipeline {
    source: Arc<dyn SnippetSource>,
    classifier: Arc<dyn IssueClassifier>,
    reporter: Arc<dyn ReportRenderer>,
}

impl Pipeline {
    pub fn new(
        source: Arc<dyn SnippetSource>,
        classifier: Arc<dyn IssueClassifier>,
        reporter: Arc<dyn ReportRenderer>,
    ) -> Self {
        Self {
            source,
            classifier,
            reporter,
        }
    }

    /// Run one batch end-to-end: retrieve snippets, tag and score each one,
    /// group, rank, and render the final report.
    pub async fn analyze(
        &self,
        query: &str,
        weights: &WeightPolicy,
    ) -> Result<AnalysisReport, CivicPulseError> {
        weights.validate()?;

        let snippets = self
            .source
            .search(query)
            .await
            .map_err(|e| CivicPulseError::Harvest(e.to_string()))?;
        if snippets.is_empty() {
            warn!(query, "Search returned no snippets");
            return Err(CivicPulseError::EmptyInput);
        }
        info!(query, snippets = snippets.len(), "Harvest complete");

        let labels = self
            .classifier
            .classify(&snippets)
            .await
            .map_err(|e| CivicPulseError::Classification(e.to_string()))?;
        if labels.len() != snippets.len() {
            return Err(CivicPulseError::Classification(format!(
                "expected {} labels, got {}",
                snippets.len(),
                labels.len()
            )));
        }

        let records: Vec<ClassifiedRecord> = snippets
            .iter()
            .zip(labels)
            .map(|(snippet, issue_type)| {
                let scored = sentiment::score(&snippet.text);
                ClassifiedRecord {
                    issue_type: Some(issue_type),
                    severity_score: Some(scored.severity_score),
                    sentiment: Some(scored.sentiment),
                    urgency: Some(scored.urgency),
                    location: snippet.location.clone(),
                    observed_at: snippet.observed_at,
                    link: snippet.link.clone(),
                }
            })
            .collect();

        let ranked = prioritize(&records, weights)?;
        info!(
            query,
            records = records.len(),
            issues = ranked.len(),
            "Prioritization complete"
        );

        let narrative = self
            .reporter
            .render(query, &ranked)
            .await
            .map_err(|e| CivicPulseError::Reporting(e.to_string()))?;

        Ok(AnalysisReport {
            query: query.to_string(),
            ranked,
            narrative,
        })
    }
}
