use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::CivicPulseError;

// --- Enums ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    High,
    Normal,
    Low,
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "positive"),
            Sentiment::Negative => write!(f, "negative"),
            Sentiment::Neutral => write!(f, "neutral"),
        }
    }
}

impl std::fmt::Display for Urgency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Urgency::High => write!(f, "high"),
            Urgency::Normal => write!(f, "normal"),
            Urgency::Low => write!(f, "low"),
        }
    }
}

// --- Snippets and scoring ---

/// One raw text report pulled from the public web (news item, community
/// post, complaint). Immutable input; metadata travels with it untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextSnippet {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observed_at: Option<DateTime<Utc>>,
}

impl TextSnippet {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            title: None,
            link: None,
            location: None,
            observed_at: None,
        }
    }
}

/// Deterministic sentiment analysis of one snippet.
///
/// `severity_score` is polarity weighted by subjectivity: a strongly
/// negative, highly subjective complaint yields the most negative score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SentimentResult {
    pub sentiment: Sentiment,
    pub urgency: Urgency,
    /// polarity * subjectivity, in [-1, 1]
    pub severity_score: f64,
    /// Raw subjectivity, in [0, 1]
    pub raw_subjectivity: f64,
}

/// A snippet after the external classifier tagged it with an issue type and
/// the sentiment scorer quantified it. Never mutated after construction.
///
/// `issue_type` and `severity_score` are optional on the wire so the
/// aggregator can reject a malformed record with its position instead of
/// failing opaquely at deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifiedRecord {
    #[serde(default)]
    pub issue_type: Option<String>,
    #[serde(default)]
    pub severity_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<Sentiment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urgency: Option<Urgency>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observed_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl ClassifiedRecord {
    pub fn new(issue_type: impl Into<String>, severity_score: f64) -> Self {
        Self {
            issue_type: Some(issue_type.into()),
            severity_score: Some(severity_score),
            sentiment: None,
            urgency: None,
            location: None,
            observed_at: None,
            link: None,
        }
    }
}

// --- Aggregation and ranking ---

/// Per-issue-type aggregate over one batch. Recomputed fresh on every run;
/// carries no identity across runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct IssueGroup {
    pub issue_type: String,
    /// Count of records carrying this issue_type (≥ 1 by construction).
    pub total_frequency: u32,
    /// Unweighted arithmetic mean of severity_score, in [-1, 1].
    pub average_severity: f64,
}

/// Policy weights for the priority formula. Supplied per run, never derived
/// from data. Must be non-negative and sum to 1.0 within tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WeightPolicy {
    pub severity_weight: f64,
    pub frequency_weight: f64,
}

/// Tolerance for the weights-sum-to-one check.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

impl WeightPolicy {
    pub fn new(severity_weight: f64, frequency_weight: f64) -> Self {
        Self {
            severity_weight,
            frequency_weight,
        }
    }

    /// Reject negative weights or weights that do not sum to 1.0.
    pub fn validate(&self) -> Result<(), CivicPulseError> {
        if self.severity_weight < 0.0 || self.frequency_weight < 0.0 {
            return Err(CivicPulseError::InvalidWeight(format!(
                "weights must be non-negative, got severity={} frequency={}",
                self.severity_weight, self.frequency_weight
            )));
        }
        let sum = self.severity_weight + self.frequency_weight;
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(CivicPulseError::InvalidWeight(format!(
                "weights must sum to 1.0, got {sum}"
            )));
        }
        Ok(())
    }
}

impl Default for WeightPolicy {
    /// Severity-leaning default: immediate public danger over volume.
    fn default() -> Self {
        Self {
            severity_weight: 0.65,
            frequency_weight: 0.35,
        }
    }
}

/// An IssueGroup with its final Priority Score. The pipeline's output is a
/// list of these, sorted descending by `priority_score`, ready for direct
/// rendering or top-N truncation by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RankedIssue {
    pub issue_type: String,
    pub total_frequency: u32,
    pub average_severity: f64,
    /// crisis_factor * severity_weight + norm_frequency * frequency_weight,
    /// in [0, 1] for valid inputs.
    pub priority_score: f64,
}

/// Output of one full harvest → classify → prioritize → report cycle.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AnalysisReport {
    pub query: String,
    pub ranked: Vec<RankedIssue>,
    /// Prose rendering from the Reporting collaborator.
    pub narrative: String,
}
