use thiserror::Error;

#[derive(Error, Debug)]
pub enum CivicPulseError {
    #[error("No records to aggregate or rank")]
    EmptyInput,

    #[error("Record at position {position} is missing required field `{field}`")]
    MissingField { position: usize, field: &'static str },

    #[error("Invalid weight policy: {0}")]
    InvalidWeight(String),

    #[error("Harvest error: {0}")]
    Harvest(String),

    #[error("Classification error: {0}")]
    Classification(String),

    #[error("Reporting error: {0}")]
    Reporting(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl CivicPulseError {
    /// Validation failures are recoverable at the orchestration boundary
    /// (re-prompt for a valid policy, re-run classification). Collaborator
    /// and configuration failures are not.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            CivicPulseError::EmptyInput
                | CivicPulseError::MissingField { .. }
                | CivicPulseError::InvalidWeight(_)
        )
    }
}
