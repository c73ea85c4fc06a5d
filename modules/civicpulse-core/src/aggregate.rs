//! Groups classified records by issue type.

use std::collections::HashMap;

use civicpulse_common::{CivicPulseError, ClassifiedRecord, IssueGroup};

/// Group records by `issue_type` (exact, case-sensitive match) and compute
/// count and mean severity per group. Output preserves first-encounter order
/// of issue types; the ranker relies on that order for tie-breaking.
///
/// Rejects an empty batch (`EmptyInput`) and any record missing `issue_type`
/// or `severity_score` (`MissingField` with the record's position). Malformed
/// records are never silently dropped — that would corrupt the frequency
/// counts downstream.
pub fn aggregate(records: &[ClassifiedRecord]) -> Result<Vec<IssueGroup>, CivicPulseError> {
    if records.is_empty() {
        return Err(CivicPulseError::EmptyInput);
    }

    // (count, severity sum) per issue type, in first-encounter order
    let mut order: Vec<&str> = Vec::new();
    let mut stats: HashMap<&str, (u32, f64)> = HashMap::new();

    for (position, record) in records.iter().enumerate() {
        let issue_type = record.issue_type.as_deref().ok_or(
            CivicPulseError::MissingField {
                position,
                field: "issue_type",
            },
        )?;
        let severity = record
            .severity_score
            .ok_or(CivicPulseError::MissingField {
                position,
                field: "severity_score",
            })?;

        let entry = stats.entry(issue_type).or_insert_with(|| {
            order.push(issue_type);
            (0, 0.0)
        });
        entry.0 += 1;
        entry.1 += severity;
    }

    Ok(order
        .iter()
        .map(|issue_type| {
            let (count, sum) = stats[issue_type];
            IssueGroup {
                issue_type: issue_type.to_string(),
                total_frequency: count,
                average_severity: sum / count as f64,
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(issue_type: &str, severity: f64) -> ClassifiedRecord {
        ClassifiedRecord::new(issue_type, severity)
    }

    #[test]
    fn empty_input_is_rejected() {
        let err = aggregate(&[]).unwrap_err();
        assert!(matches!(err, CivicPulseError::EmptyInput));
    }

    #[test]
    fn missing_issue_type_reports_position() {
        let mut bad = record("Pothole", -0.5);
        bad.issue_type = None;
        let records = vec![record("Noise", 0.1), bad];
        let err = aggregate(&records).unwrap_err();
        match err {
            CivicPulseError::MissingField { position, field } => {
                assert_eq!(position, 1);
                assert_eq!(field, "issue_type");
            }
            other => panic!("expected MissingField, got {other:?}"),
        }
    }

    #[test]
    fn missing_severity_reports_position() {
        let mut bad = record("Flooding", 0.0);
        bad.severity_score = None;
        let err = aggregate(&[bad]).unwrap_err();
        match err {
            CivicPulseError::MissingField { position, field } => {
                assert_eq!(position, 0);
                assert_eq!(field, "severity_score");
            }
            other => panic!("expected MissingField, got {other:?}"),
        }
    }

    #[test]
    fn groups_count_and_average() {
        let records = vec![
            record("Pothole", -0.6),
            record("Pothole", -0.2),
            record("Noise", 0.1),
        ];
        let groups = aggregate(&records).unwrap();
        assert_eq!(groups.len(), 2);

        assert_eq!(groups[0].issue_type, "Pothole");
        assert_eq!(groups[0].total_frequency, 2);
        assert!((groups[0].average_severity - (-0.4)).abs() < 1e-10);

        assert_eq!(groups[1].issue_type, "Noise");
        assert_eq!(groups[1].total_frequency, 1);
        assert!((groups[1].average_severity - 0.1).abs() < 1e-10);
    }

    #[test]
    fn frequencies_sum_to_record_count() {
        let records = vec![
            record("Theft", -0.3),
            record("Pothole", -0.1),
            record("Theft", -0.7),
            record("Flooding", -0.9),
            record("Theft", 0.0),
        ];
        let groups = aggregate(&records).unwrap();
        let total: u32 = groups.iter().map(|g| g.total_frequency).sum();
        assert_eq!(total as usize, records.len());
    }

    #[test]
    fn grouping_is_case_sensitive() {
        let records = vec![record("pothole", -0.5), record("Pothole", -0.5)];
        let groups = aggregate(&records).unwrap();
        assert_eq!(groups.len(), 2);
    }

    #[test]
    fn first_encounter_order_is_preserved() {
        let records = vec![
            record("Noise", 0.0),
            record("Theft", 0.0),
            record("Noise", 0.0),
            record("Pothole", 0.0),
        ];
        let groups = aggregate(&records).unwrap();
        let order: Vec<&str> = groups.iter().map(|g| g.issue_type.as_str()).collect();
        assert_eq!(order, vec!["Noise", "Theft", "Pothole"]);
    }

    #[test]
    fn single_record_group_has_its_own_severity() {
        let groups = aggregate(&[record("Graffiti", -0.25)]).unwrap();
        assert_eq!(groups[0].total_frequency, 1);
        assert!((groups[0].average_severity - (-0.25)).abs() < 1e-10);
    }
}
