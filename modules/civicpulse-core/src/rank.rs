//! Weighted multi-criteria ranking of issue groups.

use civicpulse_common::{CivicPulseError, IssueGroup, RankedIssue, WeightPolicy};

/// Remap mean severity (signed, more negative = more severe) onto [0, 1]
/// where higher means more urgent: severity -1 → 1.0, severity +1 → 0.0.
pub fn crisis_factor(average_severity: f64) -> f64 {
    1.0 - ((average_severity + 1.0) / 2.0)
}

/// Apply policy weights to aggregated group statistics and return the groups
/// sorted descending by Priority Score.
///
/// Weights are validated before any scoring (fail fast). Frequency is
/// normalized against the batch maximum, so the most-reported issue type
/// always normalizes to exactly 1.0. The sort is stable: equal scores keep
/// the input (first-encounter grouping) order, which makes the ranking
/// reproducible for identical input.
pub fn rank(
    groups: &[IssueGroup],
    weights: &WeightPolicy,
) -> Result<Vec<RankedIssue>, CivicPulseError> {
    weights.validate()?;

    if groups.is_empty() {
        return Err(CivicPulseError::EmptyInput);
    }

    // Every group carries ≥1 record, so max_freq ≥ 1
    let max_freq = groups
        .iter()
        .map(|g| g.total_frequency)
        .max()
        .unwrap_or(1) as f64;

    let mut ranked: Vec<RankedIssue> = groups
        .iter()
        .map(|group| {
            let norm_frequency = group.total_frequency as f64 / max_freq;
            let priority_score = crisis_factor(group.average_severity) * weights.severity_weight
                + norm_frequency * weights.frequency_weight;
            RankedIssue {
                issue_type: group.issue_type.clone(),
                total_frequency: group.total_frequency,
                average_severity: group.average_severity,
                priority_score,
            }
        })
        .collect();

    // Vec::sort_by is stable
    ranked.sort_by(|a, b| b.priority_score.total_cmp(&a.priority_score));

    Ok(ranked)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(issue_type: &str, total_frequency: u32, average_severity: f64) -> IssueGroup {
        IssueGroup {
            issue_type: issue_type.to_string(),
            total_frequency,
            average_severity,
        }
    }

    #[test]
    fn crisis_factor_remaps_severity() {
        assert!((crisis_factor(-1.0) - 1.0).abs() < 1e-10);
        assert!((crisis_factor(1.0) - 0.0).abs() < 1e-10);
        assert!((crisis_factor(0.0) - 0.5).abs() < 1e-10);
        assert!((crisis_factor(-0.4) - 0.7).abs() < 1e-10);
    }

    #[test]
    fn pothole_outranks_noise() {
        // Worked scenario: Pothole {freq 2, avg -0.4}, Noise {freq 1, avg 0.1},
        // weights severity 0.65 / frequency 0.35.
        let groups = vec![group("Pothole", 2, -0.4), group("Noise", 1, 0.1)];
        let weights = WeightPolicy::new(0.65, 0.35);

        let ranked = rank(&groups, &weights).unwrap();

        assert_eq!(ranked[0].issue_type, "Pothole");
        assert!((ranked[0].priority_score - 0.805).abs() < 1e-10);
        assert_eq!(ranked[1].issue_type, "Noise");
        assert!((ranked[1].priority_score - 0.4675).abs() < 1e-10);
    }

    #[test]
    fn weights_not_summing_to_one_are_rejected() {
        let groups = vec![group("Pothole", 1, 0.0)];
        let err = rank(&groups, &WeightPolicy::new(0.5, 0.4)).unwrap_err();
        assert!(matches!(err, CivicPulseError::InvalidWeight(_)));
    }

    #[test]
    fn negative_weight_is_rejected() {
        let groups = vec![group("Pothole", 1, 0.0)];
        let err = rank(&groups, &WeightPolicy::new(1.2, -0.2)).unwrap_err();
        assert!(matches!(err, CivicPulseError::InvalidWeight(_)));
    }

    #[test]
    fn weight_sum_within_tolerance_is_accepted() {
        let groups = vec![group("Pothole", 1, 0.0)];
        assert!(rank(&groups, &WeightPolicy::new(0.5, 0.5 + 5e-7)).is_ok());
        assert!(rank(&groups, &WeightPolicy::new(0.5, 0.5 + 2e-6)).is_err());
    }

    #[test]
    fn empty_groups_are_rejected() {
        let err = rank(&[], &WeightPolicy::default()).unwrap_err();
        assert!(matches!(err, CivicPulseError::EmptyInput));
    }

    #[test]
    fn weight_validation_precedes_empty_check() {
        // Fail fast: a bad policy is reported even with nothing to rank.
        let err = rank(&[], &WeightPolicy::new(0.9, 0.9)).unwrap_err();
        assert!(matches!(err, CivicPulseError::InvalidWeight(_)));
    }

    #[test]
    fn max_frequency_group_normalizes_to_one() {
        // frequency_weight = 1.0 isolates the frequency term
        let groups = vec![
            group("A", 3, 0.0),
            group("B", 12, 0.0),
            group("C", 6, 0.0),
        ];
        let ranked = rank(&groups, &WeightPolicy::new(0.0, 1.0)).unwrap();
        assert_eq!(ranked[0].issue_type, "B");
        assert!((ranked[0].priority_score - 1.0).abs() < 1e-10);
        for issue in &ranked {
            assert!(issue.priority_score > 0.0 && issue.priority_score <= 1.0);
        }
    }

    #[test]
    fn scores_stay_in_unit_range() {
        let groups = vec![
            group("A", 1, -1.0),
            group("B", 100, 1.0),
            group("C", 50, 0.0),
        ];
        for (sw, fw) in [(1.0, 0.0), (0.0, 1.0), (0.65, 0.35), (0.3, 0.7)] {
            let ranked = rank(&groups, &WeightPolicy::new(sw, fw)).unwrap();
            for issue in &ranked {
                assert!(
                    (0.0..=1.0).contains(&issue.priority_score),
                    "score out of range: {}",
                    issue.priority_score
                );
            }
        }
    }

    #[test]
    fn ties_keep_input_order() {
        // Identical stats → identical scores → stable sort keeps input order.
        let groups = vec![
            group("First", 2, -0.5),
            group("Second", 2, -0.5),
            group("Third", 2, -0.5),
        ];
        let ranked = rank(&groups, &WeightPolicy::default()).unwrap();
        let order: Vec<&str> = ranked.iter().map(|r| r.issue_type.as_str()).collect();
        assert_eq!(order, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn ranking_is_reproducible() {
        let groups = vec![
            group("Pothole", 4, -0.3),
            group("Theft", 4, -0.3),
            group("Noise", 9, 0.2),
        ];
        let weights = WeightPolicy::default();
        let a = rank(&groups, &weights).unwrap();
        let b = rank(&groups, &weights).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn pure_severity_policy_ranks_by_crisis_factor() {
        let groups = vec![group("Mild", 50, 0.8), group("Grim", 1, -0.9)];
        let ranked = rank(&groups, &WeightPolicy::new(1.0, 0.0)).unwrap();
        assert_eq!(ranked[0].issue_type, "Grim");
    }
}
