use categorical_bayes::{evaluate, predict, smoothed_probability, train, Row};
use proptest::prelude::*;

/// Datasets of 1..40 rows, 1..4 features, values from small alphabets.
fn dataset() -> impl Strategy<Value = Vec<Row>> {
    (1usize..4).prop_flat_map(|features| {
        prop::collection::vec(
            prop::collection::vec("[a-c]", features + 1).prop_map(|mut row| {
                let last = row.len() - 1;
                row[last] = format!("class_{}", row[last]);
                row
            }),
            1..40,
        )
    })
}

proptest! {
    #[test]
    fn priors_sum_to_one(rows in dataset()) {
        let model = train(&rows).unwrap();
        let total: f64 = model.priors().map(|(_, prior)| prior).sum();
        prop_assert!((total - 1.0).abs() < 1e-9, "priors sum to {}", total);
    }

    #[test]
    fn likelihood_counts_match_class_sizes(rows in dataset()) {
        let model = train(&rows).unwrap();
        for label in model.labels() {
            let class_rows = model.class_row_count(label).unwrap();
            for i in 0..model.feature_count() {
                let counts = model.likelihood(label, i).unwrap();
                prop_assert_eq!(counts.values().sum::<usize>(), class_rows);
                prop_assert_eq!(counts.len(), model.vocabulary(i).unwrap().len());
            }
        }
    }

    #[test]
    fn partition_reconstructs_dataset(rows in dataset()) {
        let model = train(&rows).unwrap();
        let mut joined = Vec::new();
        for label in model.labels() {
            let partition = model.partition(label).unwrap();
            for row in partition {
                prop_assert_eq!(row.last(), Some(label));
            }
            joined.extend_from_slice(partition);
        }

        let mut expected = rows.clone();
        expected.sort();
        joined.sort();
        prop_assert_eq!(joined, expected);
    }

    #[test]
    fn smoothed_probabilities_are_positive_and_bounded(rows in dataset()) {
        let model = train(&rows).unwrap();
        for label in model.labels() {
            for i in 0..model.feature_count() {
                let vocabulary = model.vocabulary(i).unwrap();
                for value in vocabulary {
                    let p = smoothed_probability(&model, label, i, value).unwrap();
                    prop_assert!(p > 0.0, "P({}|{}) = {}", value, label, p);
                    // A single-valued column always gives exactly 1.
                    if vocabulary.len() > 1 {
                        prop_assert!(p < 1.0, "P({}|{}) = {}", value, label, p);
                    } else {
                        prop_assert!((p - 1.0).abs() < 1e-12);
                    }
                }
            }
        }
    }

    #[test]
    fn predictions_are_deterministic(rows in dataset()) {
        let model = train(&rows).unwrap();
        let features = model.feature_count();
        for row in &rows {
            let first = predict(&model, &row[..features]);
            let second = predict(&model, &row[..features]);
            prop_assert_eq!(first, second);
        }
    }

    #[test]
    fn accuracy_is_a_percentage(rows in dataset()) {
        let model = train(&rows).unwrap();
        let evaluation = evaluate(&model, &[], &rows).unwrap();
        prop_assert!((0.0..=100.0).contains(&evaluation.accuracy));
        prop_assert_eq!(evaluation.rows.len(), rows.len());
    }
}
