//! Year-range and per-country filtering of labeled observations.
//!
//! Filters never raise domain errors: an empty intersection simply yields an
//! empty result. Bounds are clamped to the data's actual year range by the
//! caller (the sidebar control), not validated here.

use crate::models::LabeledObservation;

/// Restrict rows to an inclusive [min_year, max_year] range.
pub fn filter_by_year_range(
    rows: &[LabeledObservation],
    min_year: i32,
    max_year: i32,
) -> Vec<LabeledObservation> {
    rows.iter()
        .filter(|r| r.year >= min_year && r.year <= max_year)
        .cloned()
        .collect()
}

/// Restrict rows to a single country.
pub fn filter_by_country(rows: &[LabeledObservation], country: &str) -> Vec<LabeledObservation> {
    rows.iter().filter(|r| r.country == country).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ClusterLabel;
    use proptest::prelude::*;

    fn row(country: &str, year: i32) -> LabeledObservation {
        LabeledObservation {
            country: country.to_string(),
            year,
            pr_rating: 1.0,
            cl_rating: 1.0,
            incidents: 0,
            cluster_id: 0,
            label: ClusterLabel::FreePeaceful,
        }
    }

    fn sample_rows() -> Vec<LabeledObservation> {
        vec![
            row("Norway", 1995),
            row("Norway", 2000),
            row("Iraq", 2000),
            row("Iraq", 2007),
            row("Peru", 2013),
        ]
    }

    #[test]
    fn test_year_range_is_inclusive() {
        let rows = sample_rows();
        let filtered = filter_by_year_range(&rows, 2000, 2007);
        assert_eq!(filtered.len(), 3);
        assert!(filtered.iter().all(|r| r.year >= 2000 && r.year <= 2007));
    }

    #[test]
    fn test_single_year_range() {
        let rows = sample_rows();
        let filtered = filter_by_year_range(&rows, 2000, 2000);
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|r| r.year == 2000));
    }

    #[test]
    fn test_empty_intersection_is_empty_not_error() {
        let rows = sample_rows();
        let filtered = filter_by_year_range(&rows, 9999, 9999);
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_filter_by_country() {
        let rows = sample_rows();
        let filtered = filter_by_country(&rows, "Iraq");
        assert_eq!(filtered.len(), 2);

        let filtered = filter_by_country(&rows, "Atlantis");
        assert!(filtered.is_empty());
    }

    proptest! {
        #[test]
        fn prop_filtered_rows_are_within_bounds(
            years in proptest::collection::vec(1970i32..2021, 0..40),
            min_year in 1960i32..2030,
            span in 0i32..60,
        ) {
            let rows: Vec<LabeledObservation> =
                years.iter().map(|&y| row("X", y)).collect();
            let max_year = min_year + span;

            let filtered = filter_by_year_range(&rows, min_year, max_year);
            prop_assert!(filtered.iter().all(|r| r.year >= min_year && r.year <= max_year));

            let expected = rows
                .iter()
                .filter(|r| r.year >= min_year && r.year <= max_year)
                .count();
            prop_assert_eq!(filtered.len(), expected);
        }
    }
}
