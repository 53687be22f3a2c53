//! Feature preparation: column selection and incomplete-row removal.

use crate::io::RawRecord;
use crate::models::Observation;

/// Build the cleaned clustering input from raw records.
///
/// A row survives only if all five required fields are present and usable:
/// non-empty country, finite numeric ratings, and a finite, non-negative
/// incident count. Row order is preserved modulo removed rows.
pub fn prepare_observations(records: Vec<RawRecord>) -> Vec<Observation> {
    records
        .into_iter()
        .filter_map(|record| {
            let country = record.country.filter(|c| !c.trim().is_empty())?;
            let year = record.year.filter(|y| y.is_finite())?;
            let pr_rating = record.pr_rating.filter(|v| v.is_finite())?;
            let cl_rating = record.cl_rating.filter(|v| v.is_finite())?;
            let incidents = record
                .incidents
                .filter(|v| v.is_finite() && *v >= 0.0)?;

            Some(Observation {
                country,
                year: year.round() as i32,
                pr_rating,
                cl_rating,
                incidents: incidents.round() as u32,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn record(
        country: Option<&str>,
        year: Option<f64>,
        pr: Option<f64>,
        cl: Option<f64>,
        incidents: Option<f64>,
    ) -> RawRecord {
        RawRecord {
            country: country.map(|c| c.to_string()),
            year,
            pr_rating: pr,
            cl_rating: cl,
            incidents,
        }
    }

    #[test]
    fn test_complete_rows_survive_in_order() {
        let records = vec![
            record(Some("Norway"), Some(2000.0), Some(1.0), Some(1.0), Some(0.0)),
            record(Some("Iraq"), Some(2007.0), Some(6.0), Some(6.0), Some(3425.0)),
        ];

        let observations = prepare_observations(records);
        assert_eq!(observations.len(), 2);
        assert_eq!(observations[0].country, "Norway");
        assert_eq!(observations[1].country, "Iraq");
        assert_eq!(observations[1].year, 2007);
        assert_eq!(observations[1].incidents, 3425);
    }

    #[test]
    fn test_rows_with_any_missing_field_are_dropped() {
        let records = vec![
            record(None, Some(2000.0), Some(1.0), Some(1.0), Some(0.0)),
            record(Some("Norway"), None, Some(1.0), Some(1.0), Some(0.0)),
            record(Some("Norway"), Some(2000.0), None, Some(1.0), Some(0.0)),
            record(Some("Norway"), Some(2000.0), Some(1.0), None, Some(0.0)),
            record(Some("Norway"), Some(2000.0), Some(1.0), Some(1.0), None),
            record(Some(""), Some(2000.0), Some(1.0), Some(1.0), Some(0.0)),
        ];

        assert!(prepare_observations(records).is_empty());
    }

    #[test]
    fn test_negative_incident_counts_are_dropped() {
        let records = vec![record(
            Some("Norway"),
            Some(2000.0),
            Some(1.0),
            Some(1.0),
            Some(-3.0),
        )];
        assert!(prepare_observations(records).is_empty());
    }

    #[test]
    fn test_spreadsheet_float_integers_are_narrowed() {
        let records = vec![record(
            Some("Norway"),
            Some(2000.0),
            Some(1.0),
            Some(1.0),
            Some(12.0),
        )];
        let observations = prepare_observations(records);
        assert_eq!(observations[0].year, 2000);
        assert_eq!(observations[0].incidents, 12);
    }

    proptest! {
        // Every prepared row has all five fields usable, regardless of how
        // the raw optional fields are populated.
        #[test]
        fn prop_prepared_rows_are_complete(
            rows in proptest::collection::vec(
                (
                    proptest::option::of("[a-zA-Z ]{0,12}"),
                    proptest::option::of(1970.0f64..2020.0),
                    proptest::option::of(1.0f64..=7.0),
                    proptest::option::of(1.0f64..=7.0),
                    proptest::option::of(-10.0f64..10_000.0),
                ),
                0..50,
            )
        ) {
            let records: Vec<RawRecord> = rows
                .into_iter()
                .map(|(country, year, pr, cl, incidents)| RawRecord {
                    country,
                    year,
                    pr_rating: pr,
                    cl_rating: cl,
                    incidents,
                })
                .collect();

            for obs in prepare_observations(records) {
                prop_assert!(!obs.country.trim().is_empty());
                prop_assert!(obs.pr_rating.is_finite());
                prop_assert!(obs.cl_rating.is_finite());
                prop_assert!((1970..2020).contains(&obs.year));
            }
        }
    }
}
