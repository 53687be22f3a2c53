//! Country timeline: terrorist incidents over time for one country.

use serde::{Deserialize, Serialize};

use crate::dataset::LabeledDataset;
use crate::models::ClusterLabel;
use crate::transformations::{filter_by_country, filter_by_year_range};

/// One year of a country's incident series, carrying its cluster label for
/// hover display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelinePoint {
    pub year: i32,
    pub incidents: u32,
    pub label: ClusterLabel,
}

/// Per-country incident time series within the filtered year range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountryTimelineData {
    pub country: String,
    pub points: Vec<TimelinePoint>,
}

/// Assemble the incident series for one country, sorted by year.
///
/// Returns `None` when the country has no rows in the filtered view, so the
/// HTTP layer can answer 404 rather than an empty chart.
pub fn get_country_timeline(
    dataset: &LabeledDataset,
    country: &str,
    min_year: i32,
    max_year: i32,
) -> Option<CountryTimelineData> {
    let in_range = filter_by_year_range(&dataset.rows, min_year, max_year);
    let rows = filter_by_country(&in_range, country);
    if rows.is_empty() {
        return None;
    }

    let mut points: Vec<TimelinePoint> = rows
        .iter()
        .map(|r| TimelinePoint {
            year: r.year,
            incidents: r.incidents,
            label: r.label,
        })
        .collect();
    points.sort_by_key(|p| p.year);

    Some(CountryTimelineData {
        country: country.to_string(),
        points,
    })
}
