//! Dataset model shared by the loader and the renderer

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{ChartError, ChartResult};

/// Wire shape of the remote document: `{ name, data: [[date, value], ...] }`.
/// Any other fields in the document are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawDataset {
    pub name: String,
    pub data: Vec<(String, f64)>,
}

/// One bar's worth of data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub date: NaiveDate,
    /// Date exactly as it appeared in the source document
    pub label: String,
    pub value: f64,
}

impl DataPoint {
    pub fn new(date: NaiveDate, label: impl Into<String>, value: f64) -> Self {
        Self {
            date,
            label: label.into(),
            value,
        }
    }

    /// Milliseconds since the Unix epoch at UTC midnight of `date`
    pub fn timestamp_ms(&self) -> f64 {
        self.date
            .and_hms_opt(0, 0, 0)
            .map(|dt| dt.and_utc().timestamp_millis() as f64)
            .unwrap_or_default()
    }
}

/// Loaded dataset. Immutable after construction and never empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    name: String,
    points: Vec<DataPoint>,
}

impl Dataset {
    pub fn new(name: impl Into<String>, points: Vec<DataPoint>) -> ChartResult<Self> {
        let name = name.into();
        if points.is_empty() {
            return Err(ChartError::EmptyDataset { name });
        }
        Ok(Self { name, points })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Chart title: the part of the name before the first comma
    pub fn title(&self) -> &str {
        self.name.split(',').next().unwrap_or_default()
    }

    pub fn max_value(&self) -> f64 {
        self.points
            .iter()
            .map(|p| p.value)
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Earliest and latest timestamps in milliseconds
    pub fn date_extent(&self) -> (f64, f64) {
        self.points.iter().map(DataPoint::timestamp_ms).fold(
            (f64::INFINITY, f64::NEG_INFINITY),
            |(min, max), ts| (min.min(ts), max.max(ts)),
        )
    }

    pub fn is_chronological(&self) -> bool {
        self.points.windows(2).all(|w| w[0].date <= w[1].date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(date: &str, value: f64) -> DataPoint {
        DataPoint::new(
            NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            date,
            value,
        )
    }

    #[test]
    fn test_title_is_first_comma_segment() {
        let dataset = Dataset::new("X, Y", vec![point("1950-01-01", 100.0)]).unwrap();
        assert_eq!(dataset.title(), "X");

        let dataset = Dataset::new("No comma here", vec![point("1950-01-01", 1.0)]).unwrap();
        assert_eq!(dataset.title(), "No comma here");

        let dataset = Dataset::new(",leading", vec![point("1950-01-01", 1.0)]).unwrap();
        assert_eq!(dataset.title(), "");
    }

    #[test]
    fn test_empty_dataset_rejected() {
        let err = Dataset::new("empty", vec![]).unwrap_err();
        assert!(matches!(err, ChartError::EmptyDataset { .. }));
    }

    #[test]
    fn test_extents() {
        let dataset = Dataset::new(
            "GDP",
            vec![
                point("1950-01-01", 100.0),
                point("1951-01-01", 250.5),
                point("1952-01-01", 200.0),
            ],
        )
        .unwrap();

        assert_eq!(dataset.max_value(), 250.5);
        let (min, max) = dataset.date_extent();
        assert_eq!(min, -631_152_000_000.0);
        // 1950-01-01 plus 730 days
        assert_eq!(max, -568_080_000_000.0);
        assert!(dataset.is_chronological());
    }

    #[test]
    fn test_timestamp_is_utc_midnight() {
        assert_eq!(point("1970-01-02", 0.0).timestamp_ms(), 86_400_000.0);
    }
}
