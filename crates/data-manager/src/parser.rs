//! Conversion of the raw `{ name, data }` document into a [`Dataset`]

use bar_chart_shared::{ChartResult, DataPoint, Dataset, RawDataset};
use chrono::{DateTime, NaiveDate, Utc};

/// Parse a date as `YYYY-MM-DD`, falling back to a full RFC 3339 timestamp
pub fn parse_date(input: &str) -> ChartResult<NaiveDate> {
    let trimmed = input.trim();
    match NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        Ok(date) => Ok(date),
        Err(_) => Ok(DateTime::parse_from_rfc3339(trimmed)?
            .with_timezone(&Utc)
            .date_naive()),
    }
}

pub fn parse_dataset(raw: RawDataset) -> ChartResult<Dataset> {
    let points = raw
        .data
        .into_iter()
        .map(|(label, value)| Ok(DataPoint::new(parse_date(&label)?, label, value)))
        .collect::<ChartResult<Vec<_>>>()?;

    let dataset = Dataset::new(raw.name, points)?;
    if !dataset.is_chronological() {
        log::warn!(
            "Dataset '{}' is not in chronological order",
            dataset.name()
        );
    }
    Ok(dataset)
}

pub fn parse_dataset_json(json: &str) -> ChartResult<Dataset> {
    let raw: RawDataset = serde_json::from_str(json)?;
    parse_dataset(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bar_chart_shared::ChartError;

    #[test]
    fn test_parse_plain_date() {
        let date = parse_date("1947-01-01").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(1947, 1, 1).unwrap());
    }

    #[test]
    fn test_parse_rfc3339_date() {
        let date = parse_date("2015-07-01T00:00:00Z").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2015, 7, 1).unwrap());
    }

    #[test]
    fn test_parse_bad_date() {
        let err = parse_date("first quarter").unwrap_err();
        assert!(matches!(err, ChartError::InvalidFormat { .. }));
    }

    #[test]
    fn test_label_preserved() {
        let dataset = parse_dataset(RawDataset {
            name: "GDP".to_string(),
            data: vec![("1947-01-01".to_string(), 243.1)],
        })
        .unwrap();

        assert_eq!(dataset.points()[0].label, "1947-01-01");
        assert_eq!(dataset.points()[0].value, 243.1);
    }
}
