//! Tick placement and formatting for the value and time axes

use chrono::{DateTime, Datelike, NaiveDate};

const MS_PER_YEAR: f64 = 365.2425 * 24.0 * 60.0 * 60.0 * 1000.0;
const MONTH_STEPS: [i64; 3] = [1, 3, 6];

/// A "nice" step (1, 2 or 5 times a power of ten) splitting
/// `[start, stop]` into roughly `count` intervals. Zero for an empty span.
pub fn tick_increment(start: f64, stop: f64, count: f64) -> f64 {
    let raw_interval = (stop - start) / count.max(1.0);
    if !raw_interval.is_finite() || raw_interval <= 0.0 {
        return 0.0;
    }

    let exponent = raw_interval.log10().floor();
    let base = 10f64.powf(exponent);
    let fraction = raw_interval / base;

    let nice_fraction = if fraction >= 50f64.sqrt() {
        10.0
    } else if fraction >= 10f64.sqrt() {
        5.0
    } else if fraction >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };

    nice_fraction * base
}

/// Multiples of the nice step that fall inside `[start, stop]`, plus the step
pub fn linear_ticks(start: f64, stop: f64, count: f64) -> (Vec<f64>, f64) {
    let step = tick_increment(start, stop, count);
    if step == 0.0 {
        let ticks = if start == stop && start.is_finite() {
            vec![start]
        } else {
            Vec::new()
        };
        return (ticks, step);
    }

    let first = (start / step).ceil() as i64;
    let last = (stop / step).floor() as i64;

    // Dividing by the inverse keeps 0.1 * 3 from becoming 0.30000000000000004
    let inverse = (1.0 / step).round();
    let ticks = (first..=last)
        .map(|i| {
            if step >= 1.0 {
                i as f64 * step
            } else {
                i as f64 / inverse
            }
        })
        .collect();

    (ticks, step)
}

/// Label for a value tick: as many decimals as the step needs, with
/// thousands separators
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step > 0.0 && step < 1.0 {
        (-step.log10().floor()) as usize
    } else {
        0
    };

    let formatted = format!("{value:.decimals$}");
    let (sign, digits) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let (integer, fraction) = match digits.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (digits, None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    // "-0" reads oddly on an axis
    let sign = if grouped.chars().all(|c| c == '0' || c == ',')
        && fraction.map_or(true, |f| f.chars().all(|c| c == '0'))
    {
        ""
    } else {
        sign
    };

    match fraction {
        Some(fraction) => format!("{sign}{grouped}.{fraction}"),
        None => format!("{sign}{grouped}"),
    }
}

/// January 1st ticks between two timestamps (milliseconds), every `n`
/// years where `n` is a nice step for roughly `count` ticks. Returns
/// `(timestamp_ms, year)` pairs.
///
/// Sub-year spans may get fewer than two ticks; see [`time_ticks`].
pub fn year_ticks(start_ms: f64, stop_ms: f64, count: f64) -> Vec<(f64, i32)> {
    let (start_ms, stop_ms) = if start_ms <= stop_ms {
        (start_ms, stop_ms)
    } else {
        (stop_ms, start_ms)
    };

    let (Some(start), Some(stop)) = (
        DateTime::from_timestamp_millis(start_ms as i64),
        DateTime::from_timestamp_millis(stop_ms as i64),
    ) else {
        return Vec::new();
    };
    let start = start.date_naive();
    let stop = stop.date_naive();

    let span_years = (stop_ms - start_ms) / MS_PER_YEAR;
    let step = tick_increment(0.0, span_years, count).max(1.0).round() as i32;

    let first_year = if start.ordinal() == 1 {
        start.year()
    } else {
        start.year() + 1
    };

    (first_year..=stop.year())
        .filter(|year| year.rem_euclid(step) == 0)
        .filter_map(|year| NaiveDate::from_ymd_opt(year, 1, 1).map(|date| (date, year)))
        .filter(|(date, _)| *date <= stop)
        .filter_map(|(date, year)| {
            date.and_hms_opt(0, 0, 0)
                .map(|dt| (dt.and_utc().timestamp_millis() as f64, year))
        })
        .collect()
}

/// First-of-month ticks between two timestamps (milliseconds), every
/// 1, 3 or 6 months: the smallest step that keeps the tick count near
/// `count`. Steps are counted from January.
pub fn month_ticks(start_ms: f64, stop_ms: f64, count: f64) -> Vec<(f64, NaiveDate)> {
    let (start_ms, stop_ms) = if start_ms <= stop_ms {
        (start_ms, stop_ms)
    } else {
        (stop_ms, start_ms)
    };

    let (Some(start), Some(stop)) = (
        DateTime::from_timestamp_millis(start_ms as i64),
        DateTime::from_timestamp_millis(stop_ms as i64),
    ) else {
        return Vec::new();
    };
    let start = start.date_naive();
    let stop = stop.date_naive();

    let span_months = (stop_ms - start_ms) / (MS_PER_YEAR / 12.0);
    let raw_step = span_months / count.max(1.0);
    let step = MONTH_STEPS
        .iter()
        .copied()
        .find(|step| *step as f64 >= raw_step)
        .unwrap_or(MONTH_STEPS[MONTH_STEPS.len() - 1]);

    let month_index = |date: NaiveDate| date.year() as i64 * 12 + date.month0() as i64;
    let first = if start.day() == 1 {
        month_index(start)
    } else {
        month_index(start) + 1
    };

    (first..=month_index(stop))
        .filter(|index| index.rem_euclid(step) == 0)
        .filter_map(|index| {
            NaiveDate::from_ymd_opt(
                index.div_euclid(12) as i32,
                index.rem_euclid(12) as u32 + 1,
                1,
            )
        })
        .filter_map(|date| {
            date.and_hms_opt(0, 0, 0)
                .map(|dt| (dt.and_utc().timestamp_millis() as f64, date))
        })
        .collect()
}

/// Labelled ticks for the time axis. Year boundaries are used while they
/// give at least two ticks; shorter spans fall back to month boundaries,
/// where January is labelled with its year and other months by name.
pub fn time_ticks(start_ms: f64, stop_ms: f64, count: f64) -> Vec<(f64, String)> {
    let years = year_ticks(start_ms, stop_ms, count);
    if years.len() >= 2 {
        return years
            .into_iter()
            .map(|(ts, year)| (ts, year.to_string()))
            .collect();
    }

    let months = month_ticks(start_ms, stop_ms, count);
    if months.len() <= years.len() {
        return years
            .into_iter()
            .map(|(ts, year)| (ts, year.to_string()))
            .collect();
    }

    months
        .into_iter()
        .map(|(ts, date)| {
            let label = if date.month() == 1 {
                date.year().to_string()
            } else {
                date.format("%b").to_string()
            };
            (ts, label)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jan1(year: i32) -> f64 {
        NaiveDate::from_ymd_opt(year, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
            .and_utc()
            .timestamp_millis() as f64
    }

    #[test]
    fn test_basic_range() {
        assert_eq!(tick_increment(0.0, 10.0, 10.0), 1.0);
        assert_eq!(tick_increment(0.0, 18_000.0, 10.0), 2000.0);
        assert_eq!(tick_increment(0.0, 200.0, 10.0), 20.0);
    }

    #[test]
    fn test_small_range() {
        let (ticks, step) = linear_ticks(0.0, 1.0, 5.0);
        assert_eq!(step, 0.2);
        assert_eq!(ticks, vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
    }

    #[test]
    fn test_ticks_stay_inside_domain() {
        let (ticks, step) = linear_ticks(0.0, 18_064.7, 10.0);
        assert_eq!(step, 2000.0);
        assert_eq!(ticks.first(), Some(&0.0));
        assert_eq!(ticks.last(), Some(&18_000.0));
        assert_eq!(ticks.len(), 10);
    }

    #[test]
    fn test_zero_range() {
        let (ticks, step) = linear_ticks(5.0, 5.0, 10.0);
        assert_eq!(step, 0.0);
        assert_eq!(ticks, vec![5.0]);
    }

    #[test]
    fn test_format_tick() {
        assert_eq!(format_tick(18_000.0, 2000.0), "18,000");
        assert_eq!(format_tick(0.0, 2000.0), "0");
        assert_eq!(format_tick(1_234_567.0, 1.0), "1,234,567");
        assert_eq!(format_tick(0.5, 0.1), "0.5");
        assert_eq!(format_tick(-2500.0, 500.0), "-2,500");
        assert_eq!(format_tick(-0.0, 1.0), "0");
    }

    #[test]
    fn test_year_ticks_every_two_years() {
        let ticks = year_ticks(jan1(1947), jan1(2015) + 181.0 * 86_400_000.0, 23.0);
        let years: Vec<i32> = ticks.iter().map(|(_, y)| *y).collect();

        assert_eq!(years.first(), Some(&1948));
        assert_eq!(years.last(), Some(&2014));
        assert!(years.windows(2).all(|w| w[1] - w[0] == 2));
        assert_eq!(ticks[0].0, jan1(1948));
    }

    #[test]
    fn test_year_ticks_include_start_on_jan1() {
        let ticks = year_ticks(jan1(1950), jan1(1951), 10.0);
        assert_eq!(ticks, vec![(jan1(1950), 1950), (jan1(1951), 1951)]);
    }

    #[test]
    fn test_sub_year_span_has_no_ticks() {
        let ticks = year_ticks(jan1(1950) + 86_400_000.0, jan1(1950) + 90.0 * 86_400_000.0, 10.0);
        assert!(ticks.is_empty());
    }

    fn first_of(year: i32, month: u32) -> f64 {
        NaiveDate::from_ymd_opt(year, month, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
            .and_utc()
            .timestamp_millis() as f64
    }

    #[test]
    fn test_sub_year_span_falls_back_to_months() {
        let ticks = time_ticks(first_of(2020, 2), first_of(2020, 11), 20.0);
        let labels: Vec<&str> = ticks.iter().map(|(_, l)| l.as_str()).collect();

        assert_eq!(
            labels,
            vec!["Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov"]
        );
        assert_eq!(ticks[0].0, first_of(2020, 2));
        assert_eq!(ticks[9].0, first_of(2020, 11));
    }

    #[test]
    fn test_month_step_grows_with_span() {
        let ticks = month_ticks(first_of(2019, 3), first_of(2020, 2), 4.0);
        let months: Vec<(i32, u32)> = ticks.iter().map(|(_, d)| (d.year(), d.month())).collect();
        assert_eq!(months, vec![(2019, 4), (2019, 7), (2019, 10), (2020, 1)]);

        // January keeps the year as its label
        let labels: Vec<String> = time_ticks(first_of(2019, 3), first_of(2020, 2), 4.0)
            .into_iter()
            .map(|(_, l)| l)
            .collect();
        assert_eq!(labels, vec!["Apr", "Jul", "Oct", "2020"]);
    }

    #[test]
    fn test_multi_year_span_keeps_year_labels() {
        let ticks = time_ticks(jan1(1950), jan1(1951), 10.0);
        assert_eq!(
            ticks,
            vec![(jan1(1950), "1950".to_string()), (jan1(1951), "1951".to_string())]
        );
    }

    #[test]
    fn test_single_day_domain() {
        let ticks = time_ticks(jan1(1950), jan1(1950), 10.0);
        assert_eq!(ticks, vec![(jan1(1950), "1950".to_string())]);

        let mid_month = first_of(1950, 2) + 14.0 * 86_400_000.0;
        assert!(time_ticks(mid_month, mid_month, 10.0).is_empty());
    }
}
