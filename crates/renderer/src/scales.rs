//! Continuous scales mapping data to pixel coordinates

use serde::{Deserialize, Serialize};

use crate::ticks::{format_tick, linear_ticks, time_ticks};

/// Linear map from a value domain onto a pixel range.
/// A zero-width domain maps every input to the middle of the range.
fn interpolate(domain: (f64, f64), range: (f64, f64), value: f64) -> f64 {
    let span = domain.1 - domain.0;
    let t = if span == 0.0 {
        0.5
    } else {
        (value - domain.0) / span
    };
    range.0 + t * (range.1 - range.0)
}

/// Value scale for the vertical axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn apply(&self, value: f64) -> f64 {
        interpolate(self.domain, self.range, value)
    }

    /// Tick values with their labels
    pub fn ticks(&self, count: usize) -> Vec<(f64, String)> {
        let (lo, hi) = if self.domain.0 <= self.domain.1 {
            self.domain
        } else {
            (self.domain.1, self.domain.0)
        };
        let (values, step) = linear_ticks(lo, hi, count as f64);
        values
            .into_iter()
            .map(|v| (v, format_tick(v, step)))
            .collect()
    }
}

/// Time scale for the horizontal axis; the domain is in milliseconds
/// since the Unix epoch
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl TimeScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn apply(&self, timestamp_ms: f64) -> f64 {
        interpolate(self.domain, self.range, timestamp_ms)
    }

    /// Year-boundary ticks, or month boundaries for spans under a year
    pub fn ticks(&self, count: f64) -> Vec<(f64, String)> {
        time_ticks(self.domain.0, self.domain.1, count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_inverted_range() {
        let scale = LinearScale::new((0.0, 200.0), (900.0, 100.0));
        assert_eq!(scale.apply(0.0), 900.0);
        assert_eq!(scale.apply(200.0), 100.0);
        assert_eq!(scale.apply(100.0), 500.0);
    }

    #[test]
    fn test_degenerate_domain_maps_to_middle() {
        let scale = LinearScale::new((0.0, 0.0), (900.0, 100.0));
        assert_eq!(scale.apply(0.0), 500.0);

        let scale = TimeScale::new((5.0, 5.0), (0.0, 10.0));
        assert_eq!(scale.apply(5.0), 5.0);
    }

    #[test]
    fn test_linear_ticks_labels() {
        let scale = LinearScale::new((0.0, 18_064.7), (900.0, 100.0));
        let ticks = scale.ticks(10);
        assert_eq!(ticks[1], (2000.0, "2,000".to_string()));
        assert_eq!(ticks.last().unwrap().1, "18,000");
    }

    #[test]
    fn test_time_scale_endpoints() {
        let scale = TimeScale::new((1_000.0, 2_000.0), (100.0, 1100.0));
        assert_eq!(scale.apply(1_000.0), 100.0);
        assert_eq!(scale.apply(1_500.0), 600.0);
        assert_eq!(scale.apply(2_000.0), 1100.0);
    }
}
