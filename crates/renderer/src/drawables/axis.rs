use serde::{Deserialize, Serialize};

/// Length of tick marks and of the domain path's end caps
pub const TICK_SIZE: f64 = 6.0;

/// Gap between a tick mark and its label
pub const TICK_PADDING: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisOrientation {
    Bottom,
    Left,
}

impl AxisOrientation {
    /// Outline of the axis line with its end caps
    pub fn domain_path(&self, range: (f64, f64)) -> String {
        let (r0, r1) = range;
        match self {
            AxisOrientation::Bottom => format!("M{r0},{TICK_SIZE}V0H{r1}V{TICK_SIZE}"),
            AxisOrientation::Left => format!("M{},{r0}H0V{r1}H{}", -TICK_SIZE, -TICK_SIZE),
        }
    }

    pub fn tick_transform(&self, offset: f64) -> String {
        match self {
            AxisOrientation::Bottom => format!("translate({offset},0)"),
            AxisOrientation::Left => format!("translate(0,{offset})"),
        }
    }

    /// Attribute and value giving the tick mark's far end
    pub fn tick_line(&self) -> (&'static str, f64) {
        match self {
            AxisOrientation::Bottom => ("y2", TICK_SIZE),
            AxisOrientation::Left => ("x2", -TICK_SIZE),
        }
    }

    /// Attribute and value placing the label beyond the tick mark
    pub fn label_position(&self) -> (&'static str, f64) {
        let distance = TICK_SIZE + TICK_PADDING;
        match self {
            AxisOrientation::Bottom => ("y", distance),
            AxisOrientation::Left => ("x", -distance),
        }
    }

    /// Baseline shift for the label
    pub fn label_dy(&self) -> &'static str {
        match self {
            AxisOrientation::Bottom => "0.71em",
            AxisOrientation::Left => "0.32em",
        }
    }

    pub fn text_anchor(&self) -> &'static str {
        match self {
            AxisOrientation::Bottom => "middle",
            AxisOrientation::Left => "end",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    /// Position along the axis in pixels
    pub offset: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    pub id: String,
    pub orientation: AxisOrientation,
    /// Offset of the axis group within the surface
    pub translate: (f64, f64),
    /// Pixel extent of the axis line
    pub range: (f64, f64),
    pub ticks: Vec<Tick>,
}

impl Axis {
    pub fn transform(&self) -> String {
        format!("translate({}, {})", self.translate.0, self.translate.1)
    }

    pub fn domain_path(&self) -> String {
        self.orientation.domain_path(self.range)
    }
}
