//! Scene parts: axes, bars and the title

pub mod axis;
pub mod bars;
pub mod title;
pub mod x_axis;
pub mod y_axis;

pub use axis::{Axis, AxisOrientation, Tick};
pub use bars::BarShape;
pub use title::TitleText;
