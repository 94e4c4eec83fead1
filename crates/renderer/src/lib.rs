//! Layout engine for the bar chart
//!
//! Everything here is pure computation: scales map data to pixels, tick
//! generators pick axis positions and labels, and [`ChartScene::build`]
//! turns a dataset plus a viewport into a description of every node the
//! browser layer has to create. Nothing in this crate touches the DOM.

pub mod drawables;
pub mod layout;
pub mod scales;
pub mod scene;
pub mod ticks;

pub use drawables::{Axis, AxisOrientation, BarShape, Tick, TitleText};
pub use layout::ChartLayout;
pub use scales::{LinearScale, TimeScale};
pub use scene::ChartScene;
