//! Shared types for the bar chart workspace
//!
//! This crate contains the types passed between the data-manager,
//! renderer and wasm-bridge crates: the dataset model, the error type and
//! tooltip state.

pub mod data_types;
pub mod errors;
pub mod events;
pub mod tooltip;

pub use data_types::{DataPoint, Dataset, RawDataset};
pub use errors::{ChartError, ChartResult};
pub use events::{Point, ViewportSize};
pub use tooltip::{tooltip_position, TooltipConfig, TooltipContent, TooltipState};
