//! Event wiring: bar hover, pointer tracking and viewport resize

pub mod hover;
pub mod pointer;
pub mod resize;

pub use hover::{attach_hover, BarHoverListener};
pub use pointer::track_pointer;
pub use resize::redraw_on_resize;
