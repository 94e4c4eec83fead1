use bar_chart_config::ChartConfig;
use bar_chart_shared::{tooltip_position, ChartResult, Point};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::{Document, MouseEvent, Window};

use crate::dom::{viewport_size, TooltipElement};

/// Page-wide `mousemove` listener that keeps `#tooltip` next to the
/// pointer, flipping sides past the middle of the viewport.
///
/// Looks the tooltip up on every move since redraws replace it.
pub fn track_pointer(
    window: &Window,
    document: &Document,
    config: Rc<ChartConfig>,
) -> ChartResult<Closure<dyn FnMut(MouseEvent)>> {
    let callback = {
        let window = window.clone();
        let document = document.clone();
        Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            let Some(tooltip) = TooltipElement::find(&document) else {
                return;
            };

            let result = viewport_size(&window).and_then(|viewport| {
                let pointer =
                    Point::new(event.client_x() as f64, event.client_y() as f64);
                let position = tooltip_position(pointer, viewport, &config.tooltip);
                let style = tooltip.style();
                style.set_property("top", &format!("{}px", position.y))?;
                style.set_property("left", &format!("{}px", position.x))?;
                Ok(())
            });

            if let Err(e) = result {
                log::warn!("Tooltip move failed: {e}");
            }
        })
    };

    document.add_event_listener_with_callback("mousemove", callback.as_ref().unchecked_ref())?;
    Ok(callback)
}
