use bar_chart_shared::ChartResult;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::{Event, Window};

use crate::chart_engine::ChartEngine;

/// Tear down and rebuild the chart whenever the window is resized
pub fn redraw_on_resize(
    window: &Window,
    engine: Rc<RefCell<ChartEngine>>,
) -> ChartResult<Closure<dyn FnMut(Event)>> {
    let callback = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        let Ok(mut engine) = engine.try_borrow_mut() else {
            log::warn!("Skipping resize redraw: chart is busy");
            return;
        };
        if let Err(e) = engine.redraw() {
            log::error!("Redraw after resize failed: {e}");
        }
    });

    window.add_event_listener_with_callback("resize", callback.as_ref().unchecked_ref())?;
    Ok(callback)
}
