use bar_chart_config::ChartConfig;
use bar_chart_renderer::BarShape;
use bar_chart_shared::{ChartResult, TooltipContent};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, MouseEvent};

use crate::dom::{set_cursor, TooltipElement};

type MouseCallback = Closure<dyn FnMut(MouseEvent)>;

/// Keeps a bar's listeners alive for as long as its render is on screen
pub struct BarHoverListener {
    _enter: MouseCallback,
    _leave: MouseCallback,
}

/// Recolor each bar and fill the tooltip while the pointer is over it
pub fn attach_hover(
    document: &Document,
    bars: &[Element],
    shapes: &[BarShape],
    tooltip: Rc<TooltipElement>,
    config: Rc<ChartConfig>,
) -> ChartResult<Vec<BarHoverListener>> {
    bars.iter()
        .zip(shapes)
        .map(|(bar, shape)| {
            let content = TooltipContent::new(&shape.date, shape.value, &config.tooltip);
            attach_bar(document, bar, content, tooltip.clone(), config.clone())
        })
        .collect()
}

fn attach_bar(
    document: &Document,
    bar: &Element,
    content: TooltipContent,
    tooltip: Rc<TooltipElement>,
    config: Rc<ChartConfig>,
) -> ChartResult<BarHoverListener> {
    let enter = {
        let document = document.clone();
        let bar = bar.clone();
        let tooltip = tooltip.clone();
        let config = config.clone();
        Closure::<dyn FnMut(MouseEvent)>::new(move |_event: MouseEvent| {
            let result = set_cursor(&document, &config.style.hover_cursor)
                .and_then(|_| Ok(bar.set_attribute("fill", &config.style.bar_hover_fill)?))
                .and_then(|_| tooltip.show(content.clone()));
            if let Err(e) = result {
                log::warn!("Bar hover failed: {e}");
            }
        })
    };

    let leave = {
        let document = document.clone();
        let bar = bar.clone();
        Closure::<dyn FnMut(MouseEvent)>::new(move |_event: MouseEvent| {
            let result = set_cursor(&document, &config.style.default_cursor)
                .and_then(|_| Ok(bar.set_attribute("fill", &config.style.bar_fill)?))
                .and_then(|_| tooltip.hide());
            if let Err(e) = result {
                log::warn!("Bar leave failed: {e}");
            }
        })
    };

    bar.add_event_listener_with_callback("mouseover", enter.as_ref().unchecked_ref())?;
    bar.add_event_listener_with_callback("mouseleave", leave.as_ref().unchecked_ref())?;

    Ok(BarHoverListener {
        _enter: enter,
        _leave: leave,
    })
}
