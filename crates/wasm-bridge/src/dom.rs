//! Turns a [`ChartScene`] into SVG nodes under the document body

use bar_chart_config::StyleConfig;
use bar_chart_renderer::{Axis, BarShape, ChartScene, TitleText};
use bar_chart_shared::{ChartError, ChartResult, TooltipContent, TooltipState, ViewportSize};
use std::cell::RefCell;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

pub const TOOLTIP_ID: &str = "tooltip";
const TOOLTIP_VALUE_ID: &str = "val";
const TOOLTIP_DATE_ID: &str = "date";

pub fn window() -> ChartResult<Window> {
    web_sys::window().ok_or_else(|| ChartError::dom("No window object available"))
}

pub fn document(window: &Window) -> ChartResult<Document> {
    window
        .document()
        .ok_or_else(|| ChartError::dom("No document on window"))
}

pub fn body(document: &Document) -> ChartResult<HtmlElement> {
    document
        .body()
        .ok_or_else(|| ChartError::dom("Document has no body"))
}

/// Current inner size of the window in CSS pixels
pub fn viewport_size(window: &Window) -> ChartResult<ViewportSize> {
    let width = window.inner_width()?.as_f64().unwrap_or_default();
    let height = window.inner_height()?.as_f64().unwrap_or_default();
    Ok(ViewportSize::new(width, height))
}

/// Removes everything from the body, chart and tooltip included
pub fn clear_body(document: &Document) -> ChartResult<()> {
    body(document)?.set_inner_html("");
    Ok(())
}

pub fn set_cursor(document: &Document, cursor: &str) -> ChartResult<()> {
    let root: HtmlElement = document
        .document_element()
        .ok_or_else(|| ChartError::dom("Document has no root element"))?
        .dyn_into()
        .map_err(|_| ChartError::dom("Root element is not an HTML element"))?;
    root.style().set_property("cursor", cursor)?;
    Ok(())
}

/// Nodes of a mounted chart that listeners attach to
pub struct MountedChart {
    pub svg: Element,
    /// In the same order as the scene's bars
    pub bars: Vec<Element>,
}

fn svg_element(document: &Document, tag: &str, attributes: &[(&str, String)]) -> ChartResult<Element> {
    let element = document.create_element_ns(Some(SVG_NS), tag)?;
    for (name, value) in attributes {
        element.set_attribute(name, value)?;
    }
    Ok(element)
}

pub fn mount_scene(
    document: &Document,
    scene: &ChartScene,
    style: &StyleConfig,
) -> ChartResult<MountedChart> {
    let svg = svg_element(
        document,
        "svg",
        &[
            ("width", scene.width.to_string()),
            ("height", scene.height.to_string()),
            ("class", "graph".to_string()),
        ],
    )?;
    body(document)?.append_child(&svg)?;

    mount_axis(document, &svg, &scene.x_axis)?;
    mount_axis(document, &svg, &scene.y_axis)?;

    let bars = scene
        .bars
        .iter()
        .map(|bar| {
            let rect = bar_element(document, bar, &style.bar_fill)?;
            svg.append_child(&rect)?;
            Ok(rect)
        })
        .collect::<ChartResult<Vec<_>>>()?;

    svg.append_child(&title_element(document, &scene.title)?.into())?;

    Ok(MountedChart { svg, bars })
}

fn mount_axis(document: &Document, svg: &Element, axis: &Axis) -> ChartResult<()> {
    let orientation = axis.orientation;
    let group = svg_element(
        document,
        "g",
        &[
            ("id", axis.id.clone()),
            ("transform", axis.transform()),
            ("fill", "none".to_string()),
            ("font-size", "10".to_string()),
            ("font-family", "sans-serif".to_string()),
            ("text-anchor", orientation.text_anchor().to_string()),
        ],
    )?;

    group.append_child(&svg_element(
        document,
        "path",
        &[
            ("class", "domain".to_string()),
            ("stroke", "currentColor".to_string()),
            ("d", axis.domain_path()),
        ],
    )?.into())?;

    let (line_attr, line_len) = orientation.tick_line();
    let (label_attr, label_pos) = orientation.label_position();
    for tick in &axis.ticks {
        let tick_group = svg_element(
            document,
            "g",
            &[
                ("class", "tick".to_string()),
                ("opacity", "1".to_string()),
                ("transform", orientation.tick_transform(tick.offset)),
            ],
        )?;
        tick_group.append_child(&svg_element(
            document,
            "line",
            &[
                ("stroke", "currentColor".to_string()),
                (line_attr, line_len.to_string()),
            ],
        )?.into())?;

        let label = svg_element(
            document,
            "text",
            &[
                ("fill", "currentColor".to_string()),
                (label_attr, label_pos.to_string()),
                ("dy", orientation.label_dy().to_string()),
            ],
        )?;
        label.set_text_content(Some(&tick.label));
        tick_group.append_child(&label)?;

        group.append_child(&tick_group)?;
    }

    svg.append_child(&group)?;
    Ok(())
}

fn bar_element(document: &Document, bar: &BarShape, fill: &str) -> ChartResult<Element> {
    svg_element(
        document,
        "rect",
        &[
            ("width", bar.width.to_string()),
            ("height", bar.height.to_string()),
            ("x", bar.x.to_string()),
            ("y", bar.y.to_string()),
            ("fill", fill.to_string()),
            ("class", "bar".to_string()),
            ("data-value", bar.value.to_string()),
            ("data-date", bar.date.clone()),
        ],
    )
}

fn title_element(document: &Document, title: &TitleText) -> ChartResult<Element> {
    let text = svg_element(
        document,
        "text",
        &[
            ("x", title.x.to_string()),
            ("y", title.y.to_string()),
            ("id", "title".to_string()),
            ("text-anchor", "middle".to_string()),
        ],
    )?;
    text.set_text_content(Some(&title.text));
    Ok(text)
}

/// The floating `#tooltip` div and its two text lines
pub struct TooltipElement {
    root: HtmlElement,
    value: Element,
    date: Element,
    state: RefCell<TooltipState>,
}

impl TooltipElement {
    /// Appends a hidden tooltip to the body
    pub fn mount(document: &Document) -> ChartResult<Self> {
        let root: HtmlElement = document
            .create_element("div")?
            .dyn_into()
            .map_err(|_| ChartError::dom("div is not an HTML element"))?;
        root.set_id(TOOLTIP_ID);

        let value = document.create_element("p")?;
        value.set_id(TOOLTIP_VALUE_ID);
        value.set_text_content(Some("Value"));
        let date = document.create_element("p")?;
        date.set_id(TOOLTIP_DATE_ID);
        date.set_text_content(Some("Text"));

        root.append_child(&value)?;
        root.append_child(&date)?;
        body(document)?.append_child(&root)?;

        let tooltip = Self {
            root,
            value,
            date,
            state: RefCell::new(TooltipState::default()),
        };
        tooltip.apply_opacity()?;
        Ok(tooltip)
    }

    /// The tooltip currently in the document, if a chart is drawn
    pub fn find(document: &Document) -> Option<HtmlElement> {
        document
            .get_element_by_id(TOOLTIP_ID)
            .and_then(|el| el.dyn_into().ok())
    }

    pub fn show(&self, content: TooltipContent) -> ChartResult<()> {
        self.root.set_attribute("data-date", &content.date)?;
        self.date.set_text_content(Some(&content.date));
        self.value.set_text_content(Some(&content.value));
        self.state.borrow_mut().show(content);
        self.apply_opacity()
    }

    pub fn hide(&self) -> ChartResult<()> {
        self.state.borrow_mut().hide();
        self.apply_opacity()
    }

    pub fn is_visible(&self) -> bool {
        self.state.borrow().visible
    }

    fn apply_opacity(&self) -> ChartResult<()> {
        let opacity = self.state.borrow().opacity();
        self.root.style().set_property("opacity", opacity)?;
        Ok(())
    }
}
