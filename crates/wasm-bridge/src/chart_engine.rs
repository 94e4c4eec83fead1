//! Owns the loaded dataset and rebuilds the chart from it on demand

use bar_chart_config::ChartConfig;
use bar_chart_renderer::ChartScene;
use bar_chart_shared::{ChartResult, Dataset};
use std::rc::Rc;

use crate::controls::{attach_hover, BarHoverListener};
use crate::dom::{self, TooltipElement};

pub struct ChartEngine {
    dataset: Rc<Dataset>,
    config: Rc<ChartConfig>,
    /// Listeners of the bars currently on screen
    hover_listeners: Vec<BarHoverListener>,
    last_scene: Option<ChartScene>,
    draw_count: u32,
    mounted: bool,
}

impl ChartEngine {
    pub fn new(dataset: Rc<Dataset>, config: Rc<ChartConfig>) -> Self {
        Self {
            dataset,
            config,
            hover_listeners: Vec::new(),
            last_scene: None,
            draw_count: 0,
            mounted: false,
        }
    }

    pub fn dataset(&self) -> &Rc<Dataset> {
        &self.dataset
    }

    pub fn config(&self) -> &Rc<ChartConfig> {
        &self.config
    }

    pub fn last_scene(&self) -> Option<&ChartScene> {
        self.last_scene.as_ref()
    }

    pub fn draw_count(&self) -> u32 {
        self.draw_count
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn set_mounted(&mut self) {
        self.mounted = true;
    }

    /// Lay out the dataset for the current viewport and append the chart
    /// and a hidden tooltip to the body
    pub fn draw(&mut self) -> ChartResult<()> {
        let window = dom::window()?;
        let document = dom::document(&window)?;
        let viewport = dom::viewport_size(&window)?;

        let scene = ChartScene::build(&self.dataset, viewport, &self.config);
        let mounted = dom::mount_scene(&document, &scene, &self.config.style)?;
        let tooltip = Rc::new(TooltipElement::mount(&document)?);

        self.hover_listeners = attach_hover(
            &document,
            &mounted.bars,
            &scene.bars,
            tooltip,
            self.config.clone(),
        )?;
        self.last_scene = Some(scene);
        self.draw_count += 1;

        log::debug!(
            "Drew chart #{} at {}x{}",
            self.draw_count,
            viewport.width,
            viewport.height
        );
        Ok(())
    }

    /// Empty the body. Hover listeners go with the nodes they were on.
    pub fn clear(&mut self) -> ChartResult<()> {
        let document = dom::document(&dom::window()?)?;
        dom::clear_body(&document)?;
        self.hover_listeners.clear();
        Ok(())
    }

    /// Full teardown and rebuild from the in-memory dataset
    pub fn redraw(&mut self) -> ChartResult<()> {
        self.clear()?;
        self.draw()
    }
}
