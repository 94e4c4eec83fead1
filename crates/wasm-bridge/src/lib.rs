//! WASM Bridge crate for the bar chart
//! Loads the dataset, mounts the chart into the page and wires the
//! browser events that keep it interactive

use bar_chart_config::ChartConfig;
use bar_chart_data::{parse_dataset_json, DataLoader};
use bar_chart_shared::{ChartError, ChartResult};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

pub mod chart_engine;
pub mod controls;
pub mod dom;

use chart_engine::ChartEngine;

/// A loaded chart. Redraws reuse the dataset it was created with.
#[wasm_bindgen]
pub struct Chart {
    engine: Rc<RefCell<ChartEngine>>,
}

#[wasm_bindgen]
impl Chart {
    /// Chart over an inline `{ name, data }` document with default settings
    #[wasm_bindgen(constructor)]
    pub fn new(dataset_json: &str) -> Result<Chart, JsValue> {
        Ok(Self::from_parts(dataset_json, ChartConfig::default())?)
    }

    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(dataset_json: &str, config_json: &str) -> Result<Chart, JsValue> {
        let config = ChartConfig::from_json(config_json).map_err(ChartError::from)?;
        Ok(Self::from_parts(dataset_json, config)?)
    }

    /// Fetch the configured dataset. Nothing is drawn until `mount`.
    pub async fn load(config_json: Option<String>) -> Result<Chart, JsValue> {
        let config = match config_json {
            Some(json) => ChartConfig::from_json(&json).map_err(ChartError::from)?,
            None => ChartConfig::default(),
        };
        Ok(Self::fetch(config).await?)
    }

    /// Draw the chart and start listening for pointer moves and resizes.
    /// Calling it again only redraws.
    pub fn mount(&self) -> Result<(), JsValue> {
        if self.engine.borrow().is_mounted() {
            return self.redraw();
        }

        let window = dom::window()?;
        let document = dom::document(&window)?;
        let config = self.engine.borrow().config().clone();

        // A failed first draw leaves the chart unmounted with no listeners
        self.engine.borrow_mut().draw()?;

        // Both listeners live for the rest of the page session
        controls::track_pointer(&window, &document, config)?.forget();
        controls::redraw_on_resize(&window, self.engine.clone())?.forget();

        let mut engine = self.engine.borrow_mut();
        engine.set_mounted();

        log::info!(
            "Chart '{}' mounted with {} bars",
            engine.dataset().title(),
            engine.dataset().len()
        );
        Ok(())
    }

    /// Clear the body and draw again from the loaded dataset
    pub fn redraw(&self) -> Result<(), JsValue> {
        Ok(self.engine.borrow_mut().redraw()?)
    }

    #[wasm_bindgen(js_name = barCount)]
    pub fn bar_count(&self) -> usize {
        self.engine.borrow().dataset().len()
    }

    pub fn title(&self) -> String {
        self.engine.borrow().dataset().title().to_string()
    }

    #[wasm_bindgen(js_name = drawCount)]
    pub fn draw_count(&self) -> u32 {
        self.engine.borrow().draw_count()
    }

    /// Layout of the last draw, or `undefined` before the first one
    pub fn scene(&self) -> Result<JsValue, JsValue> {
        match self.engine.borrow().last_scene() {
            Some(scene) => Ok(serde_wasm_bindgen::to_value(scene)?),
            None => Ok(JsValue::UNDEFINED),
        }
    }
}

impl Chart {
    fn from_parts(dataset_json: &str, config: ChartConfig) -> ChartResult<Chart> {
        let dataset = parse_dataset_json(dataset_json)?;
        Ok(Self::with_engine(ChartEngine::new(
            Rc::new(dataset),
            Rc::new(config),
        )))
    }

    async fn fetch(config: ChartConfig) -> ChartResult<Chart> {
        let dataset = DataLoader::from_config(&config).load().await?;
        Ok(Self::with_engine(ChartEngine::new(
            Rc::new(dataset),
            Rc::new(config),
        )))
    }

    fn with_engine(engine: ChartEngine) -> Chart {
        Chart {
            engine: Rc::new(RefCell::new(engine)),
        }
    }
}

/// Page entry point: read overrides from the query string, load the data
/// once, then draw. A failed load rejects the returned promise and leaves
/// the page blank.
#[wasm_bindgen]
pub async fn run() -> Result<Chart, JsValue> {
    let config = page_config()?;
    log::set_max_level(config.log_level_filter());

    let chart = Chart::fetch(config).await.map_err(|e| {
        log::error!("Failed to load chart data: {e}");
        e
    })?;
    chart.mount()?;
    Ok(chart)
}

fn page_config() -> ChartResult<ChartConfig> {
    let search = dom::window()?.location().search()?;
    let mut config = ChartConfig::default();
    config.apply_query(&search)?;
    Ok(config)
}

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    // Already set when the module is instantiated twice
    let _ = console_log::init_with_level(log::Level::Trace);
    log::set_max_level(log::LevelFilter::Info);
    log::info!("Bar chart WASM module initialized");
}
