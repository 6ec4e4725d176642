//! Browser bindings
//!
//! Everything that touches `window`, the DOM or Chart.js lives here and is
//! compiled for `wasm32` only. The rest of the crate sees these through the
//! [`Surface`](crate::surface::Surface), [`ChartHandle`](crate::chart::ChartHandle),
//! [`Ticker`](crate::scheduler::Ticker) and [`Spawner`](crate::scheduler::Spawner)
//! traits.

mod chartjs;
mod controls;
mod dom;
mod logger;
mod timer;

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Reflect;
use wasm_bindgen::JsValue;

use crate::chart::Charts;
use crate::client::MetricsClient;
use crate::config::{Config, KEY_PREFIX};
use crate::error::{DashboardError, Result};
use crate::scheduler::{Scheduler, local_now, refresh_task};
use crate::state::DashboardState;

pub use chartjs::ChartJs;
pub use dom::DocumentSurface;
pub use timer::{IntervalTicker, LocalExecutor};

/// Wire the page up and start polling.
pub fn start() -> Result<()> {
    console_error_panic_hook::set_once();

    let config = load_config();
    logger::init(config.log_level_filter());
    config.validate()?;

    let window = web_sys::window().ok_or_else(|| DashboardError::Dom("no window".into()))?;
    let document = window
        .document()
        .ok_or_else(|| DashboardError::Dom("no document".into()))?;
    let origin = window.location().origin().map_err(|e| dom_error(&e))?;

    chartjs::apply_defaults()?;
    let charts = Charts::build(|kind| ChartJs::create(&document, kind))?;
    controls::setup_chart_controls(&document)?;

    let state = Rc::new(RefCell::new(DashboardState::new(
        &config,
        DocumentSurface::new(document),
        charts,
    )));
    let client = Rc::new(MetricsClient::new(&config.metrics_url(&origin))?);
    log::info!(
        "Dashboard starting ({}), polling {}",
        config.environment,
        client.url()
    );

    Scheduler::new(config.refresh_interval()).start(
        &IntervalTicker::new(window),
        LocalExecutor,
        refresh_task(state, client, local_now),
    )
}

/// Config with overrides from `window.TREVEE_DASHBOARD_*`
fn load_config() -> Config {
    Config::from_lookup(|key| read_global(&format!("{KEY_PREFIX}{key}")))
}

fn read_global(key: &str) -> Option<String> {
    let value = Reflect::get(&js_sys::global(), &JsValue::from_str(key)).ok()?;
    value
        .as_string()
        .or_else(|| value.as_f64().map(|n| n.to_string()))
}

/// Readable message from a thrown JS value
pub(crate) fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

pub(crate) fn dom_error(err: &JsValue) -> DashboardError {
    DashboardError::Dom(describe(err))
}
