//! Chart.js-backed chart handles
//!
//! Chart.js is loaded as a global script; instances are built with
//! `Reflect::construct` and mutated in place before each `update()`.

use js_sys::{Array, Function, Object, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlCanvasElement};

use crate::chart::{ChartHandle, ChartKind, DEFAULT_BORDER_COLOR, DEFAULT_TEXT_COLOR};
use crate::error::{DashboardError, Result};
use crate::format::format_number;

use super::describe;

fn chart_error(err: &JsValue) -> DashboardError {
    DashboardError::Chart(describe(err))
}

fn key(name: &str) -> JsValue {
    JsValue::from_str(name)
}

/// Walk `path` from `root`, failing on the first missing property
fn lookup(root: &JsValue, path: &[&str]) -> Result<JsValue> {
    let mut current = root.clone();
    for name in path {
        current = Reflect::get(&current, &key(name)).map_err(|e| chart_error(&e))?;
        if current.is_undefined() || current.is_null() {
            return Err(DashboardError::Chart(format!("missing `{}`", path.join("."))));
        }
    }
    Ok(current)
}

fn set(target: &JsValue, name: &str, value: &JsValue) -> Result<()> {
    Reflect::set(target, &key(name), value).map_err(|e| chart_error(&e))?;
    Ok(())
}

fn chart_constructor() -> Result<Function> {
    let ctor = Reflect::get(&js_sys::global(), &key("Chart")).map_err(|e| chart_error(&e))?;
    ctor.dyn_into::<Function>()
        .map_err(|_| DashboardError::Chart("Chart.js is not loaded".into()))
}

/// Set `Chart.defaults` colors shared by every chart
pub fn apply_defaults() -> Result<()> {
    let defaults = lookup(&chart_constructor()?.into(), &["defaults"])?;
    set(&defaults, "color", &key(DEFAULT_TEXT_COLOR))?;
    set(&defaults, "borderColor", &key(DEFAULT_BORDER_COLOR))
}

/// `prefix` + compact number, for axis ticks and tooltips
fn number_callback(prefix: &'static str) -> Closure<dyn Fn(JsValue) -> JsValue> {
    Closure::<dyn Fn(JsValue) -> JsValue>::new(move |value: JsValue| {
        let n = value.as_f64().unwrap_or(0.0);
        JsValue::from_str(&format!("{prefix}{}", format_number(n)))
    })
}

fn tooltip_label_callback(prefix: &'static str) -> Closure<dyn Fn(JsValue) -> JsValue> {
    Closure::<dyn Fn(JsValue) -> JsValue>::new(move |context: JsValue| {
        let y = lookup(&context, &["parsed", "y"])
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        JsValue::from_str(&format!("{prefix}{}", format_number(y)))
    })
}

/// Attach the formatting callbacks JSON cannot carry
fn attach_callbacks(config: &JsValue, kind: ChartKind) -> Result<()> {
    let Some(prefix) = kind.value_prefix() else {
        return Ok(());
    };

    let ticks = lookup(config, &["options", "scales", "y", "ticks"])?;
    let tick = number_callback(prefix);
    set(&ticks, "callback", tick.as_ref())?;
    tick.forget();

    if kind.chart_type() == "line" {
        let tooltip = lookup(config, &["options", "plugins", "tooltip"])?;
        let callbacks = Object::new();
        let label = tooltip_label_callback(prefix);
        set(&callbacks, "label", label.as_ref())?;
        set(&tooltip, "callbacks", &callbacks)?;
        label.forget();
    }
    Ok(())
}

/// One live Chart.js instance
pub struct ChartJs {
    kind: ChartKind,
    chart: JsValue,
}

impl ChartJs {
    /// Build the chart for `kind` on its canvas
    pub fn create(document: &Document, kind: ChartKind) -> Result<Self> {
        let id = kind.canvas_id();
        let canvas = document
            .get_element_by_id(id)
            .ok_or_else(|| DashboardError::Dom(format!("canvas #{id} not found")))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| DashboardError::Dom(format!("#{id} is not a canvas")))?;
        let context = canvas
            .get_context("2d")
            .map_err(|e| chart_error(&e))?
            .ok_or_else(|| DashboardError::Chart(format!("no 2d context on #{id}")))?;

        let config = js_sys::JSON::parse(&serde_json::to_string(&kind.config())?)
            .map_err(|e| chart_error(&e))?;
        attach_callbacks(&config, kind)?;

        let chart = Reflect::construct(&chart_constructor()?, &Array::of2(&context, &config))
            .map_err(|e| chart_error(&e))?;
        log::debug!("Created {} chart on #{id}", kind.chart_type());

        Ok(Self { kind, chart })
    }

    fn data(&self) -> Result<JsValue> {
        lookup(&self.chart, &["data"])
    }

    fn first_dataset(&self) -> Result<JsValue> {
        let datasets = lookup(&self.chart, &["data", "datasets"])?;
        Reflect::get_u32(&datasets, 0).map_err(|e| chart_error(&e))
    }

    fn redraw(&self) -> Result<()> {
        let update = lookup(&self.chart, &["update"])?
            .dyn_into::<Function>()
            .map_err(|_| DashboardError::Chart(format!("{} chart has no update()", self.kind)))?;
        update.call0(&self.chart).map_err(|e| chart_error(&e))?;
        Ok(())
    }
}

fn number_array(values: &[f64]) -> Array {
    values.iter().map(|v| JsValue::from_f64(*v)).collect()
}

impl ChartHandle for ChartJs {
    fn set_series(&mut self, labels: &[String], values: &[f64]) -> Result<()> {
        let labels: Array = labels.iter().map(|l| JsValue::from_str(l)).collect();
        set(&self.data()?, "labels", &labels)?;
        set(&self.first_dataset()?, "data", &number_array(values))?;
        self.redraw()
    }

    fn set_values(&mut self, values: &[f64]) -> Result<()> {
        set(&self.first_dataset()?, "data", &number_array(values))?;
        self.redraw()
    }
}
