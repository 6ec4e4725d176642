//! `setInterval` ticker and `spawn_local` executor

use std::time::Duration;

use futures::future::LocalBoxFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Window;

use crate::error::Result;
use crate::scheduler::{Spawner, Ticker};

use super::dom_error;

/// Repeating timer on `window.setInterval`
pub struct IntervalTicker {
    window: Window,
}

impl IntervalTicker {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Ticker for IntervalTicker {
    fn every(&self, period: Duration, tick: Box<dyn FnMut()>) -> Result<()> {
        let millis = i32::try_from(period.as_millis()).unwrap_or(i32::MAX);
        let callback = Closure::<dyn FnMut()>::wrap(tick);

        self.window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                millis,
            )
            .map_err(|e| dom_error(&e))?;

        // Interval lives as long as the page.
        callback.forget();
        Ok(())
    }
}

/// Spawns onto the browser microtask queue
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalExecutor;

impl Spawner for LocalExecutor {
    fn spawn_task(&self, task: LocalBoxFuture<'static, ()>) {
        wasm_bindgen_futures::spawn_local(task);
    }
}
