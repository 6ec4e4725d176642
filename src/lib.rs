//! TREVEE Dashboard - token metrics in the browser
//!
//! A WebAssembly front end that polls the metrics endpoint and renders the
//! snapshot into the page's text fields and Chart.js charts.
//!
//! # Architecture
//! - `client` fetches one [`MetricsSnapshot`] per refresh
//! - `render` writes a snapshot into a [`Surface`] and five chart handles
//! - `state` owns surface + charts and drops responses from superseded fetches
//! - `scheduler` runs one refresh at startup, then one per period
//! - `web` (wasm32 only) binds all of the above to the DOM and Chart.js
//!
//! # Features
//! - Price, market cap, TVL, holders and supply cards
//! - Per-chain panels for Sonic, Plasma and Ethereum
//! - Staking ratio, revenue and buyback panels
//! - 30-second auto-refresh; failures keep the last values on screen

#![allow(clippy::cast_precision_loss)] // Float casts OK for display
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::doc_markdown)] // Doc style flexibility
#![allow(clippy::float_cmp)] // Exact sentinel checks on payload values

pub mod chart;
pub mod client;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod format;
pub mod render;
pub mod scheduler;
pub mod state;
pub mod surface;
pub mod types;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use chart::{ChartHandle, ChartKind, ChartPeriod, Charts, MemoryChart};
pub use client::{MetricsClient, MetricsSource};
pub use config::Config;
pub use error::{DashboardError, FetchError, Result};
pub use render::Renderer;
pub use scheduler::{Scheduler, Spawner, Ticker};
pub use state::{DashboardState, FetchTicket, RefreshOutcome};
pub use surface::{MemorySurface, Surface};
pub use types::*;

/// Wasm entry point, run when the bundle is initialised
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() -> std::result::Result<(), wasm_bindgen::JsValue> {
    web::start().map_err(|e| {
        log::error!("Dashboard failed to start: {e}");
        e.into()
    })
}
