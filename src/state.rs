//! Dashboard state
//!
//! Owns the page surface and the five chart handles. The refresh loop passes
//! it explicitly to every render instead of reaching for globals.
//!
//! Fetches can overlap when one outlives the refresh period. Each fetch takes
//! a [`FetchTicket`]; a completed fetch touches the page only if its ticket is
//! newer than the last one applied, so a slow response can never overwrite a
//! newer one. Responses that finish in issue order are always applied, even
//! when the next fetch is already in flight.

use chrono::NaiveTime;

use crate::chart::{ChartHandle, Charts};
use crate::config::Config;
use crate::error::FetchError;
use crate::render::Renderer;
use crate::surface::Surface;
use crate::types::MetricsSnapshot;

/// Notice shown while fetches are failing
pub const FETCH_ERROR_NOTICE: &str = "Unable to fetch data. Retrying...";

/// Sequence number handed out when a fetch starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FetchTicket(u64);

impl FetchTicket {
    pub fn seq(self) -> u64 {
        self.0
    }
}

/// What happened to a completed fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// Snapshot rendered
    Rendered,
    /// Fetch failed; page left as it was and the notice shown
    Failed,
    /// A newer fetch was applied first; result dropped
    Stale,
}

/// Everything a render touches
#[derive(Debug)]
pub struct DashboardState<S, H> {
    surface: S,
    charts: Charts<H>,
    renderer: Renderer,
    issued: u64,
    applied: u64,
}

impl<S: Surface, H: ChartHandle> DashboardState<S, H> {
    pub fn new(config: &Config, surface: S, charts: Charts<H>) -> Self {
        Self {
            surface,
            charts,
            renderer: Renderer::new(config),
            issued: 0,
            applied: 0,
        }
    }

    /// Register a new fetch
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.issued += 1;
        FetchTicket(self.issued)
    }

    /// Whether `ticket` is newer than every fetch applied so far
    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        ticket.0 > self.applied
    }

    /// Ticket of the last fetch that reached the page, if any
    pub fn last_applied(&self) -> Option<FetchTicket> {
        (self.applied > 0).then_some(FetchTicket(self.applied))
    }

    /// Apply a completed fetch.
    pub fn complete(
        &mut self,
        ticket: FetchTicket,
        result: std::result::Result<MetricsSnapshot, FetchError>,
        now: NaiveTime,
    ) -> RefreshOutcome {
        if !self.is_current(ticket) {
            log::debug!(
                "Dropping response for fetch #{} (#{} already applied)",
                ticket.0,
                self.applied
            );
            return RefreshOutcome::Stale;
        }
        self.applied = ticket.0;

        match result {
            Ok(snapshot) => {
                self.render(&snapshot, now);
                self.surface.clear_error();
                RefreshOutcome::Rendered
            }
            Err(e) => {
                log::error!("Error fetching metrics: {e}");
                self.surface.show_error(FETCH_ERROR_NOTICE);
                RefreshOutcome::Failed
            }
        }
    }

    /// Render a snapshot unconditionally
    pub fn render(&mut self, snapshot: &MetricsSnapshot, now: NaiveTime) {
        self.renderer
            .render(snapshot, &mut self.surface, &mut self.charts, now);
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn charts(&self) -> &Charts<H> {
        &self.charts
    }
}
