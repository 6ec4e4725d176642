//! Refresh scheduling
//!
//! One refresh runs immediately, then one per period for the life of the
//! page. Ticks never wait for the previous refresh; overlap is resolved by
//! the fetch tickets in [`DashboardState`].

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use chrono::NaiveTime;
use futures::future::{FutureExt, LocalBoxFuture};
use futures::task::LocalSpawnExt;

use crate::chart::ChartHandle;
use crate::client::MetricsSource;
use crate::error::Result;
use crate::state::{DashboardState, RefreshOutcome};
use crate::surface::Surface;

/// Repeating timer
pub trait Ticker {
    /// Call `tick` every `period` until the page goes away.
    fn every(&self, period: Duration, tick: Box<dyn FnMut()>) -> Result<()>;
}

/// Runs detached local futures
pub trait Spawner {
    fn spawn_task(&self, task: LocalBoxFuture<'static, ()>);
}

impl Spawner for futures::executor::LocalSpawner {
    fn spawn_task(&self, task: LocalBoxFuture<'static, ()>) {
        if let Err(e) = self.spawn_local(task) {
            log::error!("Failed to spawn refresh: {e}");
        }
    }
}

/// Fixed-period refresh driver
#[derive(Debug, Clone, Copy)]
pub struct Scheduler {
    period: Duration,
}

impl Scheduler {
    pub fn new(period: Duration) -> Self {
        Self { period }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Run `refresh` now, then on every tick.
    pub fn start<T, X, F>(&self, ticker: &T, spawner: X, refresh: F) -> Result<()>
    where
        T: Ticker,
        X: Spawner + 'static,
        F: Fn() -> LocalBoxFuture<'static, ()> + 'static,
    {
        spawner.spawn_task(refresh());
        log::info!("Refreshing every {}s", self.period.as_secs());
        ticker.every(self.period, Box::new(move || spawner.spawn_task(refresh())))
    }
}

/// One fetch-and-render cycle.
///
/// The state is borrowed only around the synchronous steps, never across the
/// fetch itself.
pub async fn refresh<S, H, M>(
    state: &RefCell<DashboardState<S, H>>,
    source: &M,
    clock: fn() -> NaiveTime,
) -> RefreshOutcome
where
    S: Surface,
    H: ChartHandle,
    M: MetricsSource,
{
    let ticket = state.borrow_mut().begin_fetch();
    let result = source.fetch_metrics().await;
    state.borrow_mut().complete(ticket, result, clock())
}

/// Package [`refresh`] as a factory the scheduler can call on every tick.
pub fn refresh_task<S, H, M>(
    state: Rc<RefCell<DashboardState<S, H>>>,
    source: Rc<M>,
    clock: fn() -> NaiveTime,
) -> impl Fn() -> LocalBoxFuture<'static, ()> + 'static
where
    S: Surface + 'static,
    H: ChartHandle + 'static,
    M: MetricsSource + 'static,
{
    move || {
        let state = Rc::clone(&state);
        let source = Rc::clone(&source);
        async move {
            refresh(&state, source.as_ref(), clock).await;
        }
        .boxed_local()
    }
}

/// Browser-local wall clock
pub fn local_now() -> NaiveTime {
    chrono::Local::now().time()
}
