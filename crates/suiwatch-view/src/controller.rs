//! View state controller.
//!
//! The controller owns the [`FetchState`] shown by the dashboard and decides
//! when to fetch. Every dispatch is tagged with a generation number taken
//! under the state lock; a result is applied only if its generation is still
//! the latest, so a slow response for a superseded timeframe can never
//! overwrite a newer one.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use suiwatch_chart::build_display_series;
use suiwatch_fetch::MarketSource;
use suiwatch_types::{FetchState, Timeframe};
use tokio::sync::{RwLock, watch};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

use crate::config::ControllerConfig;

/// Handle to a dispatched fetch. Completes once its result is applied or dropped.
pub type FetchHandle = JoinHandle<()>;

#[derive(Debug)]
struct Model {
    state: FetchState,
    generation: u64,
    closed: bool,
}

struct Shared {
    source: Arc<dyn MarketSource>,
    model: RwLock<Model>,
    updates: watch::Sender<FetchState>,
    point_budget: usize,
}

impl Shared {
    async fn dispatch(self: &Arc<Self>) -> Option<FetchHandle> {
        let mut model = self.model.write().await;
        self.dispatch_locked(&mut model)
    }

    /// Marks a new fetch as started and spawns it. Returns None once closed.
    fn dispatch_locked(self: &Arc<Self>, model: &mut Model) -> Option<FetchHandle> {
        if model.closed {
            return None;
        }
        model.generation += 1;
        model.state.begin_fetch();
        self.updates.send_replace(model.state.clone());

        let generation = model.generation;
        let timeframe = model.state.timeframe;
        tracing::debug!(generation, %timeframe, "dispatching fetch");

        let shared = Arc::clone(self);
        Some(tokio::spawn(async move {
            shared.complete(generation, timeframe).await;
        }))
    }

    async fn complete(&self, generation: u64, timeframe: Timeframe) {
        let result = self.source.fetch(timeframe).await;
        let result = result.map(|snapshot| {
            let series = build_display_series(&snapshot.series, timeframe, self.point_budget);
            (snapshot.quote, series)
        });

        let mut model = self.model.write().await;
        if model.closed {
            tracing::debug!(generation, "controller closed, dropping fetch result");
            return;
        }
        if model.generation != generation {
            tracing::debug!(
                generation,
                latest = model.generation,
                %timeframe,
                "discarding superseded fetch result"
            );
            return;
        }

        match result {
            Ok((quote, series)) => {
                tracing::info!(%timeframe, points = series.len(), "market data refreshed");
                model.state.apply_success(quote, series);
            }
            Err(err) => {
                tracing::warn!(%timeframe, error = %err, "market data fetch failed");
                model.state.apply_failure(&err);
            }
        }
        self.updates.send_replace(model.state.clone());
    }
}

/// Drives fetches for the dashboard and publishes state transitions.
///
/// Fetches are dispatched on [`start`](Self::start), on a timeframe change,
/// on [`retry`](Self::retry) and once per poll interval. The poll timer runs
/// from `start` and is not reset by timeframe changes.
///
/// # Example
///
/// ```no_run
/// use suiwatch_fetch::Fetcher;
/// use suiwatch_types::Timeframe;
/// use suiwatch_view::{ControllerConfig, ViewController};
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let fetcher = Fetcher::with_defaults()?;
/// let mut controller = ViewController::new(fetcher, ControllerConfig::default());
///
/// if let Some(initial) = controller.start().await {
///     initial.await?;
/// }
/// controller.select_timeframe(Timeframe::Month).await;
///
/// let state = controller.snapshot().await;
/// println!("{}", state.phase());
///
/// controller.teardown().await;
/// # Ok(())
/// # }
/// ```
pub struct ViewController {
    shared: Arc<Shared>,
    poll_interval: Duration,
    poller: Option<JoinHandle<()>>,
    started: bool,
}

impl ViewController {
    /// Creates an idle controller over a market source.
    #[must_use]
    pub fn new<S>(source: S, config: ControllerConfig) -> Self
    where
        S: MarketSource + 'static,
    {
        Self::from_shared_source(Arc::new(source), config)
    }

    /// Creates an idle controller over a shared market source.
    #[must_use]
    pub fn from_shared_source(source: Arc<dyn MarketSource>, config: ControllerConfig) -> Self {
        let state = FetchState::new(config.initial_timeframe);
        let (updates, _) = watch::channel(state.clone());

        Self {
            shared: Arc::new(Shared {
                source,
                model: RwLock::new(Model {
                    state,
                    generation: 0,
                    closed: false,
                }),
                updates,
                point_budget: config.point_budget,
            }),
            poll_interval: config.poll_interval,
            poller: None,
            started: false,
        }
    }

    /// Dispatches the initial fetch and starts the poll timer.
    ///
    /// Returns the handle of the initial fetch, or None if the controller was
    /// already started or has been torn down.
    pub async fn start(&mut self) -> Option<FetchHandle> {
        if self.started {
            return None;
        }
        let initial = self.shared.dispatch().await?;
        self.started = true;

        if !self.poll_interval.is_zero() {
            self.poller = Some(self.spawn_poller());
        }
        Some(initial)
    }

    fn spawn_poller(&self) -> JoinHandle<()> {
        let shared = Arc::clone(&self.shared);
        let period = self.poll_interval;
        let first_tick = Instant::now() + period;

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval_at(first_tick, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                tracing::debug!("poll interval elapsed");
                if shared.dispatch().await.is_none() {
                    break;
                }
            }
        })
    }

    /// Switches to `timeframe` and dispatches a fetch for it.
    ///
    /// Selecting the current timeframe is a no-op and returns None. The quote
    /// and series stay visible until the new result arrives.
    pub async fn select_timeframe(&self, timeframe: Timeframe) -> Option<FetchHandle> {
        let mut model = self.shared.model.write().await;
        if model.closed || model.state.timeframe == timeframe {
            return None;
        }
        tracing::info!(from = %model.state.timeframe, to = %timeframe, "timeframe changed");
        model.state.timeframe = timeframe;
        self.shared.dispatch_locked(&mut model)
    }

    /// Dispatches a fetch for the current timeframe.
    pub async fn retry(&self) -> Option<FetchHandle> {
        tracing::info!("retry requested");
        self.shared.dispatch().await
    }

    /// Returns a copy of the current state.
    pub async fn snapshot(&self) -> FetchState {
        self.shared.model.read().await.state.clone()
    }

    /// Returns the selected timeframe.
    pub async fn timeframe(&self) -> Timeframe {
        self.shared.model.read().await.state.timeframe
    }

    /// Subscribes to state transitions.
    ///
    /// The receiver starts at the current state.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<FetchState> {
        self.shared.updates.subscribe()
    }

    /// Returns true while the controller accepts new dispatches.
    pub async fn is_active(&self) -> bool {
        !self.shared.model.read().await.closed
    }

    /// Stops polling and drops any result that completes afterwards.
    pub async fn teardown(&mut self) {
        self.shared.model.write().await.closed = true;

        if let Some(poller) = self.poller.take() {
            poller.abort();
            let _ = poller.await;
        }
        tracing::debug!("controller torn down");
    }
}

impl Drop for ViewController {
    fn drop(&mut self) {
        if let Ok(mut model) = self.shared.model.try_write() {
            model.closed = true;
        }
        if let Some(poller) = self.poller.take() {
            poller.abort();
        }
    }
}

impl fmt::Debug for ViewController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewController")
            .field("poll_interval", &self.poll_interval)
            .field("point_budget", &self.shared.point_budget)
            .field("started", &self.started)
            .field("polling", &self.poller.is_some())
            .finish_non_exhaustive()
    }
}
