//! `PollScope` (registration) and `PollHandle` (running scope).

use super::state::{Feed, OnFailure, SourceState};
use crate::error::SdkError;
use futures_util::future::{BoxFuture, FutureExt};
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;
use tokio::sync::{watch, Notify};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

type Fetcher = Box<dyn Fn(Liveness) -> BoxFuture<'static, ()> + Send + Sync>;

// ─── Liveness ────────────────────────────────────────────────────────────────

/// Running flag shared by the timer, the fetch tasks and the handle.
///
/// Publishing holds the read side for the whole check-and-send, so `stop`
/// (the write side) can never land between the two.
#[derive(Clone)]
struct Liveness(Arc<RwLock<bool>>);

impl Liveness {
    fn new() -> Self {
        Self(Arc::new(RwLock::new(true)))
    }

    fn is_alive(&self) -> bool {
        *self.0.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run `f` only while the scope is alive. `kill` waits for it to return.
    fn while_alive<R>(&self, f: impl FnOnce() -> R) -> Option<R> {
        let alive = self.0.read().unwrap_or_else(PoisonError::into_inner);
        alive.then(f)
    }

    /// Returns whether the scope was still alive.
    fn kill(&self) -> bool {
        let mut alive = self.0.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *alive, false)
    }
}

// ─── Registered source ───────────────────────────────────────────────────────

struct Source {
    name: Arc<str>,
    /// Fetch on activation only, not on later ticks.
    once: bool,
    in_flight: Arc<AtomicBool>,
    fetch: Fetcher,
}

/// Clears the in-flight flag when the fetch task ends, panics included.
struct InFlightGuard(Arc<AtomicBool>);

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl Source {
    fn spawn_fetch(&self, alive: &Liveness) {
        if self.in_flight.swap(true, Ordering::AcqRel) {
            tracing::debug!(source = %self.name, "Previous fetch still running, skipping tick");
            return;
        }
        let guard = InFlightGuard(Arc::clone(&self.in_flight));
        let fut = (self.fetch)(alive.clone());
        tokio::spawn(async move {
            let _guard = guard;
            fut.await;
        });
    }
}

// ─── PollScope ───────────────────────────────────────────────────────────────

/// A set of fetch operations sharing one refresh interval.
pub struct PollScope {
    name: String,
    interval: Duration,
    sources: Vec<Source>,
}

impl PollScope {
    /// A zero interval is raised to one millisecond.
    pub fn new(name: impl Into<String>, interval: Duration) -> Self {
        Self {
            name: name.into(),
            interval: interval.max(Duration::from_millis(1)),
            sources: Vec::new(),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Register a source fetched on activation and on every tick.
    pub fn register<T, F, Fut>(
        &mut self,
        name: &str,
        on_failure: OnFailure<T>,
        fetch: F,
    ) -> Feed<T>
    where
        T: Send + Sync + 'static,
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, SdkError>> + Send + 'static,
    {
        self.add(name, false, on_failure, fetch)
    }

    /// Register a source fetched on activation only.
    pub fn register_once<T, F, Fut>(
        &mut self,
        name: &str,
        on_failure: OnFailure<T>,
        fetch: F,
    ) -> Feed<T>
    where
        T: Send + Sync + 'static,
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, SdkError>> + Send + 'static,
    {
        self.add(name, true, on_failure, fetch)
    }

    fn add<T, F, Fut>(
        &mut self,
        name: &str,
        once: bool,
        on_failure: OnFailure<T>,
        fetch: F,
    ) -> Feed<T>
    where
        T: Send + Sync + 'static,
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, SdkError>> + Send + 'static,
    {
        let (tx, rx) = watch::channel(SourceState::default());
        let tx = Arc::new(tx);
        let name: Arc<str> = Arc::from(format!("{}/{}", self.name, name));
        let fallback = match on_failure {
            OnFailure::KeepLast => None,
            OnFailure::Replace(value) => Some(Arc::new(value)),
        };

        let source_name = Arc::clone(&name);
        let fetcher: Fetcher = Box::new(move |alive: Liveness| {
            let request = fetch();
            let tx = Arc::clone(&tx);
            let fallback = fallback.clone();
            let name = Arc::clone(&source_name);
            async move {
                let result = request.await;
                let published = alive.while_alive(|| match result {
                    Ok(value) => tx.send_modify(|state| {
                        state.value = Some(Arc::new(value));
                        state.error = None;
                        state.updated_at = Some(Instant::now());
                    }),
                    Err(e) => {
                        tracing::warn!(source = %name, error = %e, "Fetch failed");
                        tx.send_modify(|state| {
                            if let Some(fallback) = &fallback {
                                state.value = Some(Arc::clone(fallback));
                            }
                            state.error = Some(Arc::new(e));
                        });
                    }
                });
                if published.is_none() {
                    tracing::debug!(source = %name, "Scope stopped, discarding result");
                }
            }
            .boxed()
        });

        self.sources.push(Source {
            name,
            once,
            in_flight: Arc::new(AtomicBool::new(false)),
            fetch: fetcher,
        });
        Feed::new(rx)
    }

    /// Start polling. The first round fires immediately.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn start(self) -> PollHandle {
        let alive = Liveness::new();
        let refresh = Arc::new(Notify::new());

        tracing::info!(
            scope = %self.name,
            interval_ms = self.interval.as_millis() as u64,
            sources = self.sources.len(),
            "Polling started"
        );

        let task = tokio::spawn(run_timer(
            self.interval,
            self.sources,
            alive.clone(),
            Arc::clone(&refresh),
        ));

        PollHandle {
            scope: self.name,
            alive,
            refresh,
            task: Some(task),
        }
    }
}

async fn run_timer(
    interval: Duration,
    sources: Vec<Source>,
    alive: Liveness,
    refresh: Arc<Notify>,
) {
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut first = true;

    loop {
        tokio::select! {
            _ = ticker.tick() => {}
            _ = refresh.notified() => {
                tracing::debug!("Manual refresh");
                ticker.reset();
            }
        }
        if !alive.is_alive() {
            break;
        }
        for source in sources.iter().filter(|s| first || !s.once) {
            source.spawn_fetch(&alive);
        }
        first = false;
    }
}

// ─── PollHandle ──────────────────────────────────────────────────────────────

/// A running scope. Stops polling when dropped.
pub struct PollHandle {
    scope: String,
    alive: Liveness,
    refresh: Arc<Notify>,
    task: Option<JoinHandle<()>>,
}

impl PollHandle {
    pub fn is_running(&self) -> bool {
        self.alive.is_alive()
    }

    /// Fire an extra round now (recurring sources only) and restart the
    /// interval from here.
    pub fn refresh_now(&self) {
        if self.is_running() {
            self.refresh.notify_one();
        }
    }

    /// Cancel the timer. Results of fetches still in flight are discarded;
    /// a publish already under way completes before this returns.
    pub fn stop(&mut self) {
        if self.alive.kill() {
            tracing::info!(scope = %self.scope, "Polling stopped");
        }
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl Drop for PollHandle {
    fn drop(&mut self) {
        self.stop();
    }
}
