//! Cancellable fixed-interval polling with stale-response suppression.
//!
//! DESIGN
//! ======
//! Each tick issues a sequence number and spawns its fetch as a separate task.
//! A tick that fires while the previous fetch is still pending is skipped, so
//! a server slower than the interval sees one request at a time and every
//! reply still renders. A response is applied only while its sequence number
//! is the latest issued (manual refreshes share the counter) and the guard
//! has not been cancelled. Cancelling stops future ticks and turns every
//! in-flight response into a no-op, which keeps late replies from writing
//! into torn-down view state.

#[cfg(test)]
#[path = "poll_test.rs"]
mod poll_test;

use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use futures::future::LocalBoxFuture;
use futures::{FutureExt, Stream, StreamExt};

/// Shared sequence counter and cancellation flag for one poll loop.
#[derive(Clone, Debug, Default)]
pub struct PollGuard {
    inner: Arc<GuardInner>,
}

#[derive(Debug, Default)]
struct GuardInner {
    issued: AtomicU64,
    cancelled: AtomicBool,
}

impl PollGuard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve the next sequence number, or `None` once cancelled.
    pub fn issue(&self) -> Option<u64> {
        if self.is_cancelled() {
            return None;
        }
        Some(self.inner.issued.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether a response tagged `seq` may still be applied.
    #[must_use]
    pub fn is_current(&self, seq: u64) -> bool {
        !self.is_cancelled() && self.inner.issued.load(Ordering::SeqCst) == seq
    }

    /// Most recently issued sequence number (0 before the first tick).
    #[must_use]
    pub fn latest(&self) -> u64 {
        self.inner.issued.load(Ordering::SeqCst)
    }

    pub fn cancel(&self) {
        self.inner.cancelled.store(true, Ordering::SeqCst);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.load(Ordering::SeqCst)
    }
}

/// Holds at most one running poll; replacing or clearing cancels the old one.
#[derive(Clone, Debug, Default)]
pub struct PollSlot {
    current: Arc<Mutex<Option<PollGuard>>>,
}

impl PollSlot {
    /// Follow an activity flag: start a poll when `active` and none is
    /// running, cancel the running one when not.
    pub fn sync(&self, active: bool, start: impl FnOnce() -> PollGuard) {
        if !active {
            self.clear();
        } else if !self.is_active() {
            self.replace(Some(start()));
        }
    }

    pub fn replace(&self, next: Option<PollGuard>) {
        let previous = std::mem::replace(&mut *self.current.lock().unwrap_or_else(PoisonError::into_inner), next);
        if let Some(guard) = previous {
            guard.cancel();
        }
    }

    pub fn clear(&self) {
        self.replace(None);
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .is_some_and(|guard| !guard.is_cancelled())
    }
}

/// Drive a poll loop: fetch immediately, then once per item of `ticks`.
///
/// `spawn` runs each fetch as its own task; ticks arriving while that task is
/// pending are skipped. The loop ends when the guard is cancelled (checked on
/// every tick) or `ticks` is exhausted.
pub async fn run_poll<Ticks, Spawn, Fetch, Fut, T, Apply>(
    guard: PollGuard,
    mut ticks: Ticks,
    spawn: Spawn,
    fetch: Fetch,
    apply: Apply,
) where
    Ticks: Stream<Item = ()> + Unpin,
    Spawn: Fn(LocalBoxFuture<'static, ()>),
    Fetch: Fn() -> Fut,
    Fut: Future<Output = T> + 'static,
    T: 'static,
    Apply: Fn(T) + Clone + 'static,
{
    let in_flight = Rc::new(Cell::new(false));
    loop {
        if guard.is_cancelled() {
            break;
        }
        if in_flight.get() {
            log::debug!("poll #{} still pending, skipping tick", guard.latest());
        } else {
            let pending = fetch();
            let done = in_flight.clone();
            let task = guarded(
                &guard,
                async move {
                    let result = pending.await;
                    done.set(false);
                    result
                },
                apply.clone(),
            );
            let Some(task) = task else {
                break;
            };
            in_flight.set(true);
            spawn(task);
        }
        if ticks.next().await.is_none() {
            break;
        }
    }
}

/// Tag `pending` with the next sequence number of `guard`.
///
/// The returned task applies the result only if no newer request was issued
/// on `guard` meanwhile. Returns `None` once the guard is cancelled.
pub fn guarded<Fut, T, Apply>(guard: &PollGuard, pending: Fut, apply: Apply) -> Option<LocalBoxFuture<'static, ()>>
where
    Fut: Future<Output = T> + 'static,
    T: 'static,
    Apply: FnOnce(T) + 'static,
{
    let seq = guard.issue()?;
    let guard = guard.clone();
    Some(
        async move {
            let result = pending.await;
            if guard.is_current(seq) {
                apply(result);
            } else {
                log::debug!("discarding poll response #{seq} (latest #{})", guard.latest());
            }
        }
        .boxed_local(),
    )
}

/// Start a browser poll loop on the Leptos executor.
///
/// Native builds return an idle guard without spawning anything.
pub fn start<Fetch, Fut, T, Apply>(every: Duration, fetch: Fetch, apply: Apply) -> PollGuard
where
    Fetch: Fn() -> Fut + 'static,
    Fut: Future<Output = T> + 'static,
    T: 'static,
    Apply: Fn(T) + Clone + 'static,
{
    let guard = PollGuard::new();
    #[cfg(feature = "csr")]
    {
        let millis = u32::try_from(every.as_millis()).unwrap_or(u32::MAX);
        let ticks = gloo_timers::future::IntervalStream::new(millis);
        leptos::task::spawn_local(run_poll(
            guard.clone(),
            ticks,
            |task| leptos::task::spawn_local(task),
            fetch,
            apply,
        ));
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (every, fetch, apply);
    }
    guard
}

/// Run `fetch` once on the Leptos executor.
///
/// The result is applied unless the returned guard is cancelled before the
/// response arrives.
pub fn once<Fut, T, Apply>(fetch: Fut, apply: Apply) -> PollGuard
where
    Fut: Future<Output = T> + 'static,
    T: 'static,
    Apply: FnOnce(T) + 'static,
{
    let guard = PollGuard::new();
    if let Some(task) = guarded(&guard, fetch, apply) {
        crate::util::task::spawn(task);
    }
    guard
}
