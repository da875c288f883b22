//! Browser task helpers.
//!
//! Native builds drop spawned futures and resolve sleeps immediately, so
//! components can be compiled and unit-tested without a browser executor.

#![allow(clippy::unused_async)]

use std::future::Future;
use std::time::Duration;

/// Spawn a future on the Leptos local executor.
pub fn spawn(fut: impl Future<Output = ()> + 'static) {
    #[cfg(feature = "csr")]
    {
        leptos::task::spawn_local(fut);
    }
    #[cfg(not(feature = "csr"))]
    {
        drop(fut);
    }
}

/// Resolve after `duration` on the browser timer queue.
pub async fn sleep(duration: Duration) {
    #[cfg(feature = "csr")]
    {
        gloo_timers::future::sleep(duration).await;
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = duration;
    }
}
