//! Millisecond timestamps.
//!
//! Every component takes `now` as an argument; the firmware samples
//! `embassy_time::Instant::now().as_millis()` once per tick and threads
//! it through. A `u64` millisecond counter does not wrap in practice.

/// Monotonic milliseconds since boot.
pub type Millis = u64;

/// Time elapsed from `since` to `now`, zero if `since` lies in the future.
#[inline]
pub fn elapsed(now: Millis, since: Millis) -> Millis {
    now.saturating_sub(since)
}

/// `true` once at least `window` ms have passed since `since`.
#[inline]
pub fn has_elapsed(now: Millis, since: Millis, window: Millis) -> bool {
    elapsed(now, since) >= window
}
