//! Timestamp policy for category write paths.
//!
//! # Invariants
//! - A create stamp reads the clock once, so `created == updated` on insert.
//! - An update stamp never touches `created`.
//! - `SystemClock` never returns the same value twice within a process.

use crate::repo::category_row::CategoryRow;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static LAST_ISSUED_MS: AtomicI64 = AtomicI64::new(0);

/// Source of epoch-millisecond timestamps.
pub trait Clock {
    fn now_ms(&self) -> i64;
}

/// Wall clock, nudged forward by one millisecond when it has not advanced
/// since the previous read.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        let wall = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
            .unwrap_or(0);

        let mut last = LAST_ISSUED_MS.load(Ordering::Relaxed);
        loop {
            let next = wall.max(last.saturating_add(1));
            match LAST_ISSUED_MS.compare_exchange_weak(
                last,
                next,
                Ordering::Relaxed,
                Ordering::Relaxed,
            ) {
                Ok(_) => return next,
                Err(observed) => last = observed,
            }
        }
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> i64 {
        (**self).now_ms()
    }
}

/// Assigns creation timestamps: `created` and `updated` get the same instant.
pub fn stamp_create(row: &mut CategoryRow, clock: &impl Clock) {
    let now = clock.now_ms();
    row.created = now;
    row.updated = now;
}

/// Assigns the modification timestamp, leaving `created` untouched.
pub fn stamp_update(row: &mut CategoryRow, clock: &impl Clock) {
    row.updated = clock.now_ms();
}
