//! Cancellation sources for a running movement.
//!
//! The controller polls its signal once per tick, before issuing the next
//! drive command. A cancelled movement still ends with a stop command.

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

/// Something the control loop can poll to learn it should give up.
pub trait CancelSignal {
    /// Polled once per tick. Returning `true` ends the movement.
    fn is_cancelled(&mut self) -> bool;
}

/// Never cancels; the movement runs until it settles.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverCancel;

impl CancelSignal for NeverCancel {
    fn is_cancelled(&mut self) -> bool { false }
}

/// A shareable flag that another task can raise.
///
/// # Example
///
/// ```
/// use xnav::motion::waypoint::cancel::{CancelSignal, CancelToken};
///
/// let mut token = CancelToken::new();
/// let handle = token.clone();
/// assert!(!token.is_cancelled());
/// handle.cancel();
/// assert!(token.is_cancelled());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self { Self::default() }

    /// Requests cancellation of every movement polling this token.
    pub fn cancel(&self) { self.flag.store(true, Ordering::Release); }

    /// Clears a previous request so the token can be reused.
    pub fn reset(&self) { self.flag.store(false, Ordering::Release); }
}

impl CancelSignal for CancelToken {
    fn is_cancelled(&mut self) -> bool { self.flag.load(Ordering::Acquire) }
}

/// Cancels once a fixed number of ticks has been polled.
///
/// Routes use this to give each waypoint a time budget: a budget of `n`
/// ticks lets the loop issue at most `n` drive commands.
#[derive(Debug, Clone, Copy)]
pub struct TickBudget {
    remaining: u32,
}

impl TickBudget {
    pub fn new(ticks: u32) -> Self { Self { remaining: ticks } }

    /// Converts a wall-clock budget into ticks of `period`, rounding up.
    pub fn from_duration(budget: std::time::Duration, period: std::time::Duration) -> Self {
        let period = period.as_micros().max(1);
        let ticks = budget.as_micros().div_ceil(period);
        Self::new(u32::try_from(ticks).unwrap_or(u32::MAX))
    }

    pub fn remaining(&self) -> u32 { self.remaining }
}

impl CancelSignal for TickBudget {
    fn is_cancelled(&mut self) -> bool {
        if self.remaining == 0 {
            return true;
        }
        self.remaining -= 1;
        false
    }
}

/// Cancels when a closure returns `true`.
///
/// Handy for operator-driven moves, e.g. cancelling once a button is
/// released.
pub struct CancelWhen<F>(pub F);

impl<F: FnMut() -> bool> CancelSignal for CancelWhen<F> {
    fn is_cancelled(&mut self) -> bool { (self.0)() }
}

impl<T: CancelSignal + ?Sized> CancelSignal for &mut T {
    fn is_cancelled(&mut self) -> bool { (**self).is_cancelled() }
}
