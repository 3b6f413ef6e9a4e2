//! Leading + trailing rate limiter.
//!
//! The throttle itself never touches timers. [`Throttle::invoke`] tells the
//! caller whether to run now or to (re)arm a timer, and the timer calls
//! [`Throttle::fire_pending`] at the interval boundary. Re-arming replaces
//! any previously armed timer.

/// What the caller must do after an invocation.
#[derive(Clone, Debug, PartialEq)]
pub enum Invocation<A> {
    /// Run the callback now with these arguments.
    Run(A),
    /// Arm (or re-arm) the trailing timer for this many milliseconds.
    Defer { delay_ms: f64 },
}

#[derive(Clone, Debug)]
pub struct Throttle<A> {
    interval_ms: f64,
    last_run: Option<f64>,
    pending: Option<A>,
}

impl<A> Throttle<A> {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            last_run: None,
            pending: None,
        }
    }

    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Register a call at time `now_ms`.
    pub fn invoke(&mut self, now_ms: f64, args: A) -> Invocation<A> {
        match self.last_run {
            Some(last) if now_ms - last < self.interval_ms => {
                // Latest arguments supersede any earlier deferred call
                self.pending = Some(args);
                Invocation::Defer {
                    delay_ms: self.interval_ms - (now_ms - last),
                }
            }
            _ => {
                self.pending = None;
                self.last_run = Some(now_ms);
                Invocation::Run(args)
            }
        }
    }

    /// Timer fired: hand back the deferred arguments, if any.
    pub fn fire_pending(&mut self, now_ms: f64) -> Option<A> {
        let args = self.pending.take()?;
        self.last_run = Some(now_ms);
        Some(args)
    }
}
