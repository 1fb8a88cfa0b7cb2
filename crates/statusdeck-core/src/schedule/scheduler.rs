use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, error, info};

use crate::gateway::Transport;
use crate::sync::Orchestrator;

/// Longest accepted refresh period; larger requests are clamped to it.
pub const MAX_INTERVAL_SECS: u64 = 7 * 24 * 60 * 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    Idle,
    Armed(Duration),
}

struct ArmedTimer {
    period: Duration,
    handle: JoinHandle<()>,
}

/// Drives sync cycles from a recurring timer and from manual triggers.
///
/// At most one timer exists at a time: arming always aborts the previous
/// one first. Aborting a timer never cancels a cycle it already started.
///
/// Must be used from within a tokio runtime.
pub struct RefreshScheduler<T> {
    orchestrator: Arc<Orchestrator<T>>,
    timer: Mutex<Option<ArmedTimer>>,
}

impl<T: Transport> RefreshScheduler<T> {
    pub fn new(orchestrator: Arc<Orchestrator<T>>) -> Self {
        Self {
            orchestrator,
            timer: Mutex::new(None),
        }
    }

    pub fn orchestrator(&self) -> &Arc<Orchestrator<T>> {
        &self.orchestrator
    }

    /// Arm the timer with the initial interval, then run one cycle right away.
    pub fn start(&self, initial_secs: i64) -> JoinHandle<()> {
        self.set_interval(initial_secs);
        self.trigger()
    }

    /// Replace the recurring timer.
    ///
    /// `secs <= 0` leaves the scheduler idle. Otherwise a cycle is started
    /// every `secs` seconds (at most [`MAX_INTERVAL_SECS`]), the first one
    /// after a full period.
    pub fn set_interval(&self, secs: i64) -> SchedulerState {
        let mut timer = self.lock_timer();

        if let Some(previous) = timer.take() {
            previous.handle.abort();
            debug!(
                event = "core.schedule.timer_cancelled",
                period_secs = previous.period.as_secs()
            );
        }

        if secs <= 0 {
            info!(event = "core.schedule.disarmed");
            return SchedulerState::Idle;
        }

        let period = Duration::from_secs(secs.unsigned_abs().min(MAX_INTERVAL_SECS));
        let orchestrator = Arc::clone(&self.orchestrator);
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                debug!(event = "core.schedule.tick");
                // Detached so aborting the timer leaves in-flight cycles alone.
                let orchestrator = Arc::clone(&orchestrator);
                tokio::spawn(async move { orchestrator.run_cycle().await });
            }
        });

        *timer = Some(ArmedTimer { period, handle });
        info!(event = "core.schedule.armed", period_secs = period.as_secs());

        SchedulerState::Armed(period)
    }

    /// Start one cycle now. The armed interval is left as it is.
    pub fn trigger(&self) -> JoinHandle<()> {
        info!(event = "core.schedule.manual_trigger");
        let orchestrator = Arc::clone(&self.orchestrator);
        tokio::spawn(async move { orchestrator.run_cycle().await })
    }

    pub fn state(&self) -> SchedulerState {
        match self.lock_timer().as_ref() {
            Some(timer) if !timer.handle.is_finished() => SchedulerState::Armed(timer.period),
            _ => SchedulerState::Idle,
        }
    }

    /// Stop the timer. Cycles already running finish on their own.
    pub fn shutdown(&self) {
        if let Some(timer) = self.lock_timer().take() {
            timer.handle.abort();
            info!(event = "core.schedule.shutdown");
        }
    }

    fn lock_timer(&self) -> MutexGuard<'_, Option<ArmedTimer>> {
        match self.timer.lock() {
            Ok(guard) => guard,
            Err(e) => {
                error!(
                    event = "core.schedule.timer_lock_poisoned",
                    error = %e,
                );
                e.into_inner()
            }
        }
    }
}

impl<T> Drop for RefreshScheduler<T> {
    fn drop(&mut self) {
        let timer = match self.timer.get_mut() {
            Ok(timer) => timer,
            Err(e) => e.into_inner(),
        };
        if let Some(timer) = timer.take() {
            timer.handle.abort();
        }
    }
}
