use alloc::vec::Vec;

use crate::*;

/// Timer backend the controller schedules its work through.
///
/// At most one spawn timer is outstanding at a time. The controller always
/// cancels the pending token before scheduling another, and rejects firings
/// whose token is no longer pending, so a backend that cannot truly cancel is
/// still correct.
pub trait Scheduler {
    /// Arrange for `spawn_timer_fired(token)` to be called after `delay_ms`.
    fn schedule_spawn(&mut self, token: SpawnToken, delay_ms: u32);

    fn cancel_spawn(&mut self, token: SpawnToken);

    /// Arrange for `pulse_elapsed(cell)` to be called after `delay_ms`.
    fn schedule_pulse_end(&mut self, cell: CellId, delay_ms: u32);
}

/// Scheduler for hosts that drive time themselves.
///
/// Nothing fires on its own: the host reads [`ManualScheduler::pending_spawn`]
/// and [`ManualScheduler::take_pulses`] and calls back into the controller.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ManualScheduler {
    pending_spawn: Option<(SpawnToken, u32)>,
    pulses: Vec<(CellId, u32)>,
    scheduled: usize,
    cancelled: usize,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending_spawn(&self) -> Option<SpawnToken> {
        self.pending_spawn.map(|(token, _)| token)
    }

    pub fn pending_delay(&self) -> Option<u32> {
        self.pending_spawn.map(|(_, delay_ms)| delay_ms)
    }

    /// Lets the pending spawn timer elapse, returning the token to deliver.
    pub fn fire_spawn(&mut self) -> Option<SpawnToken> {
        self.pending_spawn.take().map(|(token, _)| token)
    }

    pub fn take_pulses(&mut self) -> Vec<(CellId, u32)> {
        core::mem::take(&mut self.pulses)
    }

    /// Number of spawn timers ever scheduled.
    pub fn scheduled_count(&self) -> usize {
        self.scheduled
    }

    pub fn cancelled_count(&self) -> usize {
        self.cancelled
    }
}

impl Scheduler for ManualScheduler {
    fn schedule_spawn(&mut self, token: SpawnToken, delay_ms: u32) {
        if let Some((previous, _)) = self.pending_spawn {
            log::warn!("spawn {:?} scheduled over pending {:?}", token, previous);
        }
        self.pending_spawn = Some((token, delay_ms));
        self.scheduled += 1;
    }

    fn cancel_spawn(&mut self, token: SpawnToken) {
        if self.pending_spawn.is_some_and(|(pending, _)| pending == token) {
            self.pending_spawn = None;
            self.cancelled += 1;
        }
    }

    fn schedule_pulse_end(&mut self, cell: CellId, delay_ms: u32) {
        self.pulses.push((cell, delay_ms));
    }
}
