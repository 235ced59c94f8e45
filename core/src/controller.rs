use alloc::format;
use alloc::string::String;

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Playing,
    GameOver,
}

impl Phase {
    pub const fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::GameOver)
    }
}

impl Default for Phase {
    fn default() -> Self {
        Self::Idle
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ActivationOutcome {
    Ignored,
    Hit,
}

impl ActivationOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::Ignored => false,
            Self::Hit => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TimerOutcome {
    /// Cancelled or superseded timer, nothing happened.
    Stale,
    /// The target timed out and moved.
    Relocated,
    /// The timeout was the last allowed miss.
    GameOver,
}

impl TimerOutcome {
    pub const fn has_update(self) -> bool {
        use TimerOutcome::*;
        match self {
            Stale => false,
            Relocated => true,
            GameOver => true,
        }
    }
}

pub const STATUS_PLAYING: &str = "Game started! Whack the goblins!";

/// Game rules: score, misses, lifecycle and the spawn timer.
///
/// Owns the board and the scheduler. Every method runs to completion, and the
/// pending spawn token is cancelled on each transition out of the current
/// target (start, hit, game end), so stale timers are harmless.
#[derive(Debug)]
pub struct GameController<B, S> {
    board: B,
    scheduler: S,
    score: Points,
    misses: Points,
    phase: Phase,
    current_target: Option<CellId>,
    pending_spawn: Option<SpawnToken>,
    last_token: SpawnToken,
}

impl<B: Board, S: Scheduler> GameController<B, S> {
    pub fn new(board: B, scheduler: S) -> Self {
        Self {
            board,
            scheduler,
            score: 0,
            misses: 0,
            phase: Phase::default(),
            current_target: None,
            pending_spawn: None,
            last_token: SpawnToken::new(0),
        }
    }

    pub fn board(&self) -> &B {
        &self.board
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn score(&self) -> Points {
        self.score
    }

    pub fn misses(&self) -> Points {
        self.misses
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current_target(&self) -> Option<CellId> {
        self.current_target
    }

    pub fn pending_spawn(&self) -> Option<SpawnToken> {
        self.pending_spawn
    }

    pub fn is_start_enabled(&self) -> bool {
        !self.phase.is_playing()
    }

    pub fn status_message(&self) -> Option<String> {
        match self.phase {
            Phase::Idle => None,
            Phase::Playing => Some(String::from(STATUS_PLAYING)),
            Phase::GameOver => Some(format!("Game Over! Final Score: {}", self.score)),
        }
    }

    /// Starts a fresh game. Returns `false` if a game is already running.
    pub fn start(&mut self) -> bool {
        if self.phase.is_playing() {
            log::debug!("start ignored, game already running");
            return false;
        }

        self.score = 0;
        self.misses = 0;
        self.clear_target();
        self.cancel_pending_spawn();
        self.phase = Phase::Playing;
        log::info!("game started");

        self.spawn_or_relocate();
        true
    }

    /// Entry point for the spawn timer.
    pub fn spawn_timer_fired(&mut self, token: SpawnToken) -> TimerOutcome {
        if !self.phase.is_playing() || self.pending_spawn != Some(token) {
            log::trace!("stale spawn timer {:?}", token);
            return TimerOutcome::Stale;
        }

        self.pending_spawn = None;
        self.spawn_or_relocate();

        if self.phase.is_finished() {
            TimerOutcome::GameOver
        } else {
            TimerOutcome::Relocated
        }
    }

    pub fn handle_activation(&mut self, cell: CellId) -> ActivationOutcome {
        if !self.phase.is_playing() {
            log::trace!("activation of {:?} while {:?}", cell, self.phase);
            return ActivationOutcome::Ignored;
        }

        if self.current_target != Some(cell) || !self.board.is_occupied(cell) {
            log::trace!("activation of {:?} missed the target", cell);
            return ActivationOutcome::Ignored;
        }

        self.board.start_pulse(cell);
        self.scheduler.schedule_pulse_end(cell, PULSE_DURATION_MS);

        self.score += 1;
        log::debug!("hit {:?}, score {}", cell, self.score);

        self.board.clear_occupied(cell);
        self.cancel_pending_spawn();
        self.current_target = None;
        self.spawn_target(Some(cell));

        ActivationOutcome::Hit
    }

    /// Reverts the hit pulse on `cell`. Never touches game state.
    pub fn pulse_elapsed(&mut self, cell: CellId) {
        self.board.end_pulse(cell);
    }

    pub fn end_game(&mut self) {
        if !self.phase.is_playing() {
            return;
        }

        self.phase = Phase::GameOver;
        self.clear_target();
        self.cancel_pending_spawn();
        log::info!("game over, final score {}", self.score);
    }

    /// Counts a timeout if a target is showing, then places the next one.
    fn spawn_or_relocate(&mut self) {
        if !self.phase.is_playing() {
            return;
        }

        let previous = self.current_target.take();
        if let Some(cell) = previous {
            self.board.clear_occupied(cell);
            self.register_miss();
            if !self.phase.is_playing() {
                return;
            }
        }

        self.spawn_target(previous);
    }

    fn spawn_target(&mut self, previous: Option<CellId>) {
        let cell = self.select_target(previous);
        self.board.mark_occupied(cell);
        self.current_target = Some(cell);
        log::trace!("target at {:?}", cell);

        let token = self.last_token.next();
        self.last_token = token;
        self.pending_spawn = Some(token);
        self.scheduler.schedule_spawn(token, SPAWN_INTERVAL_MS);
    }

    fn select_target(&mut self, previous: Option<CellId>) -> CellId {
        let drawn = self.board.pick_random_cell();
        match previous {
            Some(previous) if drawn == previous && self.board.cell_count() > 1 => {
                self.board.first_cell_except(previous).unwrap_or(drawn)
            }
            _ => drawn,
        }
    }

    fn register_miss(&mut self) {
        self.misses += 1;
        log::debug!("miss {}/{}", self.misses, MISS_LIMIT);

        if self.misses >= MISS_LIMIT {
            self.end_game();
        }
    }

    fn clear_target(&mut self) {
        if let Some(cell) = self.current_target.take() {
            self.board.clear_occupied(cell);
        }
    }

    fn cancel_pending_spawn(&mut self) {
        if let Some(token) = self.pending_spawn.take() {
            self.scheduler.cancel_spawn(token);
        }
    }
}
