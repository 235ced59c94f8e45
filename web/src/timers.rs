use gloo::timers::callback::Timeout;
use goblin_whack_core::{CellId, Scheduler, SpawnToken};
use yew::html::Scope;

use crate::game::{GameView, Msg};

/// Browser timers that post their firings back into the game component.
pub(crate) struct WebScheduler {
    link: Scope<GameView>,
    spawn: Option<(SpawnToken, Timeout)>,
}

impl WebScheduler {
    pub(crate) fn new(link: Scope<GameView>) -> Self {
        Self { link, spawn: None }
    }
}

impl Scheduler for WebScheduler {
    fn schedule_spawn(&mut self, token: SpawnToken, delay_ms: u32) {
        let link = self.link.clone();
        let timeout = Timeout::new(delay_ms, move || link.send_message(Msg::SpawnTimer(token)));
        // replacing drops the previous timeout, which clears it
        self.spawn = Some((token, timeout));
    }

    fn cancel_spawn(&mut self, token: SpawnToken) {
        if let Some((pending, timeout)) = self.spawn.take() {
            if pending == token {
                drop(timeout);
            } else {
                self.spawn = Some((pending, timeout));
            }
        }
    }

    fn schedule_pulse_end(&mut self, cell: CellId, delay_ms: u32) {
        let link = self.link.clone();
        // cosmetic only, left to run out on its own
        let _ = Timeout::new(delay_ms, move || link.send_message(Msg::PulseEnded(cell))).forget();
    }
}
