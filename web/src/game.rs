use crate::timers::WebScheduler;
use crate::utils;
use goblin_whack_core as game;
use game::{Board, Phase};
use yew::prelude::*;

type Controller = game::GameController<game::GridBoard, WebScheduler>;

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Start,
    CellActivated(game::CellId),
    SpawnTimer(game::SpawnToken),
    PulseEnded(game::CellId),
}

fn cell_classes(state: game::CellState) -> Classes {
    classes!(
        "cell",
        state.occupied.then_some("active"),
        state.pulsing.then_some("whack")
    )
}

fn start_label(phase: Phase) -> &'static str {
    match phase {
        Phase::Playing => "Running…",
        Phase::Idle | Phase::GameOver => "Start Game",
    }
}

fn grid_style(config: game::BoardConfig) -> String {
    format!(
        "grid-template-columns: repeat({}, 1fr); grid-template-rows: repeat({}, 1fr);",
        config.cols(),
        config.rows()
    )
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    cell: game::CellId,
    state: game::CellState,
}

#[function_component(CellView)]
fn cell_component(props: &CellProps) -> Html {
    let CellProps { cell, state } = props.clone();

    html! {
        <div class={cell_classes(state)} data-index={cell.index().to_string()}>
            if state.occupied {
                <img class="goblin" src={game::GOBLIN_ASSET_PATH} alt={game::GOBLIN_ALT_TEXT}/>
            }
        </div>
    }
}

#[derive(Properties, Copy, Clone, Debug, PartialEq)]
pub(crate) struct GameProps {
    pub config: game::BoardConfig,
    pub seed: u64,
}

pub(crate) struct GameView {
    controller: Controller,
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let GameProps { config, seed } = *ctx.props();
        let board = game::GridBoard::new(config, seed);
        let scheduler = WebScheduler::new(ctx.link().clone());
        Self {
            controller: game::GameController::new(board, scheduler),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Start => self.controller.start(),
            CellActivated(cell) => {
                log::trace!("cell activated: {:?}", cell);
                self.controller.handle_activation(cell).has_update()
            }
            SpawnTimer(token) => self.controller.spawn_timer_fired(token).has_update(),
            PulseEnded(cell) => {
                self.controller.pulse_elapsed(cell);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let controller = &self.controller;
        let board = controller.board();
        let phase = controller.phase();
        let status = controller.status_message().unwrap_or_default();
        let cell_count = board.cell_count();

        let cb_start = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            Msg::Start
        });
        let cb_activate = ctx.link().batch_callback(move |e: MouseEvent| {
            let cell = utils::cell_from_event_target(e.target(), cell_count);
            if cell.is_none() {
                log::trace!("click outside any cell");
            }
            cell.map(Msg::CellActivated)
        });

        html! {
            <div class="goblin-whack">
                <nav>
                    <aside>{"Score: "}<span id="score">{controller.score()}</span></aside>
                    <aside>{"Misses: "}<span id="misses">{controller.misses()}</span></aside>
                </nav>
                <button id="startBtn" disabled={!controller.is_start_enabled()} onclick={cb_start}>
                    {start_label(phase)}
                </button>
                <p id="gameStatus" class={classes!("status", phase.is_finished().then_some("game-over"))}>
                    {status}
                </p>
                <div id="gameBoard" class="board" style={grid_style(board.config())} onclick={cb_activate}>
                    {
                        for board.cells().map(|(cell, state)| html! {
                            <CellView {cell} {state}/>
                        })
                    }
                </div>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn occupied_cell_is_active() {
        let classes = cell_classes(game::CellState {
            occupied: true,
            pulsing: false,
        });

        assert!(classes.contains("cell"));
        assert!(classes.contains("active"));
        assert!(!classes.contains("whack"));
    }

    #[test]
    fn pulsing_cell_keeps_whack_after_target_leaves() {
        let classes = cell_classes(game::CellState {
            occupied: false,
            pulsing: true,
        });

        assert!(classes.contains("whack"));
        assert!(!classes.contains("active"));
    }

    #[test]
    fn start_button_reads_running_while_playing() {
        assert_eq!(start_label(Phase::Idle), "Start Game");
        assert_eq!(start_label(Phase::Playing), "Running…");
        assert_eq!(start_label(Phase::GameOver), "Start Game");
    }

    #[test]
    fn grid_style_uses_board_shape() {
        let config = game::BoardConfig::new(3, 5).unwrap();
        assert_eq!(
            grid_style(config),
            "grid-template-columns: repeat(5, 1fr); grid-template-rows: repeat(3, 1fr);"
        );
    }
}
