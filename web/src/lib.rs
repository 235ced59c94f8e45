use clap::Parser;
use goblin_whack_core::{BoardConfig, Coord, DEFAULT_COLS, DEFAULT_ROWS, MOUNT_ID};
use wasm_bindgen::prelude::*;

mod game;
mod timers;
mod utils;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of grid rows
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    rows: Coord,

    /// Number of grid columns
    #[arg(long, default_value_t = DEFAULT_COLS)]
    cols: Coord,
}

impl Args {
    /// Options are passed in the location hash, e.g. `#--rows=5&--seed=42&-vv`.
    fn from_location_hash(hash: &str) -> Result<Self, clap::Error> {
        Self::try_parse_from(hash.split(['#', '&']))
    }
}

#[wasm_bindgen(start)]
pub fn run_app() -> Result<(), JsValue> {
    use gloo::utils::window;

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window().location().hash().unwrap_or_default();
    let args = Args::from_location_hash(&location_hash)
        .map_err(|err| JsValue::from_str(&err.to_string()))?;
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level)
            .map_err(|err| JsValue::from_str(&err.to_string()))?;
    }

    let config = BoardConfig::new(args.rows, args.cols).map_err(utils::to_js_error)?;
    let seed = args.seed.unwrap_or_else(utils::js_random_seed);
    log::debug!("seed: {}", seed);

    let root = utils::mount_root(MOUNT_ID).map_err(utils::to_js_error)?;

    log::debug!("App started");
    yew::Renderer::<game::GameView>::with_root_and_props(root, game::GameProps { config, seed })
        .render();
    Ok(())
}
