mod frame_input;
mod render;
mod window_config;

use std::env;
use std::io;
use std::path::Path;

use app::app_loop::AppState;
use app::seed::{SeedChoice, generate_runtime_seed, parse_launch_args};
use app::session::Session;
use chase_core::ChaseConfig;
use macroquad::prelude::next_frame;
use macroquad::window::Conf;
use tracing::{Level, error, info};
use tracing_subscriber::EnvFilter;

const CONFIG_ENV: &str = "CHASE_CONFIG";

fn window_conf() -> Conf {
    window_config::build_window_conf()
}

fn load_config() -> Result<ChaseConfig, String> {
    match env::var(CONFIG_ENV) {
        Ok(path) => ChaseConfig::load(Path::new(&path)).map_err(|err| err.to_string()),
        Err(_) => Ok(ChaseConfig::default()),
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let options = match parse_launch_args(&args, generate_runtime_seed()) {
        Ok(options) => options,
        Err(message) => {
            error!(%message, "invalid launch arguments");
            return;
        }
    };
    let mut config = match load_config() {
        Ok(config) => config,
        Err(message) => {
            error!(%message, "could not load {CONFIG_ENV}");
            return;
        }
    };
    config.seed = options.seed.value();
    if let Some(difficulty) = options.difficulty {
        config.difficulty = difficulty;
    }
    let source = match options.seed {
        SeedChoice::Cli(_) => "cli",
        SeedChoice::Generated(_) => "generated",
    };
    info!(seed = config.seed, source, difficulty = config.difficulty.label(), "starting viewer");

    let mut session = match Session::new(config) {
        Ok(session) => session,
        Err(message) => {
            error!(%message, "could not build session");
            return;
        }
    };
    let mut app = AppState::new();

    loop {
        let input = frame_input::capture_frame_input();
        app.tick(&mut session, &input.keys_down, &input.keys_pressed);
        render::draw_frame(&session, &app);
        next_frame().await
    }
}
