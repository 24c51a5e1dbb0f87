use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::Context;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use sparse_life::{
    application::{Simulation, resolve_board_size},
    config::{Cli, RenderMode, SimulationConfig, extended_help},
    logging, terminal,
};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if cli.extended_help {
        print!("{}", extended_help());
        return Ok(());
    }

    logging::init_logging(logging::DEFAULT_DIRECTIVE)?;

    // Fails before any simulation work when the renderer, pattern or rule is unusable
    let config = SimulationConfig::from_cli(&cli)?;

    let piped = terminal::read_piped_input();
    let (board, source) = resolve_board_size(piped.as_deref(), terminal::detect_board_size());
    info!(width = board.width, height = board.height, ?source, "board size");

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let options = RunOptions::from(&config);
    let sim = Simulation::new(board, config.start, config.rule, &mut rng);
    info!(pattern = sim.start.name(), population = sim.current().len(), "simulation ready");

    match config.mode {
        RenderMode::Text => run_text(sim, &options),
        RenderMode::Graphical => run_graphical(sim, &options, rng),
    }
}

/// Loop settings shared by both renderers
struct RunOptions {
    delay: std::time::Duration,
    generations: Option<u64>,
}

impl From<&SimulationConfig> for RunOptions {
    fn from(config: &SimulationConfig) -> Self {
        Self {
            delay: config.delay,
            generations: config.generations,
        }
    }
}

/// Text mode: Ctrl+C raises the stop flag the loop checks between steps
fn run_text(mut sim: Simulation, options: &RunOptions) -> anyhow::Result<()> {
    let stop = Arc::new(AtomicBool::new(false));
    {
        let stop = Arc::clone(&stop);
        ctrlc::set_handler(move || stop.store(true, Ordering::SeqCst))
            .context("failed to install interrupt handler")?;
    }

    let stdout = io::stdout();
    terminal::run_text_loop(&mut sim, &mut stdout.lock(), &stop, options.delay, options.generations)?;
    Ok(())
}

#[cfg(feature = "graphics")]
fn run_graphical(sim: Simulation, options: &RunOptions, rng: StdRng) -> anyhow::Result<()> {
    use macroquad::prelude::Conf;

    let conf = Conf {
        window_title: "Sparse Life".to_owned(),
        window_width: 1000,
        window_height: 800,
        window_resizable: true,
        ..Default::default()
    };

    let sim = sim.with_delay_ms(options.delay.as_millis().try_into().unwrap_or(u64::MAX));
    macroquad::Window::from_config(conf, graphical_loop(sim, options.generations, rng));

    println!("Simulation stopped.");
    Ok(())
}

#[cfg(not(feature = "graphics"))]
fn run_graphical(_sim: Simulation, _options: &RunOptions, _rng: StdRng) -> anyhow::Result<()> {
    Err(sparse_life::LifeError::RendererUnavailable.into())
}

#[cfg(feature = "graphics")]
async fn graphical_loop(mut state: Simulation, limit: Option<u64>, mut rng: StdRng) {
    use macroquad::prelude::*;
    use sparse_life::input::{self, Control, DragState};
    use sparse_life::rendering;

    let mut drag = DragState::default();
    let mut show_help = false;
    state.fit_view(screen_width() as f64, screen_height() as f64);

    loop {
        let area = (screen_width(), screen_height());
        let mouse_pos = mouse_position();

        input::handle_zoom(&mut state.viewport, area);
        input::handle_pan(&mut state.viewport, &mut drag, mouse_pos);
        if is_key_pressed(KeyCode::H) {
            show_help = !show_help;
        }

        let (next, control) = input::process_keyboard_input(state, area, &mut rng);
        state = next;
        if control == Control::Quit {
            break;
        }

        if !state.reached_limit(limit) {
            state = state.tick(get_frame_time());
        }

        clear_background(BLACK);
        rendering::graphics::draw_generation(state.current(), &state.viewport, area.0, area.1);
        rendering::graphics::draw_hud(&state, show_help);

        next_frame().await;
    }

    tracing::info!(generation = state.generation, "window closed");
}
