use macroquad::prelude::*;

use lifesim::rendering::WindowSurface;
use lifesim::{FrameClock, LifeSimulation, RuntimeLoop, config, engine::WindowEvents};

fn window_conf() -> Conf {
    let config = config::load();
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: config.width as i32,
        window_height: config.height as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();

    let config = config::load();

    // Route window close requests through the event source instead of
    // letting the backend terminate the process directly.
    prevent_quit();

    let clock = match FrameClock::new(config.fps) {
        Ok(clock) => clock,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(2);
        }
    };

    let mut sim = LifeSimulation::new(config);
    let mut events = WindowEvents;
    let mut surface = WindowSurface;

    RuntimeLoop::new(clock).run(&mut sim, &mut events, &mut surface).await;
    // Returning unwinds the window and exits with status 0.
}
