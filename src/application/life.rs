use log::{info, trace};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::Config;
use crate::domain::Grid;
use crate::engine::{ControlFlow, Event, Simulation};
use crate::rendering::{BACKGROUND, Surface, live_color};

/// How cell state maps onto pixels.
#[derive(Clone, Copy, Debug)]
pub struct RenderConfig {
    /// Edge length of one cell in pixels
    pub cell_size: u32,
    /// Randomized palette colors for live cells instead of fixed white
    pub colors: bool,
}

/// LifeSimulation owns the grid and drives it one generation per tick.
/// This is the application layer gluing the domain to the runtime loop.
pub struct LifeSimulation {
    grid: Grid,
    render: RenderConfig,
    rng: StdRng,
    generation: u64,
}

impl LifeSimulation {
    /// Seed a fresh simulation from validated configuration.
    pub fn new(config: &Config) -> Self {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let (columns, rows) = config.grid_dimensions();
        let grid = Grid::random(columns, rows, config.alive_probability, &mut rng);
        info!(
            "grid {columns}x{rows}, {} fps, cell size {}px, colors {}",
            config.fps, config.cell_size, config.colors
        );

        Self {
            grid,
            render: RenderConfig {
                cell_size: config.cell_size,
                colors: config.colors,
            },
            rng,
            generation: 0,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }
}

impl Simulation for LifeSimulation {
    fn handle_event(&mut self, event: Event) -> ControlFlow {
        match event {
            Event::Quit => {
                info!("quit requested at generation {}", self.generation);
                ControlFlow::Quit
            }
            // Extension point for interaction; nothing is mapped yet.
            Event::Key(_) => ControlFlow::Continue,
        }
    }

    fn update(&mut self) {
        self.grid = self.grid.step();
        self.generation += 1;
        trace!("advanced to generation {}", self.generation);
    }

    fn draw(&mut self, surface: &mut dyn Surface) {
        surface.clear(BACKGROUND);
        let size = self.render.cell_size as f32;
        for (x, y, cell) in self.grid.iter_cells() {
            let color = if cell.is_alive() {
                live_color(self.render.colors, &mut self.rng)
            } else {
                BACKGROUND
            };
            surface.fill_rect(x as f32 * size, y as f32 * size, size, size, color);
        }
    }
}
