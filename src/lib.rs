// Domain layer - Core automaton logic
pub mod domain;

// Application layer - Simulation glue
pub mod application;

// Infrastructure layer - loop, input, rendering, configuration
pub mod config;
pub mod engine;
pub mod rendering;

// Re-exports for convenience
pub use application::{LifeSimulation, RenderConfig};
pub use config::{Config, ConfigError};
pub use domain::{Cell, Grid};
pub use engine::{ControlFlow, Event, EventSource, FrameClock, RuntimeLoop, Simulation};
pub use rendering::Surface;
