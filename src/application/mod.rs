mod life;

pub use life::{LifeSimulation, RenderConfig};
