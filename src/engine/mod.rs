mod clock;
mod events;
mod runtime;

pub use clock::FrameClock;
pub use events::{Event, EventSource, WindowEvents};
pub use runtime::{ControlFlow, RuntimeLoop, Simulation};
