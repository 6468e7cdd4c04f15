use log::debug;
use macroquad::window::next_frame;

use super::clock::FrameClock;
use super::events::{Event, EventSource};
use crate::rendering::Surface;

/// Signal returned by event handlers and frames: keep looping, or stop.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ControlFlow {
    Continue,
    Quit,
}

/// The capability set a simulation exposes to the runtime loop.
/// The loop holds this interface explicitly rather than relying on
/// overridable placeholder methods.
pub trait Simulation {
    /// React to a single input event
    fn handle_event(&mut self, event: Event) -> ControlFlow;

    /// Advance the simulation by one tick
    fn update(&mut self);

    /// Draw the current state onto the surface
    fn draw(&mut self, surface: &mut dyn Surface);
}

/// RuntimeLoop owns the FrameClock and sequences each frame:
/// poll events, dispatch, update, draw, present, pace.
pub struct RuntimeLoop {
    clock: FrameClock,
}

impl RuntimeLoop {
    pub fn new(clock: FrameClock) -> Self {
        Self { clock }
    }

    /// Run frames until a handler signals quit, then return so the caller
    /// can unwind windowing resources and exit cleanly. Every frame is
    /// strictly sequential; nothing overlaps.
    pub async fn run<S: Simulation>(
        mut self,
        sim: &mut S,
        events: &mut impl EventSource,
        surface: &mut impl Surface,
    ) {
        loop {
            if self.frame(sim, events, surface) == ControlFlow::Quit {
                debug!("quit signaled, leaving the runtime loop");
                return;
            }
            next_frame().await;
            self.clock.wait_for_next_tick();
        }
    }

    /// One frame minus present and pacing: drain the event source, dispatch
    /// every event in production order, then update and draw. Once quit is
    /// signaled all remaining events are still dispatched, but the frame's
    /// update and draw are skipped.
    pub fn frame<S: Simulation>(
        &mut self,
        sim: &mut S,
        events: &mut impl EventSource,
        surface: &mut impl Surface,
    ) -> ControlFlow {
        let mut flow = ControlFlow::Continue;
        for event in events.poll() {
            if sim.handle_event(event) == ControlFlow::Quit {
                flow = ControlFlow::Quit;
            }
        }
        if flow == ControlFlow::Quit {
            return ControlFlow::Quit;
        }

        sim.update();
        sim.draw(surface);
        ControlFlow::Continue
    }
}
