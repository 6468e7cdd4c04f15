use macroquad::input::{KeyCode, get_keys_pressed, is_quit_requested};

/// Input events the runtime loop dispatches to the simulation each frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    /// Window close request, or the Escape key
    Quit,
    /// Any other pressed key; the simulation may act on it or ignore it
    Key(KeyCode),
}

/// Yields the input events produced since the previous poll, in order.
pub trait EventSource {
    fn poll(&mut self) -> Vec<Event>;
}

/// Event source backed by the macroquad window.
/// Requires `prevent_quit()` at startup so close requests are observable
/// here instead of killing the process behind the loop's back.
pub struct WindowEvents;

impl EventSource for WindowEvents {
    fn poll(&mut self) -> Vec<Event> {
        let mut events = Vec::new();
        if is_quit_requested() {
            events.push(Event::Quit);
        }
        for key in get_keys_pressed() {
            events.push(match key {
                KeyCode::Escape => Event::Quit,
                other => Event::Key(other),
            });
        }
        events
    }
}
